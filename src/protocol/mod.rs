mod builders;
mod constants;
mod parsers;
mod types;

// Re-export all public items so consumers can `use crate::protocol::*`

// Constants
pub use constants::*;
// Builders
#[allow(unused_imports)]
pub use builders::{SequenceCounter, build_link_dump_request};
// Parsers
#[allow(unused_imports)]
pub use parsers::{Attr, AttrIter, Message, MessageIter, ifname_from_value, link_entry, parse_link_info};
// Types
#[allow(unused_imports)]
pub use types::{InnerType, LinkEntry, LinkInfo, MessageHeader, OuterType};
