//! rtnetlink link-dump probe library.
//!
//! Speaks just enough of the rtnetlink protocol to ask the kernel for a
//! full dump of the network-interface table and decode the reply:
//! channel setup, request framing, the multi-datagram receive loop, and
//! the nested message/attribute record parser. A small driver dumps the
//! table before and after `unshare(CLONE_NEWNET)` to make the effect of
//! network namespace isolation visible.

// Use mimalloc as the global allocator for tests (non-Windows only)
#[cfg(not(windows))]
#[cfg(test)]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod channel;
pub mod error;
pub mod netns;
pub mod probe;
pub mod protocol;
pub mod session;

// Test helpers module - available when test-internals feature is enabled
#[cfg(any(test, feature = "test-internals"))]
pub mod test_helpers;

#[cfg(test)]
pub mod tests;

// Re-export commonly used items
pub use channel::{Channel, Transport};
pub use error::ProbeError;
pub use probe::{ProbeOptions, run_probe};
pub use protocol::*;
pub use session::{DumpSession, SessionState, dump_links};
