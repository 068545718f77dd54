// rtnetlink wire-format constants.
//
// Defined here rather than pulled from libc so the codec stays a pure
// byte-level module that compiles (and tests) on any platform.

// Outer message types
pub const NLMSG_NOOP: u16 = 1;
pub const NLMSG_ERROR: u16 = 2;
pub const NLMSG_DONE: u16 = 3;
pub const RTM_NEWLINK: u16 = 16;
pub const RTM_GETLINK: u16 = 18;

// Outer header flags
pub const NLM_F_REQUEST: u16 = 0x01;
/// NLM_F_ROOT | NLM_F_MATCH: report the full table, not a delta.
pub const NLM_F_DUMP: u16 = 0x300;

// Attribute types (only the interface name is interpreted)
pub const IFLA_IFNAME: u16 = 3;

// Fixed header sizes, bytes
pub const NLMSG_HDRLEN: usize = 16;
pub const IFINFO_LEN: usize = 16;
pub const RTA_HDRLEN: usize = 4;

/// Records are laid out on a 4-byte stride within a datagram.
pub const NLMSG_ALIGNTO: usize = 4;

/// A link dump request is one outer header plus one interface
/// descriptor, nothing else.
pub const DUMP_REQUEST_LEN: usize = NLMSG_HDRLEN + IFINFO_LEN;

/// Default receive buffer size. Reply datagrams carry no advance size
/// announcement; 8 KiB comfortably holds one kernel datagram.
pub const DEFAULT_RECV_BUF_LEN: usize = 8192;

/// Round `len` up to the record stride.
pub const fn nlmsg_align(len: usize) -> usize {
    (len + NLMSG_ALIGNTO - 1) & !(NLMSG_ALIGNTO - 1)
}
