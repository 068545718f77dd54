use super::constants::*;

/// Outer message type tag, decoded once at parse time.
///
/// Only the four tags the dump loop acts on get their own variant;
/// everything else is carried as `Other` and skipped by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterType {
    /// End of a multi-datagram dump.
    Done,
    /// Kernel-reported protocol error; terminal for the current dump.
    Error,
    Noop,
    /// Link description: interface descriptor plus attributes.
    NewLink,
    Other(u16),
}

impl OuterType {
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            NLMSG_DONE => OuterType::Done,
            NLMSG_ERROR => OuterType::Error,
            NLMSG_NOOP => OuterType::Noop,
            RTM_NEWLINK => OuterType::NewLink,
            other => OuterType::Other(other),
        }
    }

    #[allow(dead_code)]
    pub const fn as_raw(self) -> u16 {
        match self {
            OuterType::Done => NLMSG_DONE,
            OuterType::Error => NLMSG_ERROR,
            OuterType::Noop => NLMSG_NOOP,
            OuterType::NewLink => RTM_NEWLINK,
            OuterType::Other(raw) => raw,
        }
    }
}

/// Attribute type tag. Only the interface name is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerType {
    IfName,
    Other(u16),
}

impl InnerType {
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            IFLA_IFNAME => InnerType::IfName,
            other => InnerType::Other(other),
        }
    }
}

/// Parsed 16-byte outer record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)] // the dump loop only dispatches on `kind`; the rest is for callers and tests
pub struct MessageHeader {
    /// Total record length, header included.
    pub len: u32,
    pub kind: OuterType,
    pub flags: u16,
    pub seq: u32,
    /// Originating process id (0 for the kernel).
    pub pid: u32,
}

/// Fixed interface descriptor at the start of a NEWLINK payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)] // only `index` feeds the emitted entries
pub struct LinkInfo {
    pub family: u8,
    pub device_type: u16,
    pub index: i32,
    pub flags: u32,
    /// Change mask; all-ones in requests means "full state".
    pub change: u32,
}

/// One interface observed in a dump. Transient: nothing is kept
/// between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub index: i32,
    pub name: String,
}
