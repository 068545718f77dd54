use super::constants::*;
use super::types::{InnerType, LinkEntry, LinkInfo, MessageHeader, OuterType};

/// One outer record framed out of a receive buffer.
#[derive(Debug, Clone, Copy)]
pub struct Message<'a> {
    pub header: MessageHeader,
    pub payload: &'a [u8],
}

/// Cursor over the outer records of one datagram.
///
/// Yields records while the remaining bytes can hold a well-formed one:
/// at least a full header, and the declared length fits what is left.
/// Stopping early is not an error — the kernel answers a dump with a
/// logical byte stream that may span several datagrams, and a buffer
/// that does not end on a record boundary is the only "more datagrams
/// coming" signal there is.
pub struct MessageIter<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> MessageIter<'a> {
    /// Iterate the first `buf.len()` bytes; pass `&buf[..n]` for a
    /// datagram of `n` bytes.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }
}

impl<'a> Iterator for MessageIter<'a> {
    type Item = Message<'a>;

    fn next(&mut self) -> Option<Message<'a>> {
        let rest = &self.buf[self.offset..];
        if rest.len() < NLMSG_HDRLEN {
            return None;
        }
        let len = u32::from_ne_bytes([rest[0], rest[1], rest[2], rest[3]]) as usize;
        if len < NLMSG_HDRLEN || len > rest.len() {
            // Truncated record: end of usable data in this datagram.
            return None;
        }

        let header = MessageHeader {
            len: len as u32,
            kind: OuterType::from_raw(u16::from_ne_bytes([rest[4], rest[5]])),
            flags: u16::from_ne_bytes([rest[6], rest[7]]),
            seq: u32::from_ne_bytes([rest[8], rest[9], rest[10], rest[11]]),
            pid: u32::from_ne_bytes([rest[12], rest[13], rest[14], rest[15]]),
        };
        let payload = &rest[NLMSG_HDRLEN..len];

        // The final record may be unpadded; clamp so the next call sees
        // an empty remainder instead of slicing out of bounds.
        self.offset = (self.offset + nlmsg_align(len)).min(self.buf.len());
        Some(Message { header, payload })
    }
}

/// One attribute framed out of a NEWLINK payload.
#[derive(Debug, Clone, Copy)]
pub struct Attr<'a> {
    pub kind: InnerType,
    pub value: &'a [u8],
}

/// Cursor over the attributes that follow the interface descriptor.
/// Same boundary rule as [`MessageIter`], with a 4-byte header.
pub struct AttrIter<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> AttrIter<'a> {
    /// `buf` is the payload region *after* the interface descriptor.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }
}

impl<'a> Iterator for AttrIter<'a> {
    type Item = Attr<'a>;

    fn next(&mut self) -> Option<Attr<'a>> {
        let rest = &self.buf[self.offset..];
        if rest.len() < RTA_HDRLEN {
            return None;
        }
        let len = u16::from_ne_bytes([rest[0], rest[1]]) as usize;
        if len < RTA_HDRLEN || len > rest.len() {
            return None;
        }

        let attr = Attr {
            kind: InnerType::from_raw(u16::from_ne_bytes([rest[2], rest[3]])),
            value: &rest[RTA_HDRLEN..len],
        };
        self.offset = (self.offset + nlmsg_align(len)).min(self.buf.len());
        Some(attr)
    }
}

/// Split a NEWLINK payload into its fixed descriptor and an attribute
/// cursor over the remainder. `None` if the payload is too short to
/// hold the descriptor.
pub fn parse_link_info(payload: &[u8]) -> Option<(LinkInfo, AttrIter<'_>)> {
    if payload.len() < IFINFO_LEN {
        return None;
    }
    let info = LinkInfo {
        family: payload[0],
        // payload[1] is structure padding
        device_type: u16::from_ne_bytes([payload[2], payload[3]]),
        index: i32::from_ne_bytes([payload[4], payload[5], payload[6], payload[7]]),
        flags: u32::from_ne_bytes([payload[8], payload[9], payload[10], payload[11]]),
        change: u32::from_ne_bytes([payload[12], payload[13], payload[14], payload[15]]),
    };
    Some((info, AttrIter::new(&payload[IFINFO_LEN..])))
}

/// Interface name out of an IFNAME attribute value. The kernel
/// NUL-terminates the name; anything after the first NUL is dropped.
pub fn ifname_from_value(value: &[u8]) -> Option<String> {
    let bytes = value.split(|&b| b == 0).next()?;
    std::str::from_utf8(bytes).ok().map(str::to_owned)
}

/// Derive a [`LinkEntry`] from one outer record: NEWLINK type, a whole
/// descriptor, and an IFNAME attribute. Anything else yields `None`
/// (unknown attributes are skipped, not an error).
pub fn link_entry(msg: &Message<'_>) -> Option<LinkEntry> {
    if msg.header.kind != OuterType::NewLink {
        return None;
    }
    let (info, attrs) = parse_link_info(msg.payload)?;
    for attr in attrs {
        if attr.kind == InnerType::IfName {
            let name = ifname_from_value(attr.value)?;
            return Some(LinkEntry { index: info.index, name });
        }
    }
    None
}
