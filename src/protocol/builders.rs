use super::constants::*;

/// Per-process dump sequence counter, owned by the caller and threaded
/// through explicitly. Starts at 0, increments once per request.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    next: u32,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Return the current sequence number and advance.
    pub fn next(&mut self) -> u32 {
        let seq = self.next;
        self.next = self.next.wrapping_add(1);
        seq
    }
}

/// Build a "dump all links" request. Deterministic given `seq` and
/// `pid`; the protocol requires the result to fit one datagram.
///
/// Layout (32 bytes, host byte order):
/// - Bytes 0-3:   Total length (32)
/// - Bytes 4-5:   Type (RTM_GETLINK)
/// - Bytes 6-7:   Flags (NLM_F_REQUEST | NLM_F_DUMP)
/// - Bytes 8-11:  Sequence number
/// - Bytes 12-15: Originating pid
/// - Bytes 16-27: Interface descriptor, all zero (no filter)
/// - Bytes 28-31: Change mask, all ones ("full state, not a delta")
pub fn build_link_dump_request(seq: u32, pid: u32) -> [u8; DUMP_REQUEST_LEN] {
    let mut pkt = [0u8; DUMP_REQUEST_LEN];
    pkt[0..4].copy_from_slice(&(DUMP_REQUEST_LEN as u32).to_ne_bytes());
    pkt[4..6].copy_from_slice(&RTM_GETLINK.to_ne_bytes());
    pkt[6..8].copy_from_slice(&(NLM_F_REQUEST | NLM_F_DUMP).to_ne_bytes());
    pkt[8..12].copy_from_slice(&seq.to_ne_bytes());
    pkt[12..16].copy_from_slice(&pid.to_ne_bytes());
    pkt[28..32].copy_from_slice(&u32::MAX.to_ne_bytes());
    pkt
}
