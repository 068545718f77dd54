//! Link dump session: one request, then receives until DONE or failure.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::channel::Transport;
use crate::error::ProbeError;
use crate::protocol::{
    LinkEntry, MessageIter, OuterType, SequenceCounter, build_link_dump_request, link_entry,
};

/// Session progress. `MoreData` loops straight back into `Receiving`;
/// `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Requested,
    Receiving,
    MoreData,
    Done,
    Failed,
}

/// Drives one link dump over a [`Transport`].
///
/// A dump is a single request answered by a logical byte stream that
/// may span several datagrams; a datagram that ends without a DONE
/// record (or on a truncated record boundary) means another `recv` is
/// due on the same channel, under the same request.
pub struct DumpSession {
    state: SessionState,
    receives: usize,
}

impl DumpSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Requested,
            receives: 0,
        }
    }

    #[allow(dead_code)] // observed by tests
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of datagrams received so far.
    pub fn receives(&self) -> usize {
        self.receives
    }

    /// Run the dump to completion, decoding datagrams out of the
    /// caller-provided `buf` and handing every named link to `sink`.
    ///
    /// A kernel error record aborts with [`ProbeError::ProtocolError`];
    /// entries already handed to `sink` remain valid. NOOP records and
    /// unrecognized outer types are skipped.
    pub fn run<T, F>(
        &mut self,
        transport: &mut T,
        seq: &mut SequenceCounter,
        buf: &mut [u8],
        mut sink: F,
    ) -> Result<(), ProbeError>
    where
        T: Transport,
        F: FnMut(LinkEntry),
    {
        let request = build_link_dump_request(seq.next(), std::process::id());
        if let Err(e) = transport.send(&request) {
            self.state = SessionState::Failed;
            return Err(e);
        }

        loop {
            self.state = SessionState::Receiving;
            let n = match transport.recv(buf) {
                Ok(n) => n,
                Err(e) => {
                    self.state = SessionState::Failed;
                    return Err(e);
                }
            };
            self.receives += 1;
            trace!(bytes = n, "datagram received");

            let mut seen_done = false;
            for msg in MessageIter::new(&buf[..n]) {
                match msg.header.kind {
                    OuterType::Done => {
                        seen_done = true;
                        break;
                    }
                    OuterType::Error => {
                        self.state = SessionState::Failed;
                        return Err(ProbeError::ProtocolError);
                    }
                    OuterType::NewLink => {
                        if let Some(entry) = link_entry(&msg) {
                            sink(entry);
                        }
                    }
                    OuterType::Noop | OuterType::Other(_) => {}
                }
            }

            if seen_done {
                self.state = SessionState::Done;
                debug!(receives = self.receives, "dump complete");
                return Ok(());
            }
            // Ran out of usable bytes without DONE: the dump continues
            // in the next datagram, no new request.
            self.state = SessionState::MoreData;
        }
    }
}

impl Default for DumpSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one dump session and collect the entries.
#[allow(dead_code)] // used by the library surface and tests
pub fn dump_links<T: Transport>(
    transport: &mut T,
    seq: &mut SequenceCounter,
    buf: &mut [u8],
) -> Result<SmallVec<LinkEntry, 8>, ProbeError> {
    let mut entries: SmallVec<LinkEntry, 8> = SmallVec::new();
    let mut session = DumpSession::new();
    session.run(transport, seq, buf, |entry| entries.push(entry))?;
    Ok(entries)
}
