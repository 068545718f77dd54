//! Before/after probe driver.
//!
//! Dumps the link table, switches into a fresh network namespace, and
//! dumps again. The two lists are printed as independent observations;
//! diffing them is left to whoever reads the output.

use tracing::{debug, error, warn};

use crate::channel::Channel;
use crate::error::ProbeError;
use crate::netns;
use crate::protocol::{DEFAULT_RECV_BUF_LEN, SequenceCounter};
use crate::session::DumpSession;

/// Probe settings, fed from the CLI.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Receive buffer size in bytes; one reply datagram must fit.
    pub recv_buf_len: usize,
    /// Run both dump phases without the namespace switch.
    pub skip_unshare: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            recv_buf_len: DEFAULT_RECV_BUF_LEN,
            skip_unshare: false,
        }
    }
}

/// One probe phase: open a channel, dump, print, close.
///
/// Returns `Err` only for channel setup failures; a dump that dies
/// mid-flight (send, recv, or a kernel error record) is reported and
/// the entries already printed stand. The channel is dropped before
/// the caller moves on, so phases never hold two descriptors.
fn dump_phase(banner: &str, seq: &mut SequenceCounter, buf: &mut [u8]) -> Result<(), ProbeError> {
    println!("{banner}:");
    let mut channel = Channel::open()?;

    let mut session = DumpSession::new();
    let mut links = 0usize;
    let result = session.run(&mut channel, seq, buf, |entry| {
        links += 1;
        println!("  {}: {}", entry.index, entry.name);
    });
    if let Err(e) = result {
        error!("link dump aborted: {e}");
    }
    debug!(links, receives = session.receives(), "phase finished");
    Ok(())
}

/// Run the full probe: dump, unshare, dump again.
///
/// Both phases run independently: a setup failure in one skips only
/// that phase, and a namespace-switch failure still lets the second
/// dump show that isolation did not take effect. The returned error is
/// the first phase setup failure, if any, so the process can exit
/// non-zero.
pub fn run_probe(opts: &ProbeOptions) -> Result<(), ProbeError> {
    let mut seq = SequenceCounter::new();
    let mut buf = vec![0u8; opts.recv_buf_len];

    let before = dump_phase("before unshare", &mut seq, &mut buf);
    if let Err(e) = &before {
        error!("first dump phase failed: {e}");
    }

    if opts.skip_unshare {
        debug!("namespace switch disabled, dumping the same namespace twice");
    } else if let Err(e) = netns::unshare_net() {
        warn!("namespace switch failed, second dump will show the same table: {e}");
    }

    let after = dump_phase("after unshare", &mut seq, &mut buf);
    if let Err(e) = &after {
        error!("second dump phase failed: {e}");
    }

    before.and(after)
}
