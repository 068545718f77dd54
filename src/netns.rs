//! Network namespace switch, the external effect the probe observes.

use nix::sched::{CloneFlags, unshare};
use tracing::info;

use crate::error::ProbeError;

/// Move the calling thread into a fresh network namespace.
///
/// Requires `CAP_SYS_ADMIN`. The new namespace starts with nothing but
/// a downed loopback, which is what makes the before/after link dumps
/// visibly different.
pub fn unshare_net() -> Result<(), ProbeError> {
    unshare(CloneFlags::CLONE_NEWNET).map_err(ProbeError::NamespaceSwitch)?;
    info!("entered fresh network namespace");
    Ok(())
}
