//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

/// A netlink route socket binds the process pid as its address, so two
/// concurrently open channels in one test process collide. Serialize
/// every test that opens a real channel through this lock.
static PROBE_LOCK: Mutex<()> = Mutex::new(());

pub fn probe_lock() -> MutexGuard<'static, ()> {
    // A poisoned lock only means another test failed; the socket it
    // held is closed, so the channel is still usable.
    PROBE_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Returns `true` if the test should be skipped because it needs root
/// (prints the reason to stderr). `unshare(CLONE_NEWNET)` requires
/// CAP_SYS_ADMIN.
pub fn skip_without_root() -> bool {
    if nix::unistd::Uid::effective().is_root() {
        false
    } else {
        eprintln!("Skipping: requires root for unshare(CLONE_NEWNET)");
        true
    }
}
