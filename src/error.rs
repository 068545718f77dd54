use nix::errno::Errno;
use thiserror::Error;

/// Failure of one probe operation.
///
/// Every failure is terminal for its scope and there are no retries:
/// socket-setup failures abort the phase, a kernel error record aborts
/// the current dump, a namespace-switch failure is reported and the
/// probe carries on.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("netlink socket create failed: {0}")]
    SocketCreate(#[source] Errno),

    #[error("netlink socket bind failed: {0}")]
    SocketBind(#[source] Errno),

    #[error("netlink socket connect failed: {0}")]
    SocketConnect(#[source] Errno),

    #[error("netlink send failed: {0}")]
    Send(#[source] Errno),

    #[error("netlink recv failed: {0}")]
    Recv(#[source] Errno),

    /// The kernel answered the dump with an error record. The embedded
    /// errno is not inspected; the first error record ends the dump.
    #[error("kernel reported an error record, dump aborted")]
    ProtocolError,

    #[error("unshare(CLONE_NEWNET) failed: {0}")]
    NamespaceSwitch(#[source] Errno),
}
