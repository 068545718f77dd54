//! Blocking rtnetlink channel to the kernel peer.

use std::os::fd::{AsRawFd, OwnedFd};

use nix::sys::socket::{
    self, AddressFamily, MsgFlags, NetlinkAddr, SockFlag, SockProtocol, SockType,
};
use tracing::debug;

use crate::error::ProbeError;

/// Datagram transport a dump session runs over.
///
/// [`Channel`] is the kernel-backed implementation; session tests feed
/// scripted datagrams through their own.
pub trait Transport {
    /// Write one request record as a single datagram.
    fn send(&mut self, bytes: &[u8]) -> Result<usize, ProbeError>;

    /// Block until one datagram arrives; returns the bytes written
    /// into `buf`.
    fn recv(&mut self, buf: &mut [u8]) -> Result<usize, ProbeError>;
}

/// An open `NETLINK_ROUTE` socket, bound to this process and connected
/// to the kernel address. Dropping the channel closes the descriptor,
/// on every exit path.
pub struct Channel {
    fd: OwnedFd,
}

impl Channel {
    /// Create, bind and connect the socket. Each syscall maps to its
    /// own error variant so a setup failure is identifiable; there are
    /// no retries.
    pub fn open() -> Result<Self, ProbeError> {
        let fd = socket::socket(
            AddressFamily::Netlink,
            SockType::Raw,
            SockFlag::empty(),
            SockProtocol::NetlinkRoute,
        )
        .map_err(ProbeError::SocketCreate)?;

        // Our address: this process, no multicast groups.
        let pid = nix::unistd::getpid().as_raw() as u32;
        socket::bind(fd.as_raw_fd(), &NetlinkAddr::new(pid, 0))
            .map_err(ProbeError::SocketBind)?;

        // Peer address: pid 0 is the kernel.
        socket::connect(fd.as_raw_fd(), &NetlinkAddr::new(0, 0))
            .map_err(ProbeError::SocketConnect)?;

        debug!(pid, "netlink channel open");
        Ok(Self { fd })
    }
}

impl Transport for Channel {
    fn send(&mut self, bytes: &[u8]) -> Result<usize, ProbeError> {
        socket::send(self.fd.as_raw_fd(), bytes, MsgFlags::empty()).map_err(ProbeError::Send)
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<usize, ProbeError> {
        socket::recv(self.fd.as_raw_fd(), buf, MsgFlags::empty()).map_err(ProbeError::Recv)
    }
}
