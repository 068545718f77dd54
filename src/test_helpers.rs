#![cfg(any(test, feature = "test-internals"))]
#![allow(dead_code)] // Allow unused helpers - they're used by library tests but not binary tests

use std::collections::VecDeque;

use nix::errno::Errno;

use crate::channel::Transport;
use crate::error::ProbeError;
use crate::protocol::{
    IFINFO_LEN, IFLA_IFNAME, NLMSG_DONE, NLMSG_ERROR, NLMSG_HDRLEN, NLMSG_NOOP, RTA_HDRLEN,
    RTM_NEWLINK, nlmsg_align,
};

/// Encode one outer record: header + payload, padded to the stride.
pub fn encode_outer(kind: u16, seq: u32, payload: &[u8]) -> Vec<u8> {
    let len = NLMSG_HDRLEN + payload.len();
    let mut buf = vec![0u8; nlmsg_align(len)];
    buf[0..4].copy_from_slice(&(len as u32).to_ne_bytes());
    buf[4..6].copy_from_slice(&kind.to_ne_bytes());
    buf[8..12].copy_from_slice(&seq.to_ne_bytes());
    buf[NLMSG_HDRLEN..len].copy_from_slice(payload);
    buf
}

/// Encode one attribute: header + value, padded to the stride.
pub fn encode_attr(kind: u16, value: &[u8]) -> Vec<u8> {
    let len = RTA_HDRLEN + value.len();
    let mut buf = vec![0u8; nlmsg_align(len)];
    buf[0..2].copy_from_slice(&(len as u16).to_ne_bytes());
    buf[2..4].copy_from_slice(&kind.to_ne_bytes());
    buf[RTA_HDRLEN..len].copy_from_slice(value);
    buf
}

/// NEWLINK record for interface `index` named `name`, carrying a
/// NUL-terminated IFNAME attribute the way the kernel emits it.
pub fn encode_newlink(index: i32, name: &str) -> Vec<u8> {
    let mut payload = vec![0u8; IFINFO_LEN];
    payload[4..8].copy_from_slice(&index.to_ne_bytes());

    let mut value = name.as_bytes().to_vec();
    value.push(0);
    payload.extend_from_slice(&encode_attr(IFLA_IFNAME, &value));

    encode_outer(RTM_NEWLINK, 0, &payload)
}

pub fn encode_done() -> Vec<u8> {
    encode_outer(NLMSG_DONE, 0, &[])
}

/// Error record with a zeroed nlmsgerr payload (errno + echoed
/// request header); the session never looks inside it.
pub fn encode_error() -> Vec<u8> {
    encode_outer(NLMSG_ERROR, 0, &[0u8; 20])
}

pub fn encode_noop() -> Vec<u8> {
    encode_outer(NLMSG_NOOP, 0, &[])
}

/// Concatenate records into one datagram.
pub fn datagram(records: &[Vec<u8>]) -> Vec<u8> {
    records.concat()
}

/// Transport fed from a script of reply datagrams.
///
/// `send` records the request; each `recv` pops the next datagram and
/// fails with ENODATA once the script runs out, so a session that
/// over-reads shows up as a test failure rather than a hang.
pub struct ScriptedTransport {
    pub sent: Vec<Vec<u8>>,
    replies: VecDeque<Vec<u8>>,
}

impl ScriptedTransport {
    pub fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            sent: Vec::new(),
            replies: replies.into_iter().collect(),
        }
    }

    pub fn replies_remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Transport for ScriptedTransport {
    fn send(&mut self, bytes: &[u8]) -> Result<usize, ProbeError> {
        self.sent.push(bytes.to_vec());
        Ok(bytes.len())
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<usize, ProbeError> {
        let reply = self
            .replies
            .pop_front()
            .ok_or(ProbeError::Recv(Errno::ENODATA))?;
        buf[..reply.len()].copy_from_slice(&reply);
        Ok(reply.len())
    }
}

/// Transport whose every operation fails; for send/recv failure paths.
pub struct DeadTransport;

impl Transport for DeadTransport {
    fn send(&mut self, _bytes: &[u8]) -> Result<usize, ProbeError> {
        Err(ProbeError::Send(Errno::ECONNREFUSED))
    }

    fn recv(&mut self, _buf: &mut [u8]) -> Result<usize, ProbeError> {
        Err(ProbeError::Recv(Errno::ECONNREFUSED))
    }
}
