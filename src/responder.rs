//! Echo peer for the probe engine.
//!
//! Receives ping payloads, upper-cases them and sends them straight
//! back, optionally discarding a configurable subset to simulate loss.

use crate::probe;
use rand::Rng;
use std::{
    io,
    net::{SocketAddr, ToSocketAddrs, UdpSocket},
};

/// Which incoming probes to silently discard.
#[derive(Clone, Copy, Debug)]
pub enum DropPolicy {
    /// Echo everything.
    None,
    /// Drop probes whose embedded sequence number is divisible by `n`.
    EveryNth(usize),
    /// Drop each probe independently with probability `p` (`0.0..=1.0`).
    Random(f64),
}

pub struct Responder {
    socket: UdpSocket,
    policy: DropPolicy,
}

impl Responder {
    pub fn bind(addr: impl ToSocketAddrs, policy: DropPolicy) -> io::Result<Self> {
        Ok(Self {
            socket: UdpSocket::bind(addr)?,
            policy,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Handle exactly `datagrams` incoming probes, then return.
    ///
    /// Dropped probes count too: callers size this to the probes a
    /// client will send, not to the replies it expects back.
    pub fn serve(&self, datagrams: usize) -> io::Result<()> {
        let mut buf = [0u8; 1024];
        for _ in 0..datagrams {
            let (len, peer) = self.socket.recv_from(&mut buf)?;
            if self.dropped(&buf[..len]) {
                continue;
            }
            let reply = buf[..len].to_ascii_uppercase();
            self.socket.send_to(&reply, peer)?;
        }
        Ok(())
    }

    /// Serve until the socket fails.
    pub fn run(&self) -> io::Result<()> {
        loop {
            self.serve(1)?;
        }
    }

    fn dropped(&self, data: &[u8]) -> bool {
        match self.policy {
            DropPolicy::None => false,
            DropPolicy::EveryNth(n) => {
                let text = String::from_utf8_lossy(data);
                matches!(probe::parse_seq(&text), Some(seq) if n != 0 && seq % n == 0)
            }
            DropPolicy::Random(p) => rand::thread_rng().gen_bool(p.clamp(0.0, 1.0)),
        }
    }
}
