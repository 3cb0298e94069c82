use crate::transport::DatagramTransport;
use log::{debug, info};
use std::borrow::Cow;
use std::io::{ErrorKind, Result};
use std::net::SocketAddr;
use std::time::Duration;

/// Receive buffer capacity. A longer reply is truncated to this many bytes
/// per standard datagram-socket semantics.
pub const RECV_BUFFER_SIZE: usize = 1024;

/// A reply datagram that arrived before the timeout elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub payload: Vec<u8>,
    pub from: SocketAddr,
}

impl Reply {
    /// Best-effort text view of the payload. Invalid UTF-8 shows up as
    /// replacement characters instead of failing the run.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

/// Terminal result of one probe cycle. A timeout is a normal outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Replied(Reply),
    TimedOut,
}

/// One-shot diagnostic probe: send a single datagram to the target, then
/// wait up to `timeout` for a single reply.
pub struct Probe<T: DatagramTransport> {
    transport: T,
    target: SocketAddr,
    message: String,
    timeout: Duration,
}

impl<T: DatagramTransport> Probe<T> {
    pub fn new(transport: T, target: SocketAddr, message: String, timeout: Duration) -> Self {
        Probe { transport, target, message, timeout }
    }

    /// Run one send/await cycle. Consumes the probe, so the socket is
    /// released on every return path, timeout and fault included.
    pub fn run(self) -> Result<Outcome> {
        if let Ok(local) = self.transport.local_addr() {
            debug!("probing {} from {}", self.target, local);
        }
        self.transport.send(self.message.as_bytes(), self.target)?;
        self.transport.set_read_timeout(Some(self.timeout))?;

        let mut buf = [0u8; RECV_BUFFER_SIZE];
        match self.transport.receive(&mut buf) {
            Ok((len, from)) => {
                info!("reply: {} bytes from {}", len, from);
                Ok(Outcome::Replied(Reply { payload: buf[..len].to_vec(), from }))
            }
            // An elapsed read timeout surfaces as WouldBlock on Unix and
            // TimedOut on Windows.
            Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {
                info!("no reply from {} within {:?}", self.target, self.timeout);
                Ok(Outcome::TimedOut)
            }
            Err(e) => Err(e),
        }
    }
}
