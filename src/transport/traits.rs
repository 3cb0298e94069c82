use std::io::Result;
use std::net::SocketAddr;
use std::time::Duration;

/// Trait representing a datagram transport channel.
/// Designed to be object-safe and pluggable (e.g. for Mocking).
pub trait DatagramTransport: Send + Sync {
    /// Send data in a single datagram to the given destination.
    fn send(&self, data: &[u8], destination: SocketAddr) -> Result<usize>;

    /// Receive one datagram from the network.
    /// Returns the number of bytes read and the source address.
    fn receive(&self, buffer: &mut [u8]) -> Result<(usize, SocketAddr)>;

    /// Bound the next receive call. `None` blocks indefinitely.
    fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<()>;

    /// Get the local socket address.
    fn local_addr(&self) -> Result<SocketAddr>;
}
