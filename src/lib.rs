pub mod config;
pub mod probe;
pub mod transport;

pub use config::ProbeConfig;
pub use probe::{Outcome, Probe, Reply, RECV_BUFFER_SIZE};
pub use transport::{DatagramTransport, UdpTransport};
