use super::traits::DatagramTransport;
use socket2::{Domain, Protocol, Socket, Type};
use std::io::Result;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;

pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    /// Create a socket on an ephemeral port with the address family matching
    /// the target (IPv4 target -> 0.0.0.0:0, IPv6 target -> [::]:0).
    pub fn bind_for(target: SocketAddr) -> Result<Self> {
        let socket = Socket::new(Domain::for_address(target), Type::DGRAM, Some(Protocol::UDP))?;
        let bind_addr: SocketAddr = match target {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        socket.bind(&bind_addr.into())?;
        Ok(UdpTransport { socket: socket.into() })
    }
}

impl DatagramTransport for UdpTransport {
    fn send(&self, data: &[u8], destination: SocketAddr) -> Result<usize> {
        self.socket.send_to(data, destination)
    }

    fn receive(&self, buffer: &mut [u8]) -> Result<(usize, SocketAddr)> {
        self.socket.recv_from(buffer)
    }

    fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.socket.set_read_timeout(timeout)
    }

    fn local_addr(&self) -> Result<SocketAddr> {
        self.socket.local_addr()
    }
}
