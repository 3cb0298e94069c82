use log::error;
use std::io::Result;
use udp_probe::{Outcome, Probe, ProbeConfig, UdpTransport};

fn main() -> Result<()> {
    env_logger::init();

    let config = ProbeConfig::load()?;
    let target = config.target_addr()?;
    // A failure up to this point skips the closing line: no socket exists.
    let transport = UdpTransport::bind_for(target)?;
    let probe = Probe::new(transport, target, config.message.clone(), config.timeout());

    println!("Sending: '{}' to {}:{}", config.message, config.host, config.port);
    let result = probe.run();
    match &result {
        Ok(Outcome::Replied(reply)) => {
            println!("Received from {}: {}", reply.from, reply.text());
        }
        Ok(Outcome::TimedOut) => println!("No response received (you might be ugly)"),
        Err(e) => error!("probe failed: {}", e),
    }
    println!("Connection closed. Have a blessed day.");

    result.map(|_| ())
}
