use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io::{BufReader, Error, ErrorKind, Read, Result};
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

/// Probe Configuration
/// All timing values are in milliseconds unless otherwise specified
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Target host, an IP literal or resolvable name (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,
    /// Target UDP port (default: 7972)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Text payload carried by the probe datagram
    #[serde(default = "default_message")]
    pub message: String,
    /// Receive timeout (ms, default: 5000)
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            host: default_host(),
            port: default_port(),
            message: default_message(),
            timeout_ms: default_timeout(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    7972
}
fn default_message() -> String {
    "Hello from the otherside".to_string()
}
fn default_timeout() -> u64 {
    5000
}

impl ProbeConfig {
    /// Resolve the effective configuration: built-in defaults, then the JSON
    /// file named by `PROBE_CONFIG` (if set), then individual `PROBE_*`
    /// environment variables.
    pub fn load() -> Result<Self> {
        let mut config = match env::var("PROBE_CONFIG") {
            Ok(path) => {
                let file = File::open(&path)?;
                Self::from_reader(BufReader::new(file))?
            }
            Err(_) => ProbeConfig::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON reader. Missing fields take their
    /// defaults.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(Error::from)
    }

    /// Override individual fields from `PROBE_HOST`, `PROBE_PORT`,
    /// `PROBE_MESSAGE` and `PROBE_TIMEOUT_MS`.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, get: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = get("PROBE_HOST") {
            self.host = host;
        }
        if let Some(port) = get("PROBE_PORT") {
            self.port = port
                .parse()
                .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("PROBE_PORT: {}", e)))?;
        }
        if let Some(message) = get("PROBE_MESSAGE") {
            self.message = message;
        }
        if let Some(ms) = get("PROBE_TIMEOUT_MS") {
            self.timeout_ms = ms.parse().map_err(|e| {
                Error::new(ErrorKind::InvalidInput, format!("PROBE_TIMEOUT_MS: {}", e))
            })?;
        }
        Ok(())
    }

    /// Resolve host:port to a socket address. Fails when the host is not an
    /// IP literal and cannot be resolved.
    pub fn target_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidInput,
                    format!("no address found for {}:{}", self.host, self.port),
                )
            })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
