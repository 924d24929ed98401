//! Agents list: which capture is served at which address.
//!
//! One instance per line, `<capture path>,<bind address>`:
//!
//! ```text
//! # capture                      address
//! walks/c2960.snmpwalk,          127.0.1.1
//! walks/asa5510.snmpwalk,        127.0.1.2:1161
//! ```
//!
//! Blank lines and lines whose first field starts with `#` are skipped.
//! A bare IP address binds the standard agent port, 161.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::{ConfigErrorKind, Error, Result};

/// UDP port used when a bind address has none.
pub const DEFAULT_AGENT_PORT: u16 = 161;

/// One configured emulated device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceConfig {
    /// snmpwalk capture to serve.
    pub capture: PathBuf,
    /// Address the protocol engine binds for this device.
    pub bind: SocketAddr,
}

impl InstanceConfig {
    /// Create an instance configuration.
    pub fn new(capture: impl Into<PathBuf>, bind: SocketAddr) -> Self {
        Self {
            capture: capture.into(),
            bind,
        }
    }
}

/// Parsed agents list, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub instances: Vec<InstanceConfig>,
}

impl Config {
    /// Parse agents list text.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmposter::config::Config;
    ///
    /// let config = Config::parse("# lab\nrouter.walk,127.0.1.1\n").unwrap();
    /// assert_eq!(config.instances.len(), 1);
    /// assert_eq!(config.instances[0].bind.to_string(), "127.0.1.1:161");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut instances = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let mut fields = raw.split(',').map(|f| f.trim().trim_matches('"'));
            let capture = fields.next().unwrap_or_default();
            if capture.starts_with('#') {
                continue;
            }
            if capture.is_empty() {
                return Err(Error::Config {
                    line,
                    kind: ConfigErrorKind::EmptyPath,
                });
            }

            let bind = fields.next().ok_or(Error::Config {
                line,
                kind: ConfigErrorKind::MissingField,
            })?;
            let bind = parse_bind_addr(bind).ok_or(Error::Config {
                line,
                kind: ConfigErrorKind::InvalidAddress,
            })?;

            instances.push(InstanceConfig::new(capture, bind));
        }

        Ok(Self { instances })
    }

    /// Read and parse an agents list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::parse(&text)?;

        tracing::debug!(
            snmposter.config = %path.display(),
            snmposter.instances = config.instances.len(),
            "loaded agents list"
        );
        Ok(config)
    }
}

/// Parse a bind address, defaulting the port to [`DEFAULT_AGENT_PORT`].
///
/// Accepts `IP`, `IP:port`, and `[IPv6]:port`.
///
/// # Examples
///
/// ```
/// use snmposter::config::parse_bind_addr;
///
/// assert_eq!(parse_bind_addr("127.0.1.1").unwrap().to_string(), "127.0.1.1:161");
/// assert_eq!(parse_bind_addr("127.0.1.1:1161").unwrap().port(), 1161);
/// assert_eq!(parse_bind_addr("::1").unwrap().to_string(), "[::1]:161");
/// assert!(parse_bind_addr("router.lab").is_none());
/// ```
pub fn parse_bind_addr(s: &str) -> Option<SocketAddr> {
    let s = s.trim();
    s.parse::<SocketAddr>()
        .ok()
        .or_else(|| {
            s.parse::<IpAddr>()
                .ok()
                .map(|ip| SocketAddr::new(ip, DEFAULT_AGENT_PORT))
        })
}
