use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::time::Duration;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordTable;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main configuration structure for Relay DNS
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Local UDP address the responder listens on (host:port)
    #[serde(default = "default_listen_addr", alias = "ListenAddr")]
    pub listen_addr: String,

    /// Upstream recursive resolver (host:port)
    #[serde(default = "default_remote_dns", alias = "RemoteDns")]
    pub remote_dns: String,

    /// Upstream read timeout in milliseconds, `0` waits forever
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Static A/MX table
    #[serde(default, alias = "Record")]
    pub record: RecordTable,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            remote_dns: default_remote_dns(),
            query_timeout_ms: default_query_timeout_ms(),
            record: RecordTable::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from `config.toml` in the working
    /// directory when no path is given. A missing file is an error.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path.unwrap_or(DEFAULT_CONFIG_PATH))?;
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen_addr {
            self.listen_addr = listen;
        }
        if let Some(remote) = overrides.remote_dns {
            self.remote_dns = remote;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// A values must be IPv4 literals; they are checked here so that the
    /// responder never has to re-validate the table while answering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_socket_addr()?;

        if self.remote_dns.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No remote DNS server configured".to_string(),
            ));
        }

        for (domain, ip) in &self.record.a {
            if ip.is_empty() {
                continue;
            }
            if ip.trim().parse::<Ipv4Addr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "A record for '{}' is not an IPv4 address: '{}'",
                    domain, ip
                )));
            }
        }

        Ok(())
    }

    /// Resolves `listen_addr` (`host:port`). An empty host, as in `:53`,
    /// means every IPv4 interface.
    pub fn listen_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let listen_addr = self.listen_addr.trim();
        let resolved = match listen_addr.strip_prefix(':') {
            Some(port) => format!("{}:{}", Ipv4Addr::UNSPECIFIED, port).to_socket_addrs(),
            None => listen_addr.to_socket_addrs(),
        };

        resolved
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "Invalid listen address '{}', expected host:port",
                    self.listen_addr
                ))
            })
    }

    /// Upstream read timeout, `None` when disabled.
    pub fn query_timeout(&self) -> Option<Duration> {
        match self.query_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen_addr: Option<String>,
    pub remote_dns: Option<String>,
    pub log_level: Option<String>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:53".to_string()
}

fn default_remote_dns() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    2000
}
