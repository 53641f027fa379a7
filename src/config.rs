//! Configuration loader for the `cloudburst-monitor` service.
//!
//! All runtime settings are read from the environment once at startup (the
//! caller is responsible for loading `.env` first). Every setting has a
//! default, so an empty environment yields a working service.
use std::{env, net::IpAddr};

use anyhow::{anyhow, Result};

use crate::store::DEFAULT_HISTORY_MAX;

/// Parse an optional environment variable into `$ty`, falling back to a default.
macro_rules! parse_env {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.trim().parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Interface the HTTP server binds to.
    pub listen_addr: IpAddr,

    /// Port the HTTP server binds to.
    pub listen_port: u16,

    /// Number of samples kept in the history window.
    pub history_max: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: IpAddr::from([0, 0, 0, 0]),
            listen_port: 5000,
            history_max: DEFAULT_HISTORY_MAX,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `LISTEN_ADDR` – bind interface (default: `0.0.0.0`)
/// - `LISTEN_PORT` – bind port (default: 5000)
/// - `HISTORY_MAX` – history window length (default: 300, must be at least 1)
///
/// Returns an error if a variable is set but cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    // ---
    let defaults = Config::default();

    let listen_addr = parse_env!("LISTEN_ADDR", IpAddr, defaults.listen_addr);
    let listen_port = parse_env!("LISTEN_PORT", u16, defaults.listen_port);
    let history_max = parse_env!("HISTORY_MAX", usize, defaults.history_max);

    if history_max == 0 {
        return Err(anyhow!("Invalid HISTORY_MAX: must be at least 1"));
    }

    Ok(Config {
        listen_addr,
        listen_port,
        history_max,
    })
}

impl Config {
    /// Log the loaded configuration.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  LISTEN_ADDR : {}", self.listen_addr);
        tracing::info!("  LISTEN_PORT : {}", self.listen_port);
        tracing::info!("  HISTORY_MAX : {}", self.history_max);
    }
}
