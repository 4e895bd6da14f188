use std::env;
use std::net::SocketAddr;

use crate::domain::match_state::validate_seat_count;
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_SEATS: usize = 4;

/// Server settings read from `TIENLEN_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seats per table; tables start on their own when full.
    pub seats: usize,
    /// Base seed for tables; `None` draws one per table from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seats: DEFAULT_SEATS,
            seed: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let host = lookup("TIENLEN_HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "TIENLEN_PORT")?.unwrap_or(defaults.port);
        let seats = parse_var(&lookup, "TIENLEN_SEATS")?.unwrap_or(defaults.seats);
        validate_seat_count(seats)
            .map_err(|e| AppError::config(format!("TIENLEN_SEATS: {e}")))?;
        let seed = parse_var(&lookup, "TIENLEN_SEED")?;

        Ok(Self {
            host,
            port,
            seats,
            seed,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| AppError::config(format!("Invalid listen address {addr}: {e}")))
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::config(format!("{key} has invalid value '{raw}': {e}"))),
    }
}
