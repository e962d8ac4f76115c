//! Server configuration.

use chessroom_room::StoreConfig;

use crate::ChessroomError;

/// Environment variable holding the listen address.
pub const BIND_ENV: &str = "CHESSROOM_BIND";
/// Environment variable overriding the room code length.
pub const CODE_LENGTH_ENV: &str = "CHESSROOM_CODE_LENGTH";
/// Environment variable overriding the code allocation retry limit.
pub const MAX_CODE_ATTEMPTS_ENV: &str = "CHESSROOM_MAX_CODE_ATTEMPTS";

/// Settings for a Chessroom server.
///
/// Defaults match what the browser client expects out of the box: the
/// API on `127.0.0.1:5000`, five-character room codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to. Port 0 picks a free port.
    pub bind_addr: String,

    /// Room store settings.
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads overrides from the process environment.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    /// [`ChessroomError::Config`] if a numeric variable doesn't parse.
    pub fn from_env() -> Result<Self, ChessroomError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ChessroomError> {
        let mut config = Self::default();

        if let Some(addr) = lookup(BIND_ENV) {
            config.bind_addr = addr;
        }
        if let Some(raw) = lookup(CODE_LENGTH_ENV) {
            config.store.code_length = parse_positive(CODE_LENGTH_ENV, &raw)?;
        }
        if let Some(raw) = lookup(MAX_CODE_ATTEMPTS_ENV) {
            config.store.max_code_attempts = parse_positive(MAX_CODE_ATTEMPTS_ENV, &raw)?;
        }

        Ok(config)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize, ChessroomError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ChessroomError::Config(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}
