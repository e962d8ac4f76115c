//! Room store configuration.

// ---------------------------------------------------------------------------
// StoreConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`RoomStore`](crate::RoomStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of characters in a generated room code.
    pub code_length: usize,

    /// How many generated codes may collide with live rooms before
    /// room creation gives up with
    /// [`RoomError::CodeSpaceExhausted`](crate::RoomError::CodeSpaceExhausted).
    pub max_code_attempts: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            code_length: 5,
            max_code_attempts: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.code_length, 5);
        assert_eq!(config.max_code_attempts, 10_000);
    }
}
