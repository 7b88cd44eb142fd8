//! Error types for board construction and engine configuration.
//!
//! Moves never fail: a move while the game is not in progress is a no-op,
//! and spawning onto a full board does nothing. Errors only arise when a
//! caller hands the engine an untyped grid or a configuration it cannot use.

/// A grid or key that cannot be turned into engine input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 4 rows, got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 4")]
    WrongRowLength { row: usize, len: usize },

    #[error("cell ({row}, {col}) holds {value}, which is neither empty nor a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },

    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
}

/// An `EngineConfig` the engine refuses to run with.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("win tile {0} is not a power of two >= 4")]
    InvalidWinTile(u32),

    #[error("four-tile probability {0} is outside [0, 1]")]
    InvalidFourProbability(f64),

    #[error("cannot seed {0} starting tiles on a 16-cell board")]
    TooManyStartTiles(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_messages() {
        assert_eq!(BoardError::WrongRowCount(3).to_string(), "expected 4 rows, got 3");
        assert_eq!(
            BoardError::WrongRowLength { row: 2, len: 5 }.to_string(),
            "row 2 has 5 cells, expected 4"
        );

        let err = BoardError::InvalidTile { row: 1, col: 3, value: 6 };
        assert!(err.to_string().contains("(1, 3) holds 6"));

        let err = BoardError::UnknownDirection("Space".into());
        assert_eq!(err.to_string(), "unknown direction: \"Space\"");
    }

    #[test]
    fn test_config_error_messages() {
        assert!(ConfigError::InvalidWinTile(100).to_string().contains("100"));
        assert!(ConfigError::InvalidFourProbability(1.5).to_string().contains("1.5"));
        assert!(ConfigError::TooManyStartTiles(17).to_string().contains("17"));
    }
}
