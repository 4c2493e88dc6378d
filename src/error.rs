use std::path::PathBuf;

/// A move the engine refused to apply. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("column {column} is out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when turning a dense matrix back into a game state.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("matrix is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("invalid cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("floating stone at row {row}, column {col}")]
    FloatingStone { row: usize, col: usize },

    #[error("both players have a winning line")]
    MultipleWinners,

    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),
}
