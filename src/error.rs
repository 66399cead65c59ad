use std::path::PathBuf;

/// Reasons a saved grid cannot become a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RestoreError {
    #[error("cell ({row}, {col}) holds {value}, expected 0, 1 or 2")]
    CellValue { row: usize, col: usize, value: u8 },

    #[error("piece at ({row}, {col}) rests on an empty cell")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors that can occur while reading or writing the save slot.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("no save found at {0}")]
    NotFound(PathBuf),

    #[error("failed to read save from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse save from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("save at {path} is not a valid board: {source}")]
    Invalid {
        path: PathBuf,
        source: RestoreError,
    },

    #[error("failed to write save to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_error_display() {
        let err = RestoreError::CellValue {
            row: 2,
            col: 4,
            value: 9,
        };
        assert_eq!(err.to_string(), "cell (2, 4) holds 9, expected 0, 1 or 2");
    }

    #[test]
    fn test_save_error_display() {
        let err = SaveError::Invalid {
            path: PathBuf::from("save.json"),
            source: RestoreError::FloatingPiece { row: 1, col: 0 },
        };
        assert_eq!(
            err.to_string(),
            "save at save.json is not a valid board: piece at (1, 0) rests on an empty cell"
        );
        assert_eq!(
            SaveError::NotFound(PathBuf::from("save.json")).to_string(),
            "no save found at save.json"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("save.path must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: save.path must not be empty"
        );
    }
}
