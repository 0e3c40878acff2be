use thiserror::Error;

#[derive(Error, Debug)]
/// CLI error.
pub enum CliError {
    #[error("--quiet and --verbose cannot be used together")]
    /// Conflicting output flags.
    QuietVerboseConflict,

    #[error("invalid value '{0}': expected a decimal u32")]
    /// Decode input is not a number.
    InvalidValue(String),

    #[error("invalid value '{0}': expected 8 hex digits (4 little-endian bytes)")]
    /// Decode input is not 4 hex bytes.
    InvalidHexValue(String),

    #[error("config file {path}: {source}")]
    /// Config file could not be parsed.
    Config {
        /// Config file path.
        path: String,
        /// Parse error.
        source: toml::de::Error,
    },

    #[error(transparent)]
    /// I/O failure.
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// Codec failure.
    Numcode(#[from] numcode::Error),

    #[error(transparent)]
    /// JSON output failure.
    Json(#[from] serde_json::Error),
}

/// CLI result.
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Message printed to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Numcode(numcode::Error::CharsetLength(len)) => {
                format!("character set must have 10-64 symbols, got {len} (see --charset)")
            }
            Self::Numcode(numcode::Error::InvalidSymbol { symbol, position }) => {
                format!("invalid character '{symbol}' at position {position}: not in the character set")
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_length_points_at_flag() {
        let err = CliError::from(numcode::Error::CharsetLength(7));
        assert_eq!(
            err.user_message(),
            "character set must have 10-64 symbols, got 7 (see --charset)"
        );
    }

    #[test]
    fn conflict_message_is_plain() {
        assert_eq!(
            CliError::QuietVerboseConflict.user_message(),
            "--quiet and --verbose cannot be used together"
        );
    }
}
