//! Top-level error type.

/// Errors that stop a command. Numeric edge cases in the metrics never
/// produce one; they have defined fallback values instead.
#[derive(Debug, thiserror::Error)]
pub enum GbceError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("duplicate stock symbol: {0}")]
    DuplicateSymbol(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GbceError {
    /// Process exit status for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            GbceError::Io(_) => 1,
            GbceError::ConfigParse { .. }
            | GbceError::ConfigMissing { .. }
            | GbceError::ConfigInvalid { .. } => 2,
            GbceError::DuplicateSymbol(_) => 3,
        }
    }
}

impl From<&GbceError> for std::process::ExitCode {
    fn from(err: &GbceError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
