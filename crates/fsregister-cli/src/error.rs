use fsregister_core::{ErrorTier, RegisterError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] fsregister_core::ValidationError),

    #[error("{}: {}", .source.code(), .source)]
    Register {
        #[from]
        source: RegisterError,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Register { source } => match source.tier() {
                ErrorTier::Configuration => 2,
                ErrorTier::Response => 3,
                ErrorTier::Request => 4,
            },
            Self::Serialization(_) => 5,
            Self::Io(_) => 10,
        }
    }
}
