//! CLI errors and their exit codes.
//!
//! | Exit code | Cause |
//! |-----------|-------|
//! | 1 | startup or internal failure |
//! | 2 | invalid request |
//! | 3 | purchase or exchange rate not found |
//! | 4 | JSON serialization failure |
//! | 10 | stdout write failure |

use purchasefx_shared::AppError;
use serde::Serialize;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration or client setup failed before any command ran.
    #[error(transparent)]
    Startup(#[from] anyhow::Error),

    /// Command failed with a domain error.
    #[error(transparent)]
    App(#[from] AppError),

    /// Output could not be serialized.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Output could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Error payload written to stderr.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable error code, e.g. `NOT_FOUND`.
    pub error: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl CliError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::App(error) => match error.status_code() {
                404 => 3,
                400 => 2,
                _ => 1,
            },
            Self::Startup(_) => 1,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }

    /// Payload written to stderr.
    pub fn body(&self) -> ErrorBody {
        let error = match self {
            Self::App(error) => error.error_code(),
            Self::Startup(_) => "STARTUP_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Io(_) => "IO_ERROR",
        };
        ErrorBody {
            error,
            message: format!("{self:#}"),
        }
    }
}
