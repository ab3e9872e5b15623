// src/error.rs
use std::path::PathBuf;

use reqwest::StatusCode;

/// Input problems. Surfaced before a batch starts; no request has been made.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("File không đúng định dạng (expected .xls or .xlsx): {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("Cannot read workbook {}: {source}", .path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Workbook has no readable sheet: {}", .0.display())]
    NoSheet(PathBuf),

    #[error("Không tìm thấy số căn cước trong file (no identifiers in column A): {}", .0.display())]
    NoIdentifiers(PathBuf),
}

/// Why one identifier's lookup produced no data. Logged, never raised.
#[derive(thiserror::Error, Debug)]
pub enum LookupFailure {
    #[error("cannot build search URL: {0}")]
    Url(#[source] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(StatusCode),

    #[error("unreadable response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Per-identifier classification. Only ever inspected for logging and counts.
#[derive(Debug)]
pub enum Outcome {
    Ok,
    /// The site answered 403 Forbidden; most likely this client is being blocked.
    Blocked,
    Failed(LookupFailure),
}

impl From<LookupFailure> for Outcome {
    fn from(failure: LookupFailure) -> Self {
        match failure {
            LookupFailure::Status(StatusCode::FORBIDDEN) => Outcome::Blocked,
            other => Outcome::Failed(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Cannot write results to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
