use std::path::PathBuf;

use thiserror::Error;

use crate::presentation::FieldId;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("native library error: {0}")]
    Library(#[from] LibraryLoadError),
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

/// Raised when a text field does not hold a base-10 `i32`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("field `{field}` is empty")]
    Empty { field: FieldId },
    #[error("field `{field}` is not a valid integer: {text:?}")]
    Invalid { field: FieldId, text: String },
    #[error("field `{field}` is outside the 32-bit integer range: {text:?}")]
    OutOfRange { field: FieldId, text: String },
}

impl InputError {
    pub fn field(&self) -> &FieldId {
        match self {
            InputError::Empty { field }
            | InputError::Invalid { field, .. }
            | InputError::OutOfRange { field, .. } => field,
        }
    }
}

#[derive(Debug, Error)]
pub enum LibraryLoadError {
    #[error("native library `{name}` not found (searched: {searched:?})")]
    NotFound { name: String, searched: Vec<PathBuf> },
    #[error("failed to open native library {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("symbol `{symbol}` missing from {path}: {source}")]
    MissingSymbol {
        symbol: String,
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("symbol `{symbol}` is not linked into this binary")]
    UnknownSymbol { symbol: String },
    #[error("native library used before initialization")]
    NotInitialized,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("no view with id `{0}`")]
    UnknownField(FieldId),
}

pub type SampleResult<T> = Result<T, SampleError>;
