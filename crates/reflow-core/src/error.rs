use thiserror::Error;

use crate::classify::EVEN_INDENTATION;

#[derive(Error, Debug)]
pub enum ReflowError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "pdftotext (poppler-utils) is required. \
         Install with: brew install poppler (macOS) or apt install poppler-utils (Linux)"
    )]
    ToolMissing,

    #[error("pdftotext error: {0}")]
    Tool(String),

    #[error("even-page line indented less than {} columns: {line}", EVEN_INDENTATION)]
    LayoutAssumption { line: String },

    #[error("unknown book: {0}")]
    UnknownBook(String),
}

pub type Result<T> = std::result::Result<T, ReflowError>;
