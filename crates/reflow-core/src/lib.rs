//! reflow-core — the line classifier that turns paginated `pdftotext` output
//! into continuous, paragraph-structured prose.
//!
//! The classifier is a small state machine fed one line at a time. Everything
//! else (running pdftotext, the CLI) lives in the sibling crates.

pub mod book;
pub mod classify;
pub mod error;

pub use book::{BookDescription, BookRegistry};
pub use classify::{process_line, reflow, PageState, EVEN_INDENTATION};
pub use error::{ReflowError, Result};
