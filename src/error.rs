//! Errors raised by the command-line front-end.
//!
//! Wrapping itself cannot fail; these cover reading input, parsing
//! arguments and writing output.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    #[error("error encoding JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid escape character '{0}': expected one ASCII character, a name (tab, cr, lf, space) or \\t, \\r, \\n, \\xHH")]
    InvalidEscape(String),
}

pub type ClipResult<T> = Result<T, ClipError>;
