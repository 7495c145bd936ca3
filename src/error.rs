//! Errors surfaced to the operator.
//!
//! Only loading can fail. Everything that can go wrong while searching (odd
//! quoting, works without a title line break, windows running off the text) is
//! recovered where it happens and never becomes an error value.

use std::path::PathBuf;

use thiserror::Error;

/// Corpus could not be loaded. Fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read corpus {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
