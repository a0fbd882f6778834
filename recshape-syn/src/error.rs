use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading trait declarations.
#[derive(Debug, Error)]
pub enum SynAdapterError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The source is not valid Rust.
    #[error("failed to parse trait declarations: {0}")]
    Parse(#[from] syn::Error),
}
