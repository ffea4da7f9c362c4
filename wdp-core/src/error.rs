use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WdpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid container state: {0}")]
    InvalidState(&'static str),

    #[error("Duplicate container entry: {0}")]
    DuplicateEntry(String),

    #[error("Cannot read source {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JPEG encoding failed for {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, WdpError>;
