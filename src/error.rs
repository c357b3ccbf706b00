// src/error.rs

//! Error types for the overlap checker

use thiserror::Error;

/// Errors that can occur while fetching and parsing repository metadata
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure or non-2xx HTTP status
    #[error("Download failed: {0}")]
    Download(String),

    /// Repository base address or relative location did not form a valid URL
    #[error("Invalid repository URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// repomd.xml or primary.xml could not be parsed
    #[error("Malformed repository metadata: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Gzip decompression of primary metadata failed
    #[error("Failed to decompress primary metadata: {0}")]
    Decompress(std::io::Error),

    /// Invalid or inconsistent configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
