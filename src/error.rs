//! Error types for the scraper.

use thiserror::Error;

use crate::types::MediaType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or a non-success status (wraps reqwest::Error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The fetcher has no page for this URL
    #[error("Not found: {0}")]
    NotFound(String),

    /// The site only lists movies
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(MediaType),
}
