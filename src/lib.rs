//! Metadata scraper for aebn.net: search, movie details and artwork for a
//! media library.

pub mod artwork;
pub mod certification;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod genre;
pub mod provider;
pub mod ranker;
pub mod types;
pub mod util;

pub use config::ScraperConfig;
pub use error::{Error, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use genre::Genre;
pub use provider::AebnProvider;
pub use types::*;
