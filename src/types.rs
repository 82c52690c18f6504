use serde::{Deserialize, Serialize};

use crate::artwork::{FanartSize, PosterSize};
use crate::certification::Certification;
use crate::genre::Genre;

pub const PROVIDER_ID: &str = "aebn";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Collection,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Collection => write!(f, "collection"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    /// Only consulted when `text` is blank.
    pub title: Option<String>,
    pub media_type: MediaType,
}

impl SearchQuery {
    pub fn movie(text: impl Into<String>) -> Self {
        Self { text: text.into(), title: None, media_type: MediaType::Movie }
    }

    /// The string the search is built from: free text wins over title.
    pub fn search_string(&self) -> &str {
        if !self.text.trim().is_empty() {
            return &self.text;
        }
        self.title.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub provider_id: String,
    pub id: String,
    pub title: String,
    pub original_title: String,
    pub year: Option<u16>,
    pub media_type: MediaType,
    pub url: String,
    pub poster_url: String,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastType {
    Actor,
    Director,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub role: CastType,
    pub name: String,
    pub id: Option<String>,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
}

impl CastMember {
    pub fn new(role: CastType, name: impl Into<String>) -> Self {
        Self { role, name: name.into(), id: None, image_url: None, gallery: Vec::new() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub provider_id: String,
    pub id: Option<u32>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub year: Option<u16>,
    pub runtime_minutes: Option<u32>,
    pub plot: Option<String>,
    pub tagline: Option<String>,
    pub production_company: Option<String>,
    pub collection_name: Option<String>,
    pub collection_id: Option<i32>,
    pub genres: Vec<Genre>,
    pub certification: Option<Certification>,
    pub cast: Vec<CastMember>,
    pub poster_url: Option<String>,
    pub background_urls: Vec<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self { provider_id: PROVIDER_ID.to_string(), ..Default::default() }
    }

    /// Genres behave as an ordered set.
    pub fn add_genre(&mut self, genre: Genre) {
        if !self.genres.contains(&genre) {
            self.genres.push(genre);
        }
    }

    pub fn actors(&self) -> impl Iterator<Item = &CastMember> {
        self.cast.iter().filter(|c| c.role == CastType::Actor)
    }

    pub fn director(&self) -> Option<&CastMember> {
        self.cast.iter().find(|c| c.role == CastType::Director)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkType {
    Poster,
    Disc,
    Background,
    All,
}

impl ArtworkType {
    pub fn includes(self, other: ArtworkType) -> bool {
        self == ArtworkType::All || self == other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub provider_id: String,
    pub kind: ArtworkType,
    pub default_url: String,
    pub preview_url: String,
    pub sizes: Vec<ImageSize>,
    pub size_order: u32,
    pub language: Option<String>,
}

/// Inputs of the detail and artwork operations.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub id: Option<String>,
    pub result: Option<SearchResult>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub artwork_type: ArtworkType,
    pub poster_size: PosterSize,
    pub fanart_size: FanartSize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            id: None,
            result: None,
            country: None,
            language: None,
            artwork_type: ArtworkType::All,
            poster_size: PosterSize::Medium,
            fanart_size: FanartSize::Medium,
        }
    }
}

impl ScrapeOptions {
    pub fn with_id(id: impl ToString) -> Self {
        Self { id: Some(id.to_string()), ..Default::default() }
    }

    pub fn from_result(result: SearchResult) -> Self {
        Self { result: Some(result), ..Default::default() }
    }
}
