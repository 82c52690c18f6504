use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://theater.aebn.net";
pub const DEFAULT_IMAGE_URL: &str = "http://pic.aebn.net";
pub const DEFAULT_SEARCH_COUNT: u32 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Pages (search, movie detail, star detail).
    pub base_url: String,
    /// Box covers and scene images.
    pub image_url: String,
    pub search_count: u32,
    pub proxy: Option<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            search_count: DEFAULT_SEARCH_COUNT,
            proxy: None,
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl ScraperConfig {
    /// Defaults overridden by `AEBN_BASE_URL`, `AEBN_IMAGE_URL`,
    /// `AEBN_SEARCH_COUNT` and `AEBN_HTTP_PROXY`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(v) = env_nonempty("AEBN_BASE_URL") {
            cfg.base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = env_nonempty("AEBN_IMAGE_URL") {
            cfg.image_url = v.trim_end_matches('/').to_string();
        }
        if let Some(n) = env_nonempty("AEBN_SEARCH_COUNT").and_then(|v| v.parse::<u32>().ok()) {
            if n > 0 {
                cfg.search_count = n;
            }
        }
        cfg.proxy = env_nonempty("AEBN_HTTP_PROXY");
        cfg
    }

    pub fn search_url(&self, cleaned_query: &str) -> String {
        format!(
            "{}/dispatcher/fts?userQuery={}&targetSearchMode=basic&isAdvancedSearch=true&isFlushAdvancedSearchCriteria=false&count={}&imageType=Large&sortType=Relevance",
            self.base_url,
            urlencoding::encode(cleaned_query),
            self.search_count
        )
    }

    pub fn detail_url(&self, id: u32, language: Option<&str>) -> String {
        let mut url = format!("{}/dispatcher/movieDetail?movieId={}", self.base_url, id);
        if let Some(locale) = language.map(str::trim).filter(|l| !l.is_empty()) {
            url.push_str("&locale=");
            url.push_str(locale);
        }
        url
    }

    /// Site links are root-relative.
    pub fn absolute(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}
