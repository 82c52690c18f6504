use scraper::Html;
use tracing::{debug, error, info, warn};

use crate::artwork;
use crate::certification;
use crate::config::ScraperConfig;
use crate::error::{Error, Result};
use crate::extract::{self, DetailPage, StarPage};
use crate::fetch::Fetch;
use crate::genre::Genre;
use crate::ranker;
use crate::types::{
    Artwork, ArtworkType, MediaType, Metadata, ProviderInfo, ScrapeOptions, SearchQuery, SearchResult,
    PROVIDER_ID,
};
use crate::util::{self, clean_search_query, first_sentence, remove_sortable_name};

/// Metadata and artwork provider for aebn.net.
#[derive(Debug, Clone)]
pub struct AebnProvider<F> {
    fetcher: F,
    config: ScraperConfig,
}

impl<F: Fetch> AebnProvider<F> {
    pub fn new(fetcher: F, config: ScraperConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn provider_info(&self) -> ProviderInfo {
        ProviderInfo {
            id: PROVIDER_ID.to_string(),
            name: "aebn.net".to_string(),
            description: "Media scraper for the Adult Entertainment Broadcast Network (AEBN)".to_string(),
        }
    }

    /// Searches movie titles. A failed fetch yields no results; only a
    /// media type the site does not list is an error.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        if query.media_type != MediaType::Movie {
            return Err(Error::UnsupportedMediaType(query.media_type));
        }
        let raw = query.search_string();
        let cleaned = clean_search_query(raw);
        info!("search for '{}'", raw);
        let url = self.config.search_url(&cleaned);

        let body = match self.fetcher.fetch(&url).await {
            Ok(b) => b,
            Err(e) => {
                error!("search for '{}' failed: {}", raw, e);
                return Ok(Vec::new());
            }
        };
        let candidates = extract::search_candidates(&Html::parse_document(&body), &self.config);
        if candidates.is_empty() {
            debug!("no movie found");
            return Ok(Vec::new());
        }
        for c in &candidates {
            if util::parse_id(&c.id).is_none() {
                warn!("search hit id '{}' is not a valid catalog id", c.id);
            }
        }
        Ok(ranker::rank(&cleaned, candidates))
    }

    /// Scrapes the detail page. Never fails: an unusable id gives empty
    /// metadata and a failed fetch gives what was known beforehand.
    pub async fn get_metadata(&self, options: &ScrapeOptions) -> Metadata {
        let mut md = Metadata::new();

        let mut id = None;
        if let Some(result) = &options.result {
            id = util::parse_id(&result.id);
            debug!("id {:?} from previous search result", id);
            md.original_title = Some(remove_sortable_name(&result.original_title)).filter(|s| !s.is_empty());
            md.title = Some(remove_sortable_name(&result.title)).filter(|s| !s.is_empty());
        }
        if id.is_none() {
            id = options.id.as_deref().and_then(util::parse_id);
            debug!("id {:?} from options", id);
        }
        let Some(id) = id else {
            warn!("no or incorrect catalog id, aborting");
            return md;
        };

        md.id = Some(id);
        md.poster_url = Some(artwork::poster_url(&self.config.image_url, id));

        let url = self.config.detail_url(id, options.language.as_deref());
        info!("scraping movie {}", id);
        let body = match self.fetcher.fetch(&url).await {
            Ok(b) => b,
            Err(e) => {
                error!("fetching {} failed: {}", url, e);
                return md;
            }
        };
        let page = extract::parse_detail(&Html::parse_document(&body));
        self.apply_detail(&mut md, page, options.country.as_deref()).await;
        md
    }

    async fn apply_detail(&self, md: &mut Metadata, page: DetailPage, country: Option<&str>) {
        if page.title.is_some() {
            md.title = page.title;
        }
        md.background_urls = page.background_urls;
        md.runtime_minutes = page.runtime_minutes;
        md.year = page.year;
        if let Some(name) = page.collection {
            md.collection_id = Some(util::stable_hash(&name));
            debug!("collection '{}' -> {:?}", name, md.collection_id);
            md.collection_name = Some(name);
        }
        md.production_company = page.studio;

        for g in page.genres.iter().filter_map(|g| Genre::from_name(g)) {
            md.add_genre(g);
        }
        // every title on the site fits this one
        md.add_genre(Genre::Erotic);

        if let Some(c) = country {
            md.certification = certification::for_country(c);
            debug!("certification for {}: {:?}", c, md.certification);
        }

        if let Some(plot) = page.plot {
            md.tagline = first_sentence(&plot);
            md.plot = Some(plot);
        }

        for entry in page.actors {
            let mut member = entry.member;
            if let Some(href) = entry.detail_href {
                if let Some(star) = self.star_details(&self.config.absolute(&href)).await {
                    member.image_url = star.image_url;
                    member.gallery = star.gallery;
                }
            }
            md.cast.push(member);
        }
        if let Some(director) = page.director {
            md.cast.push(director);
        }

        if md.original_title.as_deref().map(str::trim).unwrap_or("").is_empty() {
            md.original_title = md.title.clone();
        }
    }

    async fn star_details(&self, url: &str) -> Option<StarPage> {
        match self.fetcher.fetch(url).await {
            Ok(body) => {
                let star = extract::parse_star(&Html::parse_document(&body));
                if star.is_none() {
                    debug!("no additional actor details at {}", url);
                }
                star
            }
            Err(e) => {
                error!("fetching actor page {} failed: {}", url, e);
                None
            }
        }
    }

    /// Poster and back cover come straight from the id; backgrounds need a
    /// metadata scrape first.
    pub async fn get_artwork(&self, options: &ScrapeOptions) -> Vec<Artwork> {
        let mut out = Vec::new();
        let Some(id) = options.id.as_deref().and_then(util::parse_id) else {
            info!("could not scrape artwork, no or incorrect catalog id");
            return out;
        };
        let image_base = &self.config.image_url;
        let language = options.language.as_deref();
        let kind = options.artwork_type;

        if kind.includes(ArtworkType::Poster) {
            let a = artwork::poster(image_base, id, options.poster_size, language);
            debug!("poster {}", a.default_url);
            out.push(a);
        }
        if kind.includes(ArtworkType::Disc) {
            let a = artwork::disc(image_base, id, options.poster_size, language);
            debug!("back cover {}", a.default_url);
            out.push(a);
        }
        if kind.includes(ArtworkType::Background) {
            let md_options = ScrapeOptions { result: None, ..options.clone() };
            let md = self.get_metadata(&md_options).await;
            for url in &md.background_urls {
                debug!("background {}", url);
                out.push(artwork::background(url, options.fanart_size, language));
            }
        }
        out
    }
}
