use std::collections::HashMap;
use std::sync::Mutex;

use aebn::artwork::{FanartSize, PosterSize};
use aebn::{
    AebnProvider, ArtworkType, CastType, Error, Fetch, Genre, MediaType, ScrapeOptions, ScraperConfig,
    SearchQuery,
};

const BASE: &str = "http://theater.aebn.net";

/// Serves pages from tests/fixtures and records every requested URL.
#[derive(Default)]
struct FixtureFetcher {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    fn with(mut self, url: String, fixture: &str) -> Self {
        let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), fixture);
        let body = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path, e));
        self.pages.insert(url, body);
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetch for FixtureFetcher {
    async fn fetch(&self, url: &str) -> aebn::Result<String> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| Error::NotFound(url.to_string()))
    }
}

fn star_url(star_id: u32) -> String {
    format!("{}/dispatcher/starDetail?genreId=101&starId={}&locale=en", BASE, star_id)
}

fn detail_provider() -> AebnProvider<FixtureFetcher> {
    let cfg = ScraperConfig::default();
    let fetcher = FixtureFetcher::default()
        .with(cfg.detail_url(183071, None), "movie_183071.html")
        .with(cfg.detail_url(183071, Some("en")), "movie_183071.html")
        .with(star_url(201377), "star_201377.html")
        .with(star_url(206312), "star_206312.html");
    AebnProvider::new(fetcher, cfg)
}

fn search_provider() -> AebnProvider<FixtureFetcher> {
    let cfg = ScraperConfig::default();
    let fetcher = FixtureFetcher::default()
        .with(cfg.search_url("Erotic Massage Stories 5"), "search_erotic_massage_stories.html");
    AebnProvider::new(fetcher, cfg)
}

#[tokio::test]
async fn metadata_from_detail_page() {
    let provider = detail_provider();
    let options = ScrapeOptions { country: Some("DE".into()), ..ScrapeOptions::with_id(183071) };
    let md = provider.get_metadata(&options).await;

    assert_eq!(md.provider_id, "aebn");
    assert_eq!(md.id, Some(183071));
    assert_eq!(md.title.as_deref(), Some("Erotic Massage Stories 5"));
    assert_eq!(md.original_title.as_deref(), Some("Erotic Massage Stories 5"));
    assert_eq!(md.year, Some(2014));
    assert_eq!(md.runtime_minutes, Some(144));
    assert_eq!(md.collection_name.as_deref(), Some("Erotic Massage Stories"));
    assert_eq!(md.collection_id, Some(aebn::util::stable_hash("Erotic Massage Stories")));
    assert_eq!(md.production_company.as_deref(), Some("Pure Passion"));
    assert_eq!(
        md.plot.as_deref(),
        Some("Prepare for relaxation and satisfaction in 5 hot scenes that have been captured in the highest quality. Adriana Chechik, Emily Grey, Sabrina Banks, Sierra Nevadah, and Victoria Rae Black are ready for a special deep tissue massage to work out all of their tight little kinks. You'll definitely want a rub down after witnessing this set of steamy erotic massage stories.")
    );
    assert_eq!(
        md.tagline.as_deref(),
        Some("Prepare for relaxation and satisfaction in 5 hot scenes that have been captured in the highest quality.")
    );
    assert_eq!(md.genres.len(), 7);
    assert!(md.genres.contains(&Genre::Erotic));
    assert!(md.genres.contains(&Genre::Romance));
    assert!(md.genres.contains(&Genre::Custom("Massage".into())));
    assert_eq!(md.certification.as_ref().map(|c| c.label.as_str()), Some("FSK 18"));
    assert_eq!(md.poster_url.as_deref(), Some("http://pic.aebn.net/Stream/Movie/Boxcovers/a183071_xlf.jpg"));
    assert_eq!(md.background_urls.len(), 5);
    assert_eq!(md.background_urls[0], "http://pic.aebn.net/Stream/Movie/Scenes/a183071_s1001_179_101.jpg");
}

#[tokio::test]
async fn cast_includes_actors_and_director() {
    let provider = detail_provider();
    let md = provider.get_metadata(&ScrapeOptions::with_id("183071")).await;

    assert_eq!(md.cast.len(), 8);
    assert_eq!(md.actors().count(), 7);
    let first = &md.cast[0];
    assert_eq!(first.name, "Adriana Chechik");
    assert_eq!(first.id.as_deref(), Some("201377"));
    assert_eq!(first.image_url.as_deref(), Some("http://pic.aebn.net/Stream/Star/Headshots/s201377_lg.jpg"));
    assert_eq!(first.gallery.len(), 3);

    // star page without a profile block and star pages that fail to load
    // leave the actor without images
    assert_eq!(md.cast[1].name, "Emily Grey");
    assert!(md.cast[1].image_url.is_none());
    assert!(md.cast[1].gallery.is_empty());
    assert_eq!(md.cast[6].name, "Derek Vance");
    assert!(md.cast[6].image_url.is_none());

    let director = md.director().unwrap();
    assert_eq!(director.role, CastType::Director);
    assert_eq!(director.name, "Lena Marsh");
    assert_eq!(director.id.as_deref(), Some("5721"));
    assert_eq!(md.cast.last().map(|c| c.role), Some(CastType::Director));

    // one detail page plus one star page per actor, in order
    let requested = provider.fetcher().requested();
    assert_eq!(requested.len(), 8);
    assert_eq!(requested[1], star_url(201377));
}

#[tokio::test]
async fn unknown_country_has_no_certification() {
    let provider = detail_provider();
    let options = ScrapeOptions { country: Some("BR".into()), ..ScrapeOptions::with_id(183071) };
    assert!(provider.get_metadata(&options).await.certification.is_none());
    assert!(provider.get_metadata(&ScrapeOptions::with_id(183071)).await.certification.is_none());
}

#[tokio::test]
async fn locale_is_passed_to_detail_page() {
    let provider = detail_provider();
    let options = ScrapeOptions { language: Some("en".into()), ..ScrapeOptions::with_id(183071) };
    let md = provider.get_metadata(&options).await;
    assert_eq!(md.title.as_deref(), Some("Erotic Massage Stories 5"));
    assert_eq!(
        provider.fetcher().requested()[0],
        "http://theater.aebn.net/dispatcher/movieDetail?movieId=183071&locale=en"
    );
}

#[tokio::test]
async fn invalid_ids_issue_no_requests() {
    let provider = detail_provider();
    for id in ["0", "-5", "1000000", "abc", ""] {
        let md = provider.get_metadata(&ScrapeOptions::with_id(id)).await;
        assert_eq!(md.id, None);
        assert!(md.title.is_none());
        assert!(md.cast.is_empty());
        assert!(provider.get_artwork(&ScrapeOptions::with_id(id)).await.is_empty());
    }
    let md = provider.get_metadata(&ScrapeOptions::default()).await;
    assert_eq!(md.provider_id, "aebn");
    assert!(provider.fetcher().requested().is_empty());
}

#[tokio::test]
async fn failed_detail_fetch_keeps_partial_metadata() {
    let provider = detail_provider();
    let md = provider.get_metadata(&ScrapeOptions::with_id(4242)).await;
    assert_eq!(md.id, Some(4242));
    assert_eq!(md.poster_url.as_deref(), Some("http://pic.aebn.net/Stream/Movie/Boxcovers/a4242_xlf.jpg"));
    assert!(md.title.is_none());
    assert!(md.genres.is_empty());
}

#[tokio::test]
async fn search_ranks_and_deduplicates() {
    let provider = search_provider();
    let results = provider.search(&SearchQuery::movie("Erotic Massage Stories 5")).await.unwrap();

    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["183071", "170540", "160022", "191234"]);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));

    let top = &results[0];
    assert_eq!(top.title, "Erotic Massage Stories 5");
    assert_eq!(top.original_title, top.title);
    assert_eq!(top.media_type, MediaType::Movie);
    assert_eq!(top.year, None);
    assert_eq!(top.url, "http://theater.aebn.net/dispatcher/movieDetail?genreId=101&movieId=183071");
    assert_eq!(top.poster_url, "http://pic.aebn.net/Stream/Movie/Boxcovers/a183071_160w.jpg");
}

#[tokio::test]
async fn search_uses_cleaned_query() {
    let provider = search_provider();
    let results = provider
        .search(&SearchQuery::movie("The Erotic Massage Stories 5 (2014)"))
        .await
        .unwrap();
    assert_eq!(results.len(), 4);
}

#[tokio::test]
async fn failed_search_is_empty() {
    let provider = search_provider();
    let results = provider.search(&SearchQuery::movie("Nothing Here")).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn collections_are_not_searchable() {
    let provider = search_provider();
    let query = SearchQuery { media_type: MediaType::Collection, ..SearchQuery::movie("Erotic Massage Stories") };
    let err = provider.search(&query).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedMediaType(MediaType::Collection)));
    assert!(provider.fetcher().requested().is_empty());
}

#[tokio::test]
async fn metadata_from_search_result() {
    let search = search_provider();
    let results = search.search(&SearchQuery::movie("Erotic Massage Stories 5")).await.unwrap();

    let provider = detail_provider();
    let md = provider.get_metadata(&ScrapeOptions::from_result(results[0].clone())).await;
    assert_eq!(md.id, Some(183071));
    assert_eq!(md.original_title.as_deref(), Some("Erotic Massage Stories 5"));
    assert_eq!(md.cast.len(), 8);
}

#[tokio::test]
async fn poster_and_disc_need_no_fetch() {
    let provider = detail_provider();
    let options = ScrapeOptions {
        artwork_type: ArtworkType::Poster,
        poster_size: PosterSize::Medium,
        ..ScrapeOptions::with_id(183071)
    };
    let art = provider.get_artwork(&options).await;
    assert_eq!(art.len(), 1);
    assert_eq!(art[0].kind, ArtworkType::Poster);
    assert_eq!(art[0].default_url, "http://pic.aebn.net/Stream/Movie/Boxcovers/a183071_bf.jpg");

    let options = ScrapeOptions { artwork_type: ArtworkType::Disc, ..ScrapeOptions::with_id(183071) };
    let art = provider.get_artwork(&options).await;
    assert_eq!(art.len(), 1);
    assert_eq!(art[0].preview_url, "http://pic.aebn.net/Stream/Movie/Boxcovers/a183071_xlb.jpg");

    assert!(provider.fetcher().requested().is_empty());
}

#[tokio::test]
async fn backgrounds_come_from_scene_thumbnails() {
    let provider = detail_provider();
    let options = ScrapeOptions {
        artwork_type: ArtworkType::Background,
        fanart_size: FanartSize::Large,
        language: Some("en".into()),
        ..ScrapeOptions::with_id(183071)
    };
    let art = provider.get_artwork(&options).await;
    assert_eq!(art.len(), 5);
    assert!(art.iter().all(|a| a.kind == ArtworkType::Background));
    assert_eq!(art[0].default_url, "http://pic.aebn.net/Stream/Movie/Scenes/a183071_s1001_179_101.jpg");
    assert_eq!(art[0].preview_url, "http://pic.aebn.net/Stream/Movie/Scenes/a183071_s1001.jpg");
    assert_eq!(art[0].language.as_deref(), Some("en"));
}

#[tokio::test]
async fn all_artwork() {
    let provider = detail_provider();
    let art = provider.get_artwork(&ScrapeOptions::with_id(183071)).await;
    assert_eq!(art.len(), 7);
    assert_eq!(art[0].kind, ArtworkType::Poster);
    assert_eq!(art[1].kind, ArtworkType::Disc);
    assert_eq!(art[2].kind, ArtworkType::Background);
}

#[test]
fn provider_identity() {
    let provider = AebnProvider::new(FixtureFetcher::default(), ScraperConfig::default());
    let info = provider.provider_info();
    assert_eq!(info.id, "aebn");
    assert_eq!(info.name, "aebn.net");
    assert_eq!(provider.config().search_count, 60);
}
