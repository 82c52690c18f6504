//! Field extraction from movie detail, star detail and search pages.
//!
//! Everything here is a pure function over a parsed document: a selector
//! that matches nothing leaves its field empty, a selector that matches more
//! than once uses the first hit.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::artwork;
use crate::config::ScraperConfig;
use crate::ranker::Candidate;
use crate::types::{CastMember, CastType};
use crate::util::{clean_text, first_capture};

/// Everything the movie detail page yields on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPage {
    pub title: Option<String>,
    pub background_urls: Vec<String>,
    pub runtime_minutes: Option<u32>,
    pub year: Option<u16>,
    pub collection: Option<String>,
    pub studio: Option<String>,
    pub genres: Vec<String>,
    pub plot: Option<String>,
    pub actors: Vec<ActorEntry>,
    pub director: Option<CastMember>,
}

/// An actor plus the link to their star page, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorEntry {
    pub member: CastMember,
    pub detail_href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarPage {
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
}

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Descendant text with whitespace runs folded, then cleaned.
pub fn element_text(el: ElementRef) -> String {
    let raw = el.text().collect::<String>();
    let folded = raw.split_ascii_whitespace().collect::<Vec<_>>().join(" ");
    clean_text(&folded)
}

fn first<'a>(root: ElementRef<'a>, css: &str, field: &str) -> Option<ElementRef<'a>> {
    let s = sel(css);
    let mut hits = root.select(&s);
    let hit = hits.next();
    let more = hits.count();
    if more > 0 {
        debug!("{}: {} elements found, using the first", field, more + 1);
    }
    if hit.is_none() {
        debug!("{}: not found", field);
    }
    hit
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

pub fn parse_detail(doc: &Html) -> DetailPage {
    let root = doc.root_element();
    let page = DetailPage {
        title: first(root, ".md-movieTitle", "title").map(element_text).and_then(non_empty),
        background_urls: background_urls(root),
        runtime_minutes: first(root, "#md-details [itemprop='duration']", "runtime")
            .and_then(|e| e.value().attr("content"))
            .and_then(|c| first_capture(&clean_text(c), r"PT(\d+)M"))
            .and_then(|m| m.parse::<u32>().ok()),
        year: first(root, "#md-details [itemprop='datePublished']", "year")
            .and_then(|e| e.value().attr("content"))
            .and_then(|c| first_capture(&clean_text(c), r"(\d+)-"))
            .and_then(|y| y.parse::<u16>().ok()),
        collection: first(root, "#md-details .series", "collection").map(element_text).and_then(non_empty),
        studio: first(root, "#md-details [itemprop='productionCompany']", "studio")
            .map(element_text)
            .and_then(non_empty),
        genres: root
            .select(&sel("#md-details [itemprop='genre']"))
            .map(element_text)
            .filter(|g| !g.is_empty())
            .collect(),
        plot: first(root, "#md-details [itemprop='about']", "plot").map(element_text).and_then(non_empty),
        actors: actors(root),
        director: director(root),
    };
    debug!(
        "detail page: title={:?} runtime={:?} year={:?} genres={} actors={} scenes={}",
        page.title,
        page.runtime_minutes,
        page.year,
        page.genres.len(),
        page.actors.len(),
        page.background_urls.len()
    );
    page
}

fn background_urls(root: ElementRef) -> Vec<String> {
    root.select(&sel(".sceneThumbnail, .SceneThumbnail"))
        .filter_map(|img| img.value().attr("src"))
        .map(clean_text)
        .filter(|u| !u.is_empty())
        .collect()
}

fn person_name(el: ElementRef) -> String {
    el.select(&sel("[itemprop='name']")).next().map(element_text).unwrap_or_default()
}

fn actors(root: ElementRef) -> Vec<ActorEntry> {
    let mut out = Vec::new();
    for el in root.select(&sel("#md-details [itemprop='actor']")) {
        let name = person_name(el);
        if name.is_empty() {
            debug!("actor entry without a name, skipping");
            continue;
        }
        let mut member = CastMember::new(CastType::Actor, name);
        member.id = first_capture(&el.html(), r"starId=(\d+)");
        let detail_href = el.value().attr("href").map(|h| h.to_string()).filter(|h| !h.is_empty());
        out.push(ActorEntry { member, detail_href });
    }
    out
}

fn director(root: ElementRef) -> Option<CastMember> {
    let el = first(root, "#md-details [itemprop='director']", "director")?;
    let name = person_name(el);
    if name.is_empty() {
        return None;
    }
    let mut member = CastMember::new(CastType::Director, name);
    member.id = first_capture(&el.html(), r"directorID=(\d+)");
    Some(member)
}

/// Portrait and gallery from a star detail page. `None` when the page has
/// no star info block.
pub fn parse_star(doc: &Html) -> Option<StarPage> {
    let root = doc.root_element();
    let info = first(root, ".StarInfo", "star info")?;
    let image_url = info
        .select(&sel("[itemprop='image']"))
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty());
    let gallery = root
        .select(&sel(".StarDetailGallery a"))
        .filter_map(|a| a.value().attr("href"))
        .filter(|h| !h.is_empty())
        .map(|h| h.to_string())
        .collect::<Vec<_>>();
    debug!("star page: image={:?} gallery={}", image_url, gallery.len());
    Some(StarPage { image_url, gallery })
}

/// Movie title links on the search results page, in page order.
pub fn search_candidates(doc: &Html, config: &ScraperConfig) -> Vec<Candidate> {
    let id_re = Regex::new(r"^FTSMovieSearch_link_title_detail_\d+$").unwrap();
    let mut out = Vec::new();
    for a in doc.select(&sel("a[id^='FTSMovieSearch_link_title_detail_']")) {
        if !a.value().attr("id").map(|id| id_re.is_match(id)).unwrap_or(false) {
            continue;
        }
        let markup = a.html();
        let url = first_capture(&markup, r#"href="(.*?)""#)
            .map(|h| config.absolute(&h.replace("&amp;", "&")))
            .unwrap_or_default();
        let id = first_capture(&markup, r"movieId=(\d+)").unwrap_or_default();
        let title = element_text(a);
        let poster_url = if id.is_empty() { String::new() } else { artwork::search_poster_url(&config.image_url, &id) };
        debug!("search hit {} (id {})", title, id);
        out.push(Candidate { id, title, url, poster_url });
    }
    debug!("{} search hits", out.len());
    out
}
