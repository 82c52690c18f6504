use colored::*;
use regex::Regex;
use serde::Serialize;

use crate::types::{Artwork, Metadata, SearchResult};

const NBSP: char = '\u{a0}';

/// Non-breaking spaces become plain spaces, then the string is trimmed.
pub fn clean_text(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    s.replace(NBSP, " ").trim().to_string()
}

/// Strips stop words, parenthesized numbers (years), punctuation and
/// repeated whitespace from a search query.
pub fn clean_search_query(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }
    let stop = Regex::new(r"(?i) (?:a|the|der|die|das|la|le|il|\(\d+\)) ").unwrap();
    let mut s = format!(" {} ", query);
    // matches share their surrounding spaces, so adjacent stop words need another pass
    loop {
        let next = stop.replace_all(&s, " ").into_owned();
        if next == s {
            break;
        }
        s = next;
    }
    let s = Regex::new(r"[.#&:!?,]").unwrap().replace_all(&s, " ");
    let s = Regex::new(r"\s{2,}").unwrap().replace_all(&s, " ");
    s.trim().to_string()
}

/// First capture group of `pattern` in `text`.
pub fn first_capture(text: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Shortest prefix of `plot` ending in sentence punctuation.
pub fn first_sentence(plot: &str) -> Option<String> {
    first_capture(plot, r"(?s)^(.*?[.!?:])")
}

/// "Bourne Legacy, The" -> "The Bourne Legacy".
pub fn remove_sortable_name(title: &str) -> String {
    let re = Regex::new(
        r"(?i)^(.+), (the|a|an|der|die|das|ein|eine|le|la|les|l'|el|los|las|il|lo|gli|i)$",
    )
    .unwrap();
    match re.captures(title.trim()) {
        Some(c) => format!("{} {}", &c[2], &c[1]),
        None => title.trim().to_string(),
    }
}

pub fn is_valid_id(id: i64) -> bool {
    id > 0 && id < 1_000_000
}

/// Parses and validates a catalog id; anything unusable is `None`.
pub fn parse_id(raw: &str) -> Option<u32> {
    let id = raw.trim().parse::<i64>().ok()?;
    if is_valid_id(id) {
        Some(id as u32)
    } else {
        None
    }
}

/// Deterministic 32-bit hash of a name (31-multiplier polynomial over UTF-16
/// units). Stands in for a collection id the site does not expose.
pub fn stable_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

pub fn print_output<T: Serialize + std::fmt::Debug>(value: &T, json: bool) {
    if json {
        match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(_) => println!("{:?}", value),
        }
    } else {
        println!("{:?}", value);
    }
}

pub fn print_results_table(results: &[SearchResult]) {
    println!("{} {}", "Results:".bold(), results.len());

    let index_header = "#";
    let id_header = "ID";
    let score_header = "Score";
    let title_header = "Title";

    let index_width = std::cmp::max(index_header.len(), format!("{}", results.len()).len());
    let id_width = std::cmp::max(
        id_header.len(),
        results.iter().map(|r| r.id.len()).max().unwrap_or(0),
    );

    println!(
        "{:<iw$}  {:<dw$}  {:<5}  {}",
        index_header.bold(),
        id_header.bold(),
        score_header.bold(),
        title_header.bold(),
        iw = index_width,
        dw = id_width
    );
    println!(
        "{:<iw$}  {:<dw$}  {:<5}  {}",
        "-".repeat(index_width),
        "-".repeat(id_width),
        "-".repeat(5),
        "-".repeat(10),
        iw = index_width,
        dw = id_width
    );
    for (idx, r) in results.iter().enumerate() {
        println!(
            "{:<iw$}  {:<dw$}  {:<5.2}  {}",
            idx + 1,
            r.id,
            r.score,
            r.title,
            iw = index_width,
            dw = id_width
        );
    }
}

pub fn print_metadata_human(md: &Metadata) {
    match md.id {
        Some(id) => println!("ID:           {}", id.to_string().bold()),
        None => {
            println!("{}", "No metadata found".red().bold());
            return;
        }
    }
    if let Some(title) = &md.title {
        println!("Title:        {}", title);
    }
    if let Some(orig) = md.original_title.as_ref().filter(|o| Some(*o) != md.title.as_ref()) {
        println!("Original:     {}", orig);
    }
    if let Some(year) = md.year {
        println!("Year:         {}", year);
    }
    if let Some(mins) = md.runtime_minutes {
        println!("Runtime:      {} min", mins);
    }
    if let Some(studio) = &md.production_company {
        println!("Studio:       {}", studio);
    }
    if let Some(name) = &md.collection_name {
        println!("Collection:   {} ({})", name, md.collection_id.unwrap_or_default());
    }
    if !md.genres.is_empty() {
        let names: Vec<&str> = md.genres.iter().map(|g| g.name()).collect();
        println!("Genres:       {}", names.join(", "));
    }
    if let Some(c) = &md.certification {
        println!("Rating:       {} ({})", c.label, c.country);
    }
    if let Some(d) = md.director() {
        println!("Director:     {}", d.name);
    }
    let actors: Vec<&str> = md.actors().map(|a| a.name.as_str()).collect();
    if !actors.is_empty() {
        println!("Cast:         {}", actors.join(", "));
    }
    if let Some(poster) = &md.poster_url {
        println!("Poster:       {}", poster.cyan());
    }
    if let Some(tagline) = &md.tagline {
        println!("Tagline:      {}", tagline.italic());
    }
    if let Some(plot) = &md.plot {
        println!("Plot:\n{}", plot);
    }
    if !md.background_urls.is_empty() {
        println!("Scenes:");
        for (i, url) in md.background_urls.iter().enumerate() {
            println!("  {}. {}", i + 1, url);
        }
    }
}

pub fn print_artwork_table(artwork: &[Artwork]) {
    if artwork.is_empty() {
        println!("{}", "No artwork found".red().bold());
        return;
    }
    for (i, a) in artwork.iter().enumerate() {
        println!("{}. {:?} {}", i + 1, a.kind, a.default_url.cyan());
        for s in &a.sizes {
            println!("     {}x{}  {}", s.width, s.height, s.url);
        }
    }
}
