use serde::{Deserialize, Serialize};

/// Canonical media-library genres. Site genres with no canonical
/// counterpart are carried through as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Erotic,
    Family,
    Fantasy,
    FilmNoir,
    Foreign,
    History,
    Horror,
    Indie,
    Music,
    Musical,
    Mystery,
    Romance,
    ScienceFiction,
    Short,
    Sport,
    Suspense,
    Thriller,
    War,
    Western,
    Custom(String),
}

fn canonical(lower: &str) -> Option<Genre> {
    let g = match lower {
        "action" => Genre::Action,
        "adventure" => Genre::Adventure,
        "animation" | "animated" | "cartoon" => Genre::Animation,
        "biography" | "biopic" => Genre::Biography,
        "comedy" | "parody" => Genre::Comedy,
        "crime" => Genre::Crime,
        "documentary" | "docu" => Genre::Documentary,
        "drama" => Genre::Drama,
        "erotic" | "erotica" | "erotik" | "sensual" => Genre::Erotic,
        "family" => Genre::Family,
        "fantasy" => Genre::Fantasy,
        "film noir" | "film-noir" | "noir" => Genre::FilmNoir,
        "foreign" | "international" => Genre::Foreign,
        "history" | "historical" | "period piece" => Genre::History,
        "horror" => Genre::Horror,
        "indie" | "independent" => Genre::Indie,
        "music" => Genre::Music,
        "musical" => Genre::Musical,
        "mystery" => Genre::Mystery,
        "romance" | "romantic" => Genre::Romance,
        "science fiction" | "sci-fi" | "scifi" => Genre::ScienceFiction,
        "short" => Genre::Short,
        "sport" | "sports" => Genre::Sport,
        "suspense" => Genre::Suspense,
        "thriller" => Genre::Thriller,
        "war" => Genre::War,
        "western" | "westerns" => Genre::Western,
        _ => return None,
    };
    Some(g)
}

impl Genre {
    /// Maps a free-text site genre. Blank input maps to nothing.
    pub fn from_name(name: &str) -> Option<Genre> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if let Some(genre) = canonical(&name.to_lowercase()) {
            return Some(genre);
        }
        tracing::debug!("no canonical genre for '{}', keeping it as custom", name);
        Some(Genre::Custom(name.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Biography => "Biography",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Erotic => "Erotic",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::FilmNoir => "Film Noir",
            Genre::Foreign => "Foreign",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Indie => "Indie",
            Genre::Music => "Music",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Short => "Short",
            Genre::Sport => "Sport",
            Genre::Suspense => "Suspense",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
            Genre::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
