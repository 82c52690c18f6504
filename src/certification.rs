use serde::{Deserialize, Serialize};

/// Adult rating for a country. Generated from the request, never scraped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub country: String,
    pub label: String,
}

const ADULT_RATINGS: &[(&str, &str)] = &[
    ("DE", "FSK 18"),
    ("US", "NC-17"),
    ("GB", "R18"),
    ("FR", "18"),
    ("ES", "PX"),
    ("JP", "R18+"),
    ("IT", "V.M.18"),
    ("NL", "16"),
];

pub fn for_country(country: &str) -> Option<Certification> {
    let code = country.trim().to_uppercase();
    ADULT_RATINGS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(c, label)| Certification { country: c.to_string(), label: label.to_string() })
}
