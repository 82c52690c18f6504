use serde::{Deserialize, Serialize};

use crate::types::{Artwork, ArtworkType, ImageSize, PROVIDER_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterSize {
    Large,
    Big,
    Medium,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanartSize {
    Large,
    Medium,
    Small,
}

/// A named width tier: lower bound in pixels and its rank.
pub trait SizeCategory: Copy + Sized + 'static {
    /// All tiers, widest first.
    const TIERS: &'static [Self];

    fn min_width(self) -> u32;
    fn order(self) -> u32;

    /// Tier a width falls into; anything under the narrowest bound still
    /// ranks as the narrowest tier.
    fn categorize(width: u32) -> Self {
        let narrowest = Self::TIERS[Self::TIERS.len() - 1];
        Self::TIERS
            .iter()
            .copied()
            .find(|t| width >= t.min_width())
            .unwrap_or(narrowest)
    }
}

impl SizeCategory for PosterSize {
    const TIERS: &'static [Self] = &[PosterSize::Large, PosterSize::Big, PosterSize::Medium, PosterSize::Small];

    fn min_width(self) -> u32 {
        match self {
            PosterSize::Large => 1000,
            PosterSize::Big => 500,
            PosterSize::Medium => 342,
            PosterSize::Small => 185,
        }
    }

    fn order(self) -> u32 {
        match self {
            PosterSize::Large => 8,
            PosterSize::Big => 4,
            PosterSize::Medium => 2,
            PosterSize::Small => 1,
        }
    }
}

impl SizeCategory for FanartSize {
    const TIERS: &'static [Self] = &[FanartSize::Large, FanartSize::Medium, FanartSize::Small];

    fn min_width(self) -> u32 {
        match self {
            FanartSize::Large => 1920,
            FanartSize::Medium => 1280,
            FanartSize::Small => 300,
        }
    }

    fn order(self) -> u32 {
        match self {
            FanartSize::Large => 8,
            FanartSize::Medium => 2,
            FanartSize::Small => 1,
        }
    }
}

/// Picks the default variant for `requested`: walking from widest to
/// narrowest, the first variant no wider than the tier's bound wins. Falls
/// back to the narrowest variant. Returns the index and the rank of the
/// chosen width.
pub fn choose_size<C: SizeCategory>(sizes: &[ImageSize], requested: C) -> Option<(usize, u32)> {
    let mut by_width: Vec<usize> = (0..sizes.len()).collect();
    by_width.sort_by(|a, b| sizes[*b].width.cmp(&sizes[*a].width));
    let chosen = by_width
        .iter()
        .copied()
        .find(|i| sizes[*i].width <= requested.min_width())
        .or_else(|| by_width.last().copied())?;
    Some((chosen, C::categorize(sizes[chosen].width).order()))
}

fn boxcover(image_base: &str, id: impl std::fmt::Display, suffix: &str) -> String {
    format!("{}/Stream/Movie/Boxcovers/a{}{}", image_base, id, suffix)
}

/// Front cover as shown on the detail page.
pub fn poster_url(image_base: &str, id: u32) -> String {
    boxcover(image_base, id, "_xlf.jpg")
}

/// Small front cover used on the search page.
pub fn search_poster_url(image_base: &str, id: &str) -> String {
    boxcover(image_base, id, "_160w.jpg")
}

fn assemble<C: SizeCategory>(
    kind: ArtworkType,
    preview_url: String,
    sizes: Vec<ImageSize>,
    requested: C,
    language: Option<&str>,
) -> Artwork {
    let (default_url, size_order) = match choose_size(&sizes, requested) {
        Some((i, order)) => (sizes[i].url.clone(), order),
        None => (preview_url.clone(), requested.order()),
    };
    Artwork {
        provider_id: PROVIDER_ID.to_string(),
        kind,
        default_url,
        preview_url,
        sizes,
        size_order,
        language: language.map(|l| l.to_string()),
    }
}

pub fn poster(image_base: &str, id: u32, requested: PosterSize, language: Option<&str>) -> Artwork {
    let sizes = vec![
        ImageSize { width: 380, height: 540, url: boxcover(image_base, id, "_xlf.jpg") },
        ImageSize { width: 220, height: 313, url: boxcover(image_base, id, "_bf.jpg") },
        ImageSize { width: 160, height: 227, url: boxcover(image_base, id, "_160w.jpg") },
    ];
    assemble(ArtworkType::Poster, boxcover(image_base, id, "_xlf.jpg"), sizes, requested, language)
}

/// Back cover, stored as disc art.
pub fn disc(image_base: &str, id: u32, requested: PosterSize, language: Option<&str>) -> Artwork {
    let sizes = vec![
        ImageSize { width: 380, height: 540, url: boxcover(image_base, id, "_xlb.jpg") },
        ImageSize { width: 220, height: 313, url: boxcover(image_base, id, "_bb.jpg") },
    ];
    assemble(ArtworkType::Disc, boxcover(image_base, id, "_xlb.jpg"), sizes, requested, language)
}

/// Scene thumbnails: the listed image is 179x101, dropping the size tag
/// gives the 120x68 original.
pub fn background(url: &str, requested: FanartSize, language: Option<&str>) -> Artwork {
    let small = url.replace("_179_101", "");
    let sizes = vec![
        ImageSize { width: 179, height: 101, url: url.to_string() },
        ImageSize { width: 120, height: 68, url: small.clone() },
    ];
    assemble(ArtworkType::Background, small, sizes, requested, language)
}
