//! Portfolio content catalog.
//!
//! The catalog is the static list of portfolio entries the gallery filters and
//! renders. It ships with a stock set of entries and can be replaced wholesale
//! by a `portfolio.toml` in the content root:
//!
//! ```toml
//! [[entries]]
//! id = 1
//! title = "Cinematic Travel Vlog"
//! description = "Freshman mistakes, retold."
//! views = "200k"
//! likes = "1K"
//! duration = "8:53"
//! video_url = "https://www.youtube.com/watch?v=_LZDitqcPIA"
//! tags = ["Cinematic", "Travel"]
//!
//! [entries.media]
//! platform = "long-form"
//! video_id = "_LZDitqcPIA"
//!
//! [[entries]]
//! id = 3
//! # ...
//! [entries.media]
//! platform = "short-form"
//! thumbnail = "/thumbnails/tiktok-3.jpg"
//! ```
//!
//! ## Platform-Specific Media
//!
//! Long-form entries reference an external video identifier, from which the
//! thumbnail candidates and the embed URL are derived. Short-form entries carry
//! a single direct thumbnail path. [`Media`] is a tagged enum keyed on the
//! platform, so an entry can never carry both references or neither.

use crate::thumbnail::ThumbnailQuality;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate portfolio entry id {0}")]
    DuplicateId(u32),
    #[error("Portfolio entry {0} has an empty media reference")]
    EmptyMedia(u32),
}

/// Two-valued content classification used to filter and render entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    LongForm,
    ShortForm,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::LongForm, Platform::ShortForm];

    /// Filter key as used by the signal payload and the session slot.
    pub fn key(self) -> &'static str {
        match self {
            Platform::LongForm => "long-form",
            Platform::ShortForm => "short-form",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::LongForm => "Long Form",
            Platform::ShortForm => "Short Form",
        }
    }

    /// CSS `aspect-ratio` for thumbnails and the detail player.
    pub fn aspect_ratio(self) -> &'static str {
        match self {
            Platform::LongForm => "16/9",
            Platform::ShortForm => "9/16",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown platform key: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    /// Accepts the canonical keys plus the unhyphenated legacy spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long-form" | "longform" => Ok(Platform::LongForm),
            "short-form" | "shortform" => Ok(Platform::ShortForm),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

/// Platform-specific media reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "kebab-case", deny_unknown_fields)]
pub enum Media {
    /// Externally hosted video; thumbnails derive from its identifier.
    LongForm { video_id: String },
    /// Vertical clip with a single direct thumbnail path.
    ShortForm { thumbnail: String },
}

impl Media {
    pub fn platform(&self) -> Platform {
        match self {
            Media::LongForm { .. } => Platform::LongForm,
            Media::ShortForm { .. } => Platform::ShortForm,
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Media::LongForm { video_id } => video_id.trim().is_empty(),
            Media::ShortForm { thumbnail } => thumbnail.trim().is_empty(),
        }
    }
}

/// A single portfolio entry. Read-only at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Display-only metrics, never parsed.
    pub views: String,
    pub likes: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<String>,
    pub media: Media,
    /// Outbound link; empty or `#` means "no link".
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PortfolioEntry {
    pub fn platform(&self) -> Platform {
        self.media.platform()
    }

    /// Embed URL for the detail overlay (long-form only).
    pub fn embed_url(&self) -> Option<String> {
        match &self.media {
            Media::LongForm { video_id } => Some(embed_url(video_id)),
            Media::ShortForm { .. } => None,
        }
    }
}

/// A filter control definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterDef {
    pub key: Platform,
    pub label: &'static str,
    /// Icon glyph shown on the filter button.
    pub icon: &'static str,
}

pub const FILTERS: [FilterDef; 2] = [
    FilterDef {
        key: Platform::LongForm,
        label: "Long Form",
        icon: "▶",
    },
    FilterDef {
        key: Platform::ShortForm,
        label: "Short Form",
        icon: "▯",
    },
];

/// Thumbnail URL for a hosted video at the given resolution tier.
pub fn youtube_thumbnail(video_id: &str, quality: ThumbnailQuality) -> String {
    format!(
        "https://img.youtube.com/vi/{}/{}.jpg",
        video_id,
        quality.file_stem()
    )
}

/// Direct thumbnail path for a short-form entry.
pub fn short_form_thumbnail(id: u32) -> String {
    format!("/thumbnails/tiktok-{id}.jpg")
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=0&rel=0&modestbranding=1")
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<PortfolioEntry>,
}

/// The ordered, validated list of portfolio entries.
///
/// Deserialization goes through [`Catalog::new`], so a hand-edited manifest
/// gets the same checks as `portfolio.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PortfolioEntry>", into = "Vec<PortfolioEntry>")]
pub struct Catalog {
    entries: Vec<PortfolioEntry>,
}

impl TryFrom<Vec<PortfolioEntry>> for Catalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<PortfolioEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Catalog> for Vec<PortfolioEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and empty media references.
    pub fn new(entries: Vec<PortfolioEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            if entry.media.is_empty() {
                return Err(CatalogError::EmptyMedia(entry.id));
            }
        }
        Ok(Self { entries })
    }

    /// Load `portfolio.toml` from `dir`, falling back to the stock catalog.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let path = dir.join("portfolio.toml");
        if !path.exists() {
            return Ok(Self::stock());
        }
        let content = fs::read_to_string(&path)?;
        let file: CatalogFile = toml::from_str(&content)?;
        Self::new(file.entries)
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&PortfolioEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries whose platform key equals `key`, in catalog order.
    ///
    /// An unrecognized key yields an empty list rather than an error.
    pub fn filter<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a PortfolioEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.platform().key() == key)
    }

    pub fn count(&self, platform: Platform) -> usize {
        self.entries
            .iter()
            .filter(|e| e.platform() == platform)
            .count()
    }

    /// The built-in catalog.
    pub fn stock() -> Self {
        Self {
            entries: stock_entries(),
        }
    }
}

fn long_form(
    id: u32,
    title: &str,
    description: &str,
    metrics: [&str; 4],
    video_id: &str,
    tags: &[&str],
) -> PortfolioEntry {
    let [views, likes, duration, engagement] = metrics;
    PortfolioEntry {
        id,
        title: title.to_string(),
        description: description.to_string(),
        views: views.to_string(),
        likes: likes.to_string(),
        duration: duration.to_string(),
        engagement: Some(engagement.to_string()),
        media: Media::LongForm {
            video_id: video_id.to_string(),
        },
        video_url: format!("https://www.youtube.com/watch?v={video_id}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn short_form(
    id: u32,
    title: &str,
    description: &str,
    metrics: [&str; 4],
    video_url: &str,
    tags: &[&str],
) -> PortfolioEntry {
    let [views, likes, duration, engagement] = metrics;
    PortfolioEntry {
        id,
        title: title.to_string(),
        description: description.to_string(),
        views: views.to_string(),
        likes: likes.to_string(),
        duration: duration.to_string(),
        engagement: Some(engagement.to_string()),
        media: Media::ShortForm {
            thumbnail: short_form_thumbnail(id),
        },
        video_url: video_url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn stock_entries() -> Vec<PortfolioEntry> {
    vec![
        long_form(
            1,
            "Cinematic Travel Vlog",
            "እንደገና የfreshman ተማሪ ብሆን ይህን ነው የማደርገው! | freshman mistakes!",
            ["200k", "1K", "8:53", "92%"],
            "_LZDitqcPIA",
            &["Cinematic", "Travel", "4K", "Color Grading"],
        ),
        long_form(
            2,
            "Digital Marketing Tutorial",
            "Digital Marketing በ 2025 | ለጀማሪዎች | Step By Step.",
            ["15K", "850", "12:20", "88%"],
            "tWFVqAxcW04",
            &["Tutorial", "Digital Marketing", "Educational"],
        ),
        short_form(
            3,
            "Viral Dance Challenge",
            "Fast-paced editing synced perfectly with trending music and viral transitions.",
            ["5.7M", "1.2M", "0:15", "156%"],
            "https://www.tiktok.com/@duekneel/video/7382618417842490632",
            &["Trending", "Music", "Dance", "Viral"],
        ),
        long_form(
            4,
            "Want to learn how to turn words into money?",
            "Copywriting ከዜሮ ላስጀምራችሁ! | Step by Step Guide.",
            ["25k", "1K", "8:53", "92%"],
            "5eL_242vL6w",
            &[
                "Monetization",
                "Content Creation",
                "Copywriting",
                "Digital Marketing",
                "Income",
            ],
        ),
        short_form(
            5,
            "Comedy Skit Series",
            "Multi-part comedy series with seamless transitions and perfect comedic timing.",
            ["3.2M", "780K", "0:45", "134%"],
            "https://www.tiktok.com/@dkr5624/video/7558495761067953430",
            &["Comedy", "Series", "Transition"],
        ),
        short_form(
            6,
            "Quick Tutorial Series",
            "Engaging tutorial content with text animations and clear step-by-step guidance.",
            ["4.1M", "920K", "0:30", "142%"],
            "https://www.tiktok.com/@liverpoolfc/video/7556249185444515094",
            &["Tutorial", "Educational", "Text Animation"],
        ),
        long_form(
            7,
            "Documentary Short",
            "Emotional storytelling with professional narration and cinematic pacing.",
            ["1.2M", "68K", "12:45", "86%"],
            "3JZ_D3ELwOQ",
            &["Documentary", "Storytelling", "Narration"],
        ),
        short_form(
            8,
            "Trending Transition",
            "Viral transition effect that gained massive popularity and started a trend.",
            ["6.3M", "1.5M", "0:10", "198%"],
            "https://www.tiktok.com/@xquyebqjlzc/video/7558138274959707447",
            &["Viral", "Transition", "Effect"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn platform_keys_round_trip_through_from_str() {
        for platform in Platform::ALL {
            assert_eq!(platform.key().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn legacy_platform_keys_parse() {
        assert_eq!("longform".parse::<Platform>(), Ok(Platform::LongForm));
        assert_eq!("shortform".parse::<Platform>(), Ok(Platform::ShortForm));
        assert!("vertical".parse::<Platform>().is_err());
    }

    #[test]
    fn stock_catalog_has_both_platforms() {
        let catalog = Catalog::stock();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.count(Platform::LongForm), 4);
        assert_eq!(catalog.count(Platform::ShortForm), 4);
    }

    #[test]
    fn stock_catalog_passes_validation() {
        let entries = Catalog::stock().entries().to_vec();
        assert!(Catalog::new(entries).is_ok());
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let catalog = Catalog::stock();
        let ids: Vec<u32> = catalog.filter("short-form").map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 5, 6, 8]);
    }

    #[test]
    fn filter_with_unknown_key_is_empty() {
        let catalog = Catalog::stock();
        assert_eq!(catalog.filter("vertical").count(), 0);
    }

    #[test]
    fn youtube_thumbnail_url_shape() {
        assert_eq!(
            youtube_thumbnail("abc123", ThumbnailQuality::High),
            "https://img.youtube.com/vi/abc123/hqdefault.jpg"
        );
    }

    #[test]
    fn short_form_thumbnail_path() {
        assert_eq!(short_form_thumbnail(6), "/thumbnails/tiktok-6.jpg");
    }

    #[test]
    fn embed_url_only_for_long_form() {
        let catalog = Catalog::stock();
        let long = catalog.get(1).unwrap();
        let short = catalog.get(3).unwrap();
        assert_eq!(
            long.embed_url().as_deref(),
            Some("https://www.youtube.com/embed/_LZDitqcPIA?autoplay=0&rel=0&modestbranding=1")
        );
        assert!(short.embed_url().is_none());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut entries = Catalog::stock().entries().to_vec();
        entries[1].id = entries[0].id;
        assert!(matches!(
            Catalog::new(entries),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn empty_video_id_rejected() {
        let mut entries = Catalog::stock().entries().to_vec();
        entries[0].media = Media::LongForm {
            video_id: "  ".to_string(),
        };
        assert!(matches!(
            Catalog::new(entries),
            Err(CatalogError::EmptyMedia(1))
        ));
    }

    #[test]
    fn deserialized_catalog_is_validated() {
        let stock = Catalog::stock();
        let json = serde_json::to_string(&stock).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stock);

        let mut entries = stock.entries().to_vec();
        entries[2].id = entries[0].id;
        let json = serde_json::to_string(&entries).unwrap();
        let err = serde_json::from_str::<Catalog>(&json).unwrap_err();
        assert!(err.to_string().contains("Duplicate portfolio entry id 1"));

        let mut entries = stock.entries().to_vec();
        entries[3].media = Media::ShortForm {
            thumbnail: String::new(),
        };
        let json = serde_json::to_string(&entries).unwrap();
        assert!(serde_json::from_str::<Catalog>(&json).is_err());
    }

    #[test]
    fn load_falls_back_to_stock() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::load(tmp.path()).unwrap();
        assert_eq!(catalog, Catalog::stock());
    }

    #[test]
    fn load_reads_tagged_media() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("portfolio.toml"),
            r#"
[[entries]]
id = 10
title = "Wedding Film"
description = "Highlights"
views = "1K"
likes = "10"
duration = "4:00"
video_url = "https://example.com/w"
tags = ["Wedding"]

[entries.media]
platform = "long-form"
video_id = "xyz"

[[entries]]
id = 11
title = "Reel"
description = "Short"
views = "2K"
likes = "20"
duration = "0:20"

[entries.media]
platform = "short-form"
thumbnail = "/thumbnails/reel.jpg"
"#,
        )
        .unwrap();

        let catalog = Catalog::load(tmp.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(10).unwrap().platform(), Platform::LongForm);
        assert_eq!(catalog.get(11).unwrap().platform(), Platform::ShortForm);
        assert_eq!(catalog.get(11).unwrap().video_url, "");
    }

    #[test]
    fn media_with_both_references_rejected() {
        let toml_str = r#"
platform = "long-form"
video_id = "xyz"
thumbnail = "/t.jpg"
"#;
        let result: Result<Media, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn media_without_reference_rejected() {
        let toml_str = r#"platform = "short-form""#;
        let result: Result<Media, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }
}
