//! Ordered-fallback thumbnail resolution.
//!
//! Hosted videos expose thumbnails at several resolution tiers, not all of
//! which exist for every video. The presentation layer tries candidates from
//! most to least preferred, advancing only when the current one fails to load.
//! Each candidate is tried at most once; once the last candidate fails, the
//! entry's image is marked failed and a placeholder is shown instead.
//!
//! ```text
//! maxresdefault → sddefault → hqdefault → mqdefault → default → placeholder
//! ```

use crate::catalog::{Media, PortfolioEntry, youtube_thumbnail};

/// Resolution tiers for hosted-video thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    MaxRes,
    Standard,
    High,
    Medium,
    Default,
}

impl ThumbnailQuality {
    /// Most-preferred to least-preferred.
    pub const FALLBACK_ORDER: [ThumbnailQuality; 5] = [
        ThumbnailQuality::MaxRes,
        ThumbnailQuality::Standard,
        ThumbnailQuality::High,
        ThumbnailQuality::Medium,
        ThumbnailQuality::Default,
    ];

    pub fn file_stem(self) -> &'static str {
        match self {
            ThumbnailQuality::MaxRes => "maxresdefault",
            ThumbnailQuality::Standard => "sddefault",
            ThumbnailQuality::High => "hqdefault",
            ThumbnailQuality::Medium => "mqdefault",
            ThumbnailQuality::Default => "default",
        }
    }
}

/// Lazy sequence of candidate thumbnail URLs for one entry.
#[derive(Debug, Clone)]
pub struct ThumbnailCandidates<'a> {
    media: &'a Media,
    next: usize,
}

impl<'a> ThumbnailCandidates<'a> {
    pub fn new(entry: &'a PortfolioEntry) -> Self {
        Self {
            media: &entry.media,
            next: 0,
        }
    }
}

impl Iterator for ThumbnailCandidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let idx = self.next;
        self.next += 1;
        match self.media {
            Media::LongForm { video_id } => ThumbnailQuality::FALLBACK_ORDER
                .get(idx)
                .map(|q| youtube_thumbnail(video_id, *q)),
            Media::ShortForm { thumbnail } => (idx == 0).then(|| thumbnail.clone()),
        }
    }
}

/// All candidates for an entry, in fallback order.
pub fn candidates(entry: &PortfolioEntry) -> Vec<String> {
    ThumbnailCandidates::new(entry).collect()
}

/// Result of advancing past a failed candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Try this URL next.
    Next(String),
    /// No candidates left; the entry's image should be marked failed.
    Exhausted,
}

/// A single cursor over an entry's candidates.
#[derive(Debug, Clone)]
pub struct ThumbnailCursor<'a> {
    candidates: ThumbnailCandidates<'a>,
    current: Option<String>,
}

impl<'a> ThumbnailCursor<'a> {
    pub fn new(entry: &'a PortfolioEntry) -> Self {
        let mut candidates = ThumbnailCandidates::new(entry);
        let current = candidates.next();
        Self {
            candidates,
            current,
        }
    }

    /// URL currently being tried, or `None` once exhausted.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Record a load failure of the current candidate.
    pub fn advance(&mut self) -> Advance {
        self.current = self.candidates.next();
        match &self.current {
            Some(url) => Advance::Next(url.clone()),
            None => Advance::Exhausted,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}
