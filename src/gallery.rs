//! Gallery view-model.
//!
//! Owns all interactive gallery state: the active filter, the selected entry
//! for the detail overlay, the hovered entry, and per-entry image failures.
//! The filtered list is never stored; it is re-derived from the catalog on
//! every read, so it always equals the entries whose platform key matches the
//! active filter, in catalog order.
//!
//! [`MountedGallery`] wires a view-model to a [`NavigationPort`]: it consumes
//! the one-shot filter slot on mount and applies filter signals for as long as
//! it lives.

use crate::catalog::{Catalog, Platform, PortfolioEntry};
use crate::navigation::{FilterChange, NavigationPort};
use std::collections::BTreeMap;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Placeholder href that means "no outbound link".
pub const LINK_PLACEHOLDER: &str = "#";

/// What the presentation layer should do with an outbound link click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    Follow,
    /// Suppress the default navigation.
    Suppress,
}

/// Count and blurb for the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSummary {
    pub count: usize,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct GalleryViewModel<'a> {
    catalog: &'a Catalog,
    active_filter: String,
    selected: Option<&'a PortfolioEntry>,
    hovered: Option<u32>,
    image_errors: BTreeMap<u32, bool>,
}

impl<'a> GalleryViewModel<'a> {
    pub fn new(catalog: &'a Catalog, default_filter: Platform) -> Self {
        Self {
            catalog,
            active_filter: default_filter.key().to_string(),
            selected: None,
            hovered: None,
            image_errors: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// The active filter as a platform, if it names one.
    pub fn active_platform(&self) -> Option<Platform> {
        self.active_filter.parse().ok()
    }

    /// Accepts any key; an unknown one simply filters everything out.
    /// Legacy spellings (`longform`, `shortform`) are stored as the
    /// canonical key.
    pub fn change_filter(&mut self, filter: &str) {
        let key = match filter.parse::<Platform>() {
            Ok(platform) => platform.key(),
            Err(_) => filter,
        };
        tracing::debug!(from = %self.active_filter, to = key, "gallery filter changed");
        self.active_filter = key.to_string();
    }

    pub fn filtered(&self) -> Vec<&'a PortfolioEntry> {
        let key = self.active_filter.as_str();
        self.catalog
            .entries()
            .iter()
            .filter(|e| e.platform().key() == key)
            .collect()
    }

    pub fn is_visible(&self, entry: &PortfolioEntry) -> bool {
        entry.platform().key() == self.active_filter
    }

    pub fn selected(&self) -> Option<&'a PortfolioEntry> {
        self.selected
    }

    /// Open the detail overlay for an entry.
    pub fn open_detail(&mut self, entry: &'a PortfolioEntry) {
        self.selected = Some(entry);
    }

    /// Open the detail overlay by id. Unknown ids leave the selection as is.
    pub fn open_detail_by_id(&mut self, id: u32) -> bool {
        match self.catalog.get(id) {
            Some(entry) => {
                self.selected = Some(entry);
                true
            }
            None => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Flag an entry whose every thumbnail candidate failed. Idempotent.
    pub fn mark_image_failed(&mut self, id: u32) {
        self.image_errors.insert(id, true);
    }

    pub fn image_failed(&self, id: u32) -> bool {
        self.image_errors.get(&id).copied().unwrap_or(false)
    }

    pub fn image_errors(&self) -> &BTreeMap<u32, bool> {
        &self.image_errors
    }

    pub fn validate_outbound_link(&self, url: &str) -> LinkAction {
        let url = url.trim();
        if url.is_empty() || url == LINK_PLACEHOLDER {
            LinkAction::Suppress
        } else {
            LinkAction::Follow
        }
    }

    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    pub fn set_hovered(&mut self, id: Option<u32>) {
        self.hovered = id;
    }

    pub fn platform_summary(&self) -> PlatformSummary {
        let count = self.filtered().len();
        match self.active_platform() {
            Some(platform) => PlatformSummary {
                count,
                label: platform.label(),
                description: platform_description(platform),
            },
            None => PlatformSummary {
                count,
                label: "Unknown",
                description: "",
            },
        }
    }
}

/// Blurb shown under the filter buttons.
pub fn platform_description(platform: Platform) -> &'static str {
    match platform {
        Platform::LongForm => {
            "Long-form content with cinematic storytelling and professional editing"
        }
        Platform::ShortForm => "Short-form viral content with engaging transitions and trends",
    }
}

/// A view-model subscribed to cross-component filter signals.
///
/// Dropping it unsubscribes.
pub struct MountedGallery<'a> {
    view: GalleryViewModel<'a>,
    requests: Receiver<FilterChange>,
}

impl<'a> MountedGallery<'a> {
    /// Apply any pending one-shot filter, then start listening for signals.
    pub fn mount<P: NavigationPort>(mut view: GalleryViewModel<'a>, port: &mut P) -> Self {
        if let Some(filter) = port.take_pending_filter() {
            tracing::debug!(filter = %filter, "applying pending filter on mount");
            view.change_filter(&filter);
        }
        let requests = port.subscribe_filter_requests();
        Self { view, requests }
    }

    /// Apply every queued filter signal in arrival order.
    ///
    /// Returns the number of signals applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.requests.try_recv() {
                Ok(change) => {
                    self.view.change_filter(&change.filter);
                    applied += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    pub fn view(&self) -> &GalleryViewModel<'a> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut GalleryViewModel<'a> {
        &mut self.view
    }

    pub fn unmount(self) -> GalleryViewModel<'a> {
        self.view
    }
}
