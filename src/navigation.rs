//! Navigation/session port between the page chrome and the gallery.
//!
//! The navbar can ask the gallery to switch filters in two ways:
//!
//! - **Signal**: a `portfolioFilterChange` signal carrying `{"filter": key}`,
//!   applied by whichever gallery is currently mounted.
//! - **One-shot slot**: a session-scoped `portfolioFilter` value, read and
//!   deleted by the gallery on mount. This covers navigation that happens
//!   before the gallery exists.
//!
//! Both live behind [`NavigationPort`] so the view-model never touches a host
//! environment directly. [`MemorySession`] is the in-process implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};

/// Name of the cross-component filter signal.
pub const FILTER_SIGNAL: &str = "portfolioFilterChange";
/// Session slot key for a pending filter request.
pub const FILTER_SLOT_KEY: &str = "portfolioFilter";
/// Anchor id of the portfolio section.
pub const PORTFOLIO_SECTION: &str = "portfolio";

/// Payload of the filter signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChange {
    pub filter: String,
}

impl FilterChange {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
        }
    }
}

/// Host-environment services used by the gallery and the navbar.
pub trait NavigationPort {
    /// Read and delete the pending filter, if any.
    fn take_pending_filter(&mut self) -> Option<String>;

    /// Persist a filter for the next gallery mount.
    fn store_pending_filter(&mut self, filter: &str);

    /// Subscribe to filter signals. Dropping the receiver unsubscribes.
    fn subscribe_filter_requests(&mut self) -> Receiver<FilterChange>;

    /// Dispatch a filter signal. Returns the number of live listeners reached.
    fn request_filter(&mut self, change: FilterChange) -> usize;

    fn scroll_to_section(&mut self, section_id: &str);
}

/// In-memory session: a key-value slot store plus a signal fan-out.
#[derive(Debug, Default)]
pub struct MemorySession {
    slots: HashMap<String, String>,
    listeners: Vec<Sender<FilterChange>>,
    scrolls: Vec<String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// Section ids scrolled to, oldest first.
    pub fn scroll_history(&self) -> &[String] {
        &self.scrolls
    }
}

impl NavigationPort for MemorySession {
    fn take_pending_filter(&mut self) -> Option<String> {
        self.slots.remove(FILTER_SLOT_KEY)
    }

    fn store_pending_filter(&mut self, filter: &str) {
        self.slots
            .insert(FILTER_SLOT_KEY.to_string(), filter.to_string());
    }

    fn subscribe_filter_requests(&mut self) -> Receiver<FilterChange> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    fn request_filter(&mut self, change: FilterChange) -> usize {
        // Listeners whose receiver was dropped are pruned on send failure.
        self.listeners.retain(|tx| tx.send(change.clone()).is_ok());
        tracing::debug!(
            signal = FILTER_SIGNAL,
            filter = %change.filter,
            listeners = self.listeners.len(),
            "dispatched filter signal"
        );
        self.listeners.len()
    }

    fn scroll_to_section(&mut self, section_id: &str) {
        self.scrolls.push(section_id.to_string());
    }
}

/// Navbar action for the portfolio dropdown.
///
/// Scrolls to the portfolio section and, when a filter is given, signals the
/// mounted gallery. With no gallery listening, the filter is kept in the
/// one-shot slot for the next mount instead.
pub fn navigate_to_portfolio<P: NavigationPort>(port: &mut P, filter: Option<&str>) {
    port.scroll_to_section(PORTFOLIO_SECTION);
    if let Some(filter) = filter {
        let reached = port.request_filter(FilterChange::new(filter));
        if reached == 0 {
            port.store_pending_filter(filter);
        }
    }
}

/// Plain anchor navigation. A leading `#` is accepted.
pub fn navigate_to_section<P: NavigationPort>(port: &mut P, section: &str) {
    port.scroll_to_section(section.trim_start_matches('#'));
}
