//! # Reelfolio
//!
//! Portfolio site generator and contact workflow for video editors.
//!
//! A reelfolio site is a single page: an about hero, a filterable gallery of
//! long-form and short-form videos, service packages, and a contact form that
//! relays messages through an email service. This crate holds the state
//! machines behind that page and renders it as static HTML.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (files → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! The manifest is human-readable JSON, so a scan can be inspected before the
//! site is rendered.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Portfolio entries, platforms, filter definitions, stock catalog |
//! | [`thumbnail`] | Ordered thumbnail candidates and the fallback cursor |
//! | [`gallery`] | Gallery view-model: active filter, detail overlay, image failures |
//! | [`navigation`] | Navigation port: filter signal, one-shot slot, section scrolling |
//! | [`contact`] | Contact form validation and the submission latch |
//! | [`relay`] | Email relay contract and the HTTP relay |
//! | [`scan`] | Stage 1: reads the content directory into a manifest |
//! | [`generate`] | Stage 2: renders the site from the manifest using Maud |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared types serialized between stages (`Package`, `Skills`, `NavItem`) |
//! | [`output`] | CLI output formatting |
//!
//! # Cross-Component Filtering
//!
//! The navbar can ask the gallery to switch filters. If the gallery is
//! listening the request is delivered as a signal; otherwise it is parked in a
//! one-shot slot that the gallery consumes when it mounts. See
//! [`navigation::navigate_to_portfolio`] and [`gallery::MountedGallery`].
//!
//! # Contact Submissions
//!
//! [`contact::ContactForm`] validates, builds exactly one
//! [`relay::RelayRequest`] per attempt, and drops attempts made while one is
//! in flight. Relay failures are classified by status into user-facing
//! messages.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod generate;
pub mod navigation;
pub mod output;
pub mod relay;
pub mod scan;
pub mod thumbnail;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
