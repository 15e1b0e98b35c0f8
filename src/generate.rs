//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scan manifest and renders the single-page
//! portfolio site.
//!
//! ## Page Sections
//!
//! - **Navbar**: section links, with the Portfolio dropdown carrying the two
//!   gallery filters
//! - **About** (`#about`): role badge, name, lead, markdown bio, stats
//! - **Portfolio** (`#portfolio`): filter buttons, platform summary, card grid,
//!   detail overlay
//! - **Skills** (`#skills`): software proficiency and core competencies
//! - **Services** (`#services`): package cards with pricing
//! - **Contact** (`#contact`): direct channels, socials, relay-backed form
//! - **Footer**: navigation links, contact channels, socials
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # The whole site
//! └── thumbnails/         # Anything under content/assets/, copied verbatim
//!     └── tiktok-3.jpg
//! ```
//!
//! ## Gallery Rendering
//!
//! The grid is rendered from a [`GalleryViewModel`]. Every catalog entry gets a
//! card so the browser can switch filters without a round trip; cards outside
//! the active filter carry the `hidden` attribute. Each card lists its ordered
//! thumbnail candidates in `data-fallbacks` for the in-page fallback walk.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and layout injected from config)
//! - `static/site.js`: Filter signal, thumbnail fallback, overlay, contact form

use crate::catalog::{FILTERS, Platform, PortfolioEntry};
use crate::config::{self, ContactConfig, SiteInfo};
use crate::contact::{MIN_MESSAGE_CHARS, MIN_NAME_CHARS, SubmitError, ValidationError};
use crate::gallery::{GalleryViewModel, LinkAction, platform_description};
use crate::navigation::{FILTER_SIGNAL, FILTER_SLOT_KEY};
use crate::relay::RelayError;
use crate::scan::{About, Manifest};
use crate::thumbnail;
use crate::types::{ContactChannel, NavItem, Package, Skills, site_navigation};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to walk assets: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What a generate run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub index: PathBuf,
    pub active_filter: String,
    /// Cards visible under the active filter.
    pub visible: usize,
    pub entries: usize,
    pub packages: usize,
    /// Copied asset paths, relative to the output root.
    pub assets: Vec<String>,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Render the site described by the manifest at `manifest_path`.
///
/// `source_dir` is the content root the manifest was scanned from; its
/// `assets/` directory is copied into `output_dir`.
pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_from_manifest(&manifest, source_dir, output_dir)
}

pub fn generate_from_manifest(
    manifest: &Manifest,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let view = GalleryViewModel::new(&manifest.catalog, manifest.config.default_filter());
    let page = render_index(manifest, &view);
    let index = output_dir.join("index.html");
    fs::write(&index, page.into_string())?;
    tracing::info!(path = %index.display(), "wrote index page");

    let assets = if manifest.has_assets {
        copy_assets(&source_dir.join("assets"), output_dir)?
    } else {
        Vec::new()
    };

    Ok(GenerateReport {
        index,
        active_filter: view.active_filter().to_string(),
        visible: view.filtered().len(),
        entries: manifest.catalog.len(),
        packages: manifest.packages.len(),
        assets,
    })
}

/// Copy every file under `src` into `dst`, keeping relative paths.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<String>, GenerateError> {
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            tracing::debug!(asset = %rel.display(), "copied asset");
            copied.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(copied)
}

/// Config-derived custom properties followed by the base stylesheet.
pub fn site_css(manifest: &Manifest) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&manifest.config.colors),
        config::generate_theme_css(&manifest.config.theme),
        CSS_STATIC
    )
}

fn markdown_to_html(body: &str) -> String {
    let parser = Parser::new(body);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the fixed navbar. Items with a filter request it on click.
pub fn render_navbar(items: &[NavItem], owner: &str) -> Markup {
    html! {
        header.navbar {
            a.brand href="#about" { (owner) }
            input.nav-toggle type="checkbox" id="nav-toggle";
            label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                span.hamburger-line {}
                span.hamburger-line {}
                span.hamburger-line {}
            }
            nav.nav-panel {
                ul {
                    @for item in items {
                        (render_nav_item(item))
                    }
                }
            }
        }
    }
}

fn render_nav_item(item: &NavItem) -> Markup {
    html! {
        li class=[(!item.children.is_empty()).then_some("has-dropdown")] {
            a href={ "#" (item.section) } data-filter=[item.filter.map(|p| p.key())] {
                (item.title)
            }
            @if !item.children.is_empty() {
                ul.dropdown {
                    @for child in &item.children {
                        (render_nav_item(child))
                    }
                }
            }
        }
    }
}

pub fn render_hero(site: &SiteInfo, about: &About) -> Markup {
    html! {
        section.hero id="about" {
            span.badge { (site.role) }
            h1 { "Hi, I'm " span.accent { (site.owner) } }
            p.lead { (site.lead) }
            div.bio { (PreEscaped(markdown_to_html(&about.body))) }
            div.hero-actions {
                a.button.primary href="#portfolio" { "View My Work" }
                a.button href="#contact" { "Get in Touch" }
                @if let Some(resume) = &site.resume_url {
                    a.button href=(resume) download { "Download Resume" }
                }
            }
            ul.stats {
                @for stat in &site.stats {
                    li {
                        span.stat-number { (stat.number) }
                        span.stat-label { (stat.label) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Portfolio
// ============================================================================

/// Renders the portfolio section from the view-model's current state.
pub fn render_portfolio(view: &GalleryViewModel<'_>) -> Markup {
    let summary = view.platform_summary();
    html! {
        section.portfolio id="portfolio" data-active-filter=(view.active_filter()) {
            h2 { "My " span.accent { "Portfolio" } }
            div.filters role="tablist" {
                @for def in &FILTERS {
                    @let active = view.active_filter() == def.key.key();
                    button.filter-button.active[active] type="button"
                        data-filter=(def.key.key()) aria-pressed=(active)
                        data-label=(def.label)
                        data-description=(platform_description(def.key)) {
                        span.icon { (def.icon) }
                        " " (def.label)
                        span.count { (view.catalog().count(def.key)) }
                    }
                }
            }
            div.platform-summary {
                strong.summary-count { (summary.count) }
                " " span.summary-label { (summary.label) } " videos"
                p.summary-description { (summary.description) }
            }
            div.portfolio-grid {
                @for entry in view.catalog().entries() {
                    (render_card(entry, view))
                }
            }
            @if view.filtered().is_empty() {
                p.empty-state { "No videos in this category yet." }
            }
            div.detail-overlay id="detail-overlay" role="dialog" aria-modal="true"
                hidden[view.selected().is_none()] {
                @if let Some(entry) = view.selected() {
                    (render_detail(entry, view))
                }
            }
        }
    }
}

/// Renders one grid card.
pub fn render_card(entry: &PortfolioEntry, view: &GalleryViewModel<'_>) -> Markup {
    let platform = entry.platform();
    let fallbacks = thumbnail::candidates(entry);
    let fallbacks_json = serde_json::to_string(&fallbacks).unwrap_or_default();
    let link = outbound_href(entry, view);
    html! {
        article.portfolio-card
            data-id=(entry.id)
            data-platform=(platform.key())
            data-fallbacks=(fallbacks_json)
            data-embed=[entry.embed_url()]
            data-href=[link]
            hidden[!view.is_visible(entry)] {
            div.card-thumb style={ "aspect-ratio: " (platform.aspect_ratio()) } {
                @if view.image_failed(entry.id) {
                    (thumb_placeholder(entry))
                } @else if let Some(first) = fallbacks.first() {
                    img src=(first) alt=(entry.title) loading="lazy";
                }
                span.duration { (entry.duration) }
                button.card-open type="button" data-open=(entry.id) aria-label={ "Play " (entry.title) } {
                    "▶"
                }
            }
            div.card-body {
                h3 { (entry.title) }
                p.description { (entry.description) }
                (metrics(entry))
                (tags(entry))
            }
        }
    }
}

fn thumb_placeholder(entry: &PortfolioEntry) -> Markup {
    html! {
        div.thumb-placeholder {
            span.icon { (if entry.platform() == Platform::LongForm { "▶" } else { "▯" }) }
            span { "Preview unavailable" }
        }
    }
}

fn metrics(entry: &PortfolioEntry) -> Markup {
    html! {
        ul.metrics {
            li { span.metric-label { "Views" } " " (entry.views) }
            li { span.metric-label { "Likes" } " " (entry.likes) }
            @if let Some(engagement) = &entry.engagement {
                li { span.metric-label { "Engagement" } " " (engagement) }
            }
        }
    }
}

fn tags(entry: &PortfolioEntry) -> Markup {
    html! {
        @if !entry.tags.is_empty() {
            ul.tags {
                @for tag in &entry.tags {
                    li { (tag) }
                }
            }
        }
    }
}

/// The outbound href, or `None` when the link must be suppressed.
fn outbound_href<'e>(entry: &'e PortfolioEntry, view: &GalleryViewModel<'_>) -> Option<&'e str> {
    match view.validate_outbound_link(&entry.video_url) {
        LinkAction::Follow => Some(entry.video_url.trim()),
        LinkAction::Suppress => None,
    }
}

fn outbound_link(entry: &PortfolioEntry, view: &GalleryViewModel<'_>, label: &str) -> Markup {
    html! {
        @match outbound_href(entry, view) {
            Some(href) => {
                a.outbound href=(href) target="_blank" rel="noopener noreferrer" { (label) }
            },
            None => {
                a.outbound.disabled aria-disabled="true" { (label) }
            },
        }
    }
}

/// Renders the detail overlay body for one entry.
pub fn render_detail(entry: &PortfolioEntry, view: &GalleryViewModel<'_>) -> Markup {
    let platform = entry.platform();
    html! {
        div.detail-panel data-id=(entry.id) data-platform=(platform.key()) {
            button.detail-close type="button" aria-label="Close" { "×" }
            div.detail-player style={ "aspect-ratio: " (platform.aspect_ratio()) } {
                @if let Some(embed) = entry.embed_url() {
                    iframe src=(embed) title=(entry.title) frameborder="0"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen {}
                } @else {
                    @if let Some(first) = thumbnail::candidates(entry).first() {
                        img src=(first) alt=(entry.title);
                    }
                    (outbound_link(entry, view, "▶ Watch on TikTok"))
                }
            }
            div.detail-info {
                h3 { (entry.title) }
                p.description { (entry.description) }
                (metrics(entry))
                (tags(entry))
                (outbound_link(entry, view, "Open original"))
            }
        }
    }
}

// ============================================================================
// Skills
// ============================================================================

/// Renders the skills section: software proficiency, then core competencies.
pub fn render_skills(skills: &Skills) -> Markup {
    html! {
        section.skills id="skills" aria-labelledby="skills-title" {
            h2 id="skills-title" { "Professional " span.accent { "Skills" } }
            p.subtitle { "Expertise in video production and post-production" }
            @if !skills.software.is_empty() {
                h3 { "Software Proficiency" }
                div.software-grid {
                    @for program in &skills.software {
                        div.software-item {
                            @if let Some(image) = &program.image {
                                img src=(image) alt={ (program.name) " software interface" } loading="lazy";
                            }
                            span.level-badge { (program.level) "%" }
                            span.software-name { (program.name) }
                            span.software-category { (program.category) }
                            (level_bar(program.level))
                        }
                    }
                }
            }
            @if !skills.core.is_empty() {
                h3 { "Core Competencies" }
                div.skills-grid {
                    @for group in &skills.core {
                        div.skill-category {
                            @if let Some(image) = &group.image {
                                img src=(image) alt={ (group.category) " skill category" } loading="lazy";
                            }
                            h4 { (group.category) }
                            @for skill in &group.skills {
                                div.skill-item {
                                    span.skill-name { (skill.name) }
                                    span.skill-level { (skill.level) "%" }
                                    (level_bar(skill.level))
                                }
                            }
                        }
                    }
                }
            }
            p.skills-cta {
                "Ready to create something amazing? "
                a href="#contact" { "Let's talk" }
            }
        }
    }
}

fn level_bar(level: u8) -> Markup {
    html! {
        div.level-bar role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=(level) {
            div.level-fill style={ "width: " (level) "%" } {}
        }
    }
}

// ============================================================================
// Services, contact, footer
// ============================================================================

pub fn render_packages(packages: &[Package]) -> Markup {
    html! {
        section.services id="services" {
            h2 { "Service " span.accent { "Packages" } }
            div.package-grid {
                @for pkg in packages {
                    article.package.popular[pkg.popular] data-id=(pkg.id)
                        style={ "--accent: " (pkg.accent_color) } {
                        @if pkg.popular {
                            span.popular-badge { "Most Popular" }
                        }
                        h3 { (pkg.title) }
                        p.subtitle { (pkg.subtitle) }
                        ul.features {
                            @for feature in &pkg.features {
                                li { "✓ " (feature) }
                            }
                        }
                        @if !pkg.uses.is_empty() {
                            h4 { "Perfect for" }
                            ul.uses {
                                @for used in &pkg.uses {
                                    li { (used) }
                                }
                            }
                        }
                        dl.pricing {
                            dt { "Single" } dd { (pkg.pricing.single) }
                            dt { "Package" } dd { (pkg.pricing.package) }
                            dt { "Turnaround" } dd { (pkg.pricing.turnaround) }
                        }
                        a.button href="#contact" { "Get Started" }
                    }
                }
            }
        }
    }
}

/// Renders the contact section. The form carries everything the in-page
/// script needs to validate and send without another request.
pub fn render_contact(contact: &ContactConfig) -> Markup {
    let creds = contact.relay.credentials();
    let not_configured = SubmitError::Configuration {
        fallback: contact.fallback_email.clone(),
    };
    html! {
        section.contact id="contact" {
            h2 { "Let's " span.accent { "Work Together" } }
            div.contact-grid {
                div.channels {
                    @for channel in &contact.channels {
                        div.channel {
                            h4 { (channel.title) }
                            (channel_value(channel))
                            p { (channel.description) }
                        }
                    }
                    ul.socials {
                        @for social in &contact.socials {
                            li {
                                a href=(social.url) target="_blank" rel="noopener noreferrer"
                                    style={ "--brand: " (social.color) } { (social.name) }
                            }
                        }
                    }
                }
                form.contact-form id="contact-form" novalidate
                    data-endpoint=(contact.relay.endpoint)
                    data-service-id=[creds.map(|c| c.service_id)]
                    data-template-id=[creds.map(|c| c.template_id)]
                    data-public-key=[creds.map(|c| c.public_key)]
                    data-to-name=(contact.recipient_name)
                    data-min-name=(MIN_NAME_CHARS)
                    data-min-message=(MIN_MESSAGE_CHARS)
                    data-msg-missing=(ValidationError::MissingFields.to_string())
                    data-msg-email=(ValidationError::InvalidEmail.to_string())
                    data-msg-name=(ValidationError::NameTooShort.to_string())
                    data-msg-message=(ValidationError::MessageTooShort.to_string())
                    data-msg-config=(not_configured.to_string())
                    data-msg-invalid=(RelayError::MalformedRequest.to_string())
                    data-msg-unavailable=(RelayError::Unavailable.to_string())
                    data-msg-network=(RelayError::NetworkUnreachable.to_string())
                    data-msg-other=(RelayError::Unknown(500).to_string()) {
                    label { "Name" input type="text" name="name" autocomplete="name"; }
                    label { "Email" input type="email" name="email" autocomplete="email"; }
                    label { "Subject" input type="text" name="subject"; }
                    label { "Message" textarea name="message" rows="5" {} }
                    div.form-error role="alert" hidden {}
                    div.form-success role="status" hidden {
                        "Thank you for your message! I'll get back to you soon."
                    }
                    button.button.primary type="submit" { "Send Message" }
                }
            }
        }
    }
}

/// A channel's value, linked unless its link is the `#` sentinel.
fn channel_value(channel: &ContactChannel) -> Markup {
    html! {
        @if channel.link == "#" {
            span.channel-value { (channel.value) }
        } @else if channel.is_external() {
            a.channel-value href=(channel.link) target="_blank" rel="noopener noreferrer" {
                (channel.value)
            }
        } @else {
            a.channel-value href=(channel.link) { (channel.value) }
        }
    }
}

/// Renders the footer: brand, then navigation, contact and social columns.
pub fn render_footer(site: &SiteInfo, nav: &[NavItem], contact: &ContactConfig) -> Markup {
    html! {
        footer.site-footer {
            div.footer-main {
                div.footer-brand {
                    span.footer-logo { (site.owner) }
                    p.footer-role { (site.role) }
                }
                div.footer-section {
                    h4 { "Navigation" }
                    nav.footer-links {
                        @for item in nav {
                            a href={ "#" (item.section) } { (item.title) }
                        }
                    }
                }
                div.footer-section {
                    h4 { "Contact" }
                    ul.footer-contact {
                        @for channel in &contact.channels {
                            li { (channel_value(channel)) }
                        }
                    }
                }
                div.footer-section {
                    h4 { "Follow Me" }
                    p { "Check out my latest work" }
                    ul.footer-socials {
                        @for social in &contact.socials {
                            li {
                                a href=(social.url) target="_blank" rel="noopener noreferrer"
                                    aria-label=(social.name) { (social.name) }
                            }
                        }
                    }
                }
            }
            div.footer-bottom {
                p { "© " (site.owner) ". All rights reserved." }
                a.back-to-top href="#about" aria-label="Back to top" { "↑" }
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the whole single-page site.
pub fn render_index(manifest: &Manifest, view: &GalleryViewModel<'_>) -> Markup {
    let site = &manifest.config.site;
    let nav = site_navigation();
    let css = site_css(manifest);
    let content = html! {
        (render_navbar(&nav, &site.owner))
        main data-signal=(FILTER_SIGNAL) data-slot=(FILTER_SLOT_KEY) {
            (render_hero(site, &manifest.about))
            (render_portfolio(view))
            (render_skills(&manifest.skills))
            (render_packages(&manifest.packages))
            (render_contact(&manifest.config.contact))
        }
        (render_footer(site, &nav, &manifest.config.contact))
    };
    base_document(&site.title, &css, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Media};
    use crate::config::RelayConfig;
    use crate::test_helpers::*;

    #[test]
    fn navbar_dropdown_carries_filters() {
        let html = render_navbar(&site_navigation(), "Kaleb").into_string();
        assert!(html.contains(r#"data-filter="long-form""#));
        assert!(html.contains(r#"data-filter="short-form""#));
        assert!(html.contains(r##"href="#services""##));
        assert!(html.contains("has-dropdown"));
    }

    #[test]
    fn hero_renders_markdown_bio() {
        let about = About {
            body: "I cut **wedding films** and *reels*.".to_string(),
            source: None,
        };
        let html = render_hero(&SiteInfo::default(), &about).into_string();
        assert!(html.contains("<strong>wedding films</strong>"));
        assert!(html.contains("<em>reels</em>"));
        assert!(html.contains("Projects Completed"));
        assert!(!html.contains("Download Resume"));
    }

    // =========================================================================
    // Portfolio tests
    // =========================================================================

    #[test]
    fn grid_hides_cards_outside_active_filter() {
        let catalog = Catalog::stock();
        let view = GalleryViewModel::new(&catalog, Platform::LongForm);
        let html = render_card(find_entry(&catalog, 3), &view).into_string();
        assert!(html.contains("hidden"));
        assert!(html.contains(r#"data-platform="short-form""#));

        let html = render_card(find_entry(&catalog, 1), &view).into_string();
        assert!(!html.contains("hidden"));
    }

    #[test]
    fn card_lists_thumbnail_fallbacks_in_order() {
        let catalog = Catalog::stock();
        let view = GalleryViewModel::new(&catalog, Platform::LongForm);
        let html = render_card(find_entry(&catalog, 1), &view).into_string();
        let max = html.find("maxresdefault").unwrap();
        let sd = html.find("sddefault").unwrap();
        let hq = html.find("hqdefault").unwrap();
        assert!(max < sd && sd < hq);
        assert!(html.contains(r#"style="aspect-ratio: 16/9""#));
    }

    #[test]
    fn fallbacks_keep_paths_with_spaces_whole() {
        let mut entry = Catalog::stock().entries()[2].clone();
        entry.media = Media::ShortForm {
            thumbnail: "/thumbs/my clip.jpg".to_string(),
        };
        let catalog = Catalog::new(vec![entry]).unwrap();
        let view = GalleryViewModel::new(&catalog, Platform::ShortForm);
        let html = render_card(&catalog.entries()[0], &view).into_string();

        let attr = html
            .split(r#"data-fallbacks=""#)
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap()
            .replace("&quot;", "\"");
        let list: Vec<String> = serde_json::from_str(&attr).unwrap();
        assert_eq!(list, vec!["/thumbs/my clip.jpg".to_string()]);
    }

    #[test]
    fn failed_image_renders_placeholder() {
        let catalog = Catalog::stock();
        let mut view = GalleryViewModel::new(&catalog, Platform::ShortForm);
        view.mark_image_failed(5);
        let html = render_card(find_entry(&catalog, 5), &view).into_string();
        assert!(html.contains("thumb-placeholder"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn active_filter_button_is_marked() {
        let catalog = Catalog::stock();
        let view = GalleryViewModel::new(&catalog, Platform::ShortForm);
        let html = render_portfolio(&view).into_string();
        assert!(html.contains(r#"data-active-filter="short-form""#));
        assert!(button_tag(&html, "short-form").contains(r#"class="filter-button active""#));
        assert!(button_tag(&html, "long-form").contains(r#"class="filter-button""#));
        assert!(button_tag(&html, "long-form").contains(r#"aria-pressed="false""#));
    }

    /// The opening `<button ...>` tag of the filter button for `key`.
    fn button_tag<'h>(html: &'h str, key: &str) -> &'h str {
        let needle = format!(r#"data-filter="{key}""#);
        html.match_indices("<button")
            .map(|(i, _)| html[i..].split('>').next().unwrap())
            .find(|tag| tag.contains(&needle))
            .unwrap_or_else(|| panic!("no filter button for {key}"))
    }

    #[test]
    fn overlay_hidden_without_selection() {
        let catalog = Catalog::stock();
        let view = GalleryViewModel::new(&catalog, Platform::LongForm);
        let html = render_portfolio(&view).into_string();
        assert!(html.contains(r#"id="detail-overlay""#));
        assert!(!html.contains("detail-panel"));
    }

    #[test]
    fn long_form_detail_embeds_player() {
        let catalog = Catalog::stock();
        let mut view = GalleryViewModel::new(&catalog, Platform::LongForm);
        view.open_detail_by_id(2);
        let html = render_portfolio(&view).into_string();
        assert!(html.contains("<iframe"));
        assert!(html.contains("https://www.youtube.com/embed/tWFVqAxcW04"));
    }

    #[test]
    fn short_form_detail_links_out() {
        let catalog = Catalog::stock();
        let mut view = GalleryViewModel::new(&catalog, Platform::ShortForm);
        view.open_detail_by_id(3);
        let html = render_detail(view.selected().unwrap(), &view).into_string();
        assert!(!html.contains("<iframe"));
        assert!(html.contains("https://www.tiktok.com/@duekneel/video/7382618417842490632"));
        assert!(html.contains(r#"style="aspect-ratio: 9/16""#));
    }

    #[test]
    fn placeholder_link_renders_without_href() {
        let mut entry = Catalog::stock().entries()[2].clone();
        entry.video_url = "#".to_string();
        let catalog = Catalog::new(vec![entry]).unwrap();
        let view = GalleryViewModel::new(&catalog, Platform::ShortForm);
        let html = render_detail(&catalog.entries()[0], &view).into_string();
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(!html.contains(r##"href="#""##));
    }

    // =========================================================================
    // Contact tests
    // =========================================================================

    #[test]
    fn contact_form_without_credentials_omits_ids() {
        let html = render_contact(&ContactConfig::default()).into_string();
        assert!(!html.contains("data-service-id"));
        assert!(html.contains("Please contact me directly at kaleb@example.com."));
        assert!(html.contains(r#"data-min-message="10""#));
    }

    #[test]
    fn contact_form_carries_relay_ids() {
        let contact = ContactConfig {
            relay: RelayConfig {
                service_id: Some("service_abc".into()),
                template_id: Some("template_def".into()),
                public_key: Some("pk_123".into()),
                ..RelayConfig::default()
            },
            ..ContactConfig::default()
        };
        let html = render_contact(&contact).into_string();
        assert!(html.contains(r#"data-service-id="service_abc""#));
        assert!(html.contains(r#"data-template-id="template_def""#));
        assert!(html.contains(r#"data-public-key="pk_123""#));
        assert!(html.contains("Network error."));
    }

    #[test]
    fn popular_package_is_badged() {
        let html = render_packages(&crate::scan::stock_packages()).into_string();
        assert_eq!(html.matches("Most Popular").count(), 1);
        assert!(html.contains("--accent: #4A90F2"));
    }

    #[test]
    fn skills_render_levels_and_bars() {
        let html = render_skills(&crate::scan::stock_skills()).into_string();
        assert!(html.contains("Software Proficiency"));
        assert!(html.contains("Core Competencies"));
        assert!(html.contains("DaVinci Resolve"));
        assert!(html.contains(r#"style="width: 98%""#));
        assert!(html.contains(r#"aria-valuenow="85""#));
        assert_eq!(html.matches("skill-category").count(), 3);
        assert!(html.contains(r##"href="#contact""##));
    }

    #[test]
    fn empty_skills_keep_the_section_anchor() {
        let html = render_skills(&Skills::default()).into_string();
        assert!(html.contains(r#"id="skills""#));
        assert!(!html.contains("Software Proficiency"));
        assert!(!html.contains("Core Competencies"));
    }

    #[test]
    fn footer_has_navigation_contact_and_social_columns() {
        let contact = ContactConfig::default();
        let html =
            render_footer(&SiteInfo::default(), &site_navigation(), &contact).into_string();
        for heading in ["Navigation", "Contact", "Follow Me"] {
            assert!(html.contains(&format!("<h4>{heading}</h4>")), "missing {heading}");
        }
        for section in ["about", "portfolio", "services", "contact"] {
            assert!(html.contains(&format!(r##"href="#{section}""##)));
        }
        assert!(html.contains(r#"href="mailto:kaleb@example.com""#));
        for social in &contact.socials {
            assert!(html.contains(&format!(r#"aria-label="{}""#, social.name)));
        }
        assert!(html.contains("All rights reserved."));
    }

    // =========================================================================
    // Full page tests
    // =========================================================================

    #[test]
    fn index_includes_doctype_styles_and_script() {
        let manifest = stock_manifest();
        let view = GalleryViewModel::new(&manifest.catalog, manifest.config.default_filter());
        let html = render_index(&manifest, &view).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("--color-accent:"));
        assert!(html.contains("--grid-gap: 1.5rem"));
        assert!(html.contains("portfolioFilterChange"));
        let mut last = 0;
        for section in ["about", "portfolio", "skills", "services", "contact"] {
            let at = html
                .find(&format!(r#"id="{section}""#))
                .unwrap_or_else(|| panic!("missing {section}"));
            assert!(at > last, "{section} out of order");
            last = at;
        }
        assert!(html.find("<footer").unwrap() > last);
    }

    #[test]
    fn html_escape_in_maud() {
        let mut entry = Catalog::stock().entries()[0].clone();
        entry.title = "<script>alert('xss')</script>".to_string();
        let catalog = Catalog::new(vec![entry]).unwrap();
        let view = GalleryViewModel::new(&catalog, Platform::LongForm);
        let html = render_card(&catalog.entries()[0], &view).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn generate_writes_index_and_copies_assets() {
        let source = setup_fixtures();
        let manifest = crate::scan::scan(source.path()).unwrap();
        let out = tempfile::TempDir::new().unwrap();

        let report = generate_from_manifest(&manifest, source.path(), out.path()).unwrap();
        assert!(out.path().join("index.html").is_file());
        assert_eq!(report.active_filter, "short-form");
        assert_eq!(report.entries, 3);
        assert!(report.assets.contains(&"robots.txt".to_string()));
        assert!(out.path().join("robots.txt").is_file());
    }
}
