//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every entity (portfolio entry, package) leads with a positional index and
//! its title. Files and links are secondary context on indented lines, so the
//! output reads as a content inventory.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Portfolio
//! Long Form (1 video)
//!     001 Wedding Highlights (4:12)
//!         48K views, 3.1K likes
//! Short Form (2 videos)
//!     001 First Dance Reel (0:28)
//!         310K views, 22K likes
//!
//! Packages
//! 001 Wedding Package (popular)
//!     15,000 ETB per wedding
//!
//! Contact
//!     Relay: configured
//!
//! Config
//!     config.toml
//!     portfolio.toml
//!     about.md
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//!     Portfolio: 2 of 3 entries visible (short-form)
//!     Packages: 1
//! Assets
//!     robots.txt
//! Generated 1 page, 3 cards, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::catalog::{Platform, PortfolioEntry};
use crate::contact::ContactForm;
use crate::gallery::{GalleryViewModel, LinkAction};
use crate::generate::GenerateReport;
use crate::scan::Manifest;
use crate::thumbnail;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// ```text
/// 001 Wedding Highlights (4:12)
/// ```
fn entry_header(index: usize, entry: &PortfolioEntry) -> String {
    format!("{} {} ({})", format_index(index), entry.title, entry.duration)
}

fn entry_metrics(entry: &PortfolioEntry) -> String {
    match &entry.engagement {
        Some(e) => format!(
            "{} views, {} likes, {} engagement",
            entry.views, entry.likes, e
        ),
        None => format!("{} views, {} likes", entry.views, entry.likes),
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan output: the catalog grouped by platform, packages, skills,
/// relay status, and the content files that were found.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Portfolio".to_string()];

    for platform in Platform::ALL {
        let entries: Vec<&PortfolioEntry> = manifest.catalog.filter(platform.key()).collect();
        lines.push(format!(
            "{} ({})",
            platform.label(),
            plural(entries.len(), "video")
        ));
        for (i, entry) in entries.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), entry_header(i + 1, entry)));
            lines.push(format!("{}{}", indent(2), entry_metrics(entry)));
        }
    }

    lines.push(String::new());
    lines.push("Packages".to_string());
    for (i, pkg) in manifest.packages.iter().enumerate() {
        let marker = if pkg.popular { " (popular)" } else { "" };
        lines.push(format!("{} {}{}", format_index(i + 1), pkg.title, marker));
        lines.push(format!("{}{}", indent(1), pkg.pricing.single));
    }

    lines.push(String::new());
    lines.push("Skills".to_string());
    for program in &manifest.skills.software {
        lines.push(format!("{}{} {}%", indent(1), program.name, program.level));
    }
    for group in &manifest.skills.core {
        lines.push(format!(
            "{}{} ({})",
            indent(1),
            group.category,
            plural(group.skills.len(), "skill")
        ));
    }

    lines.push(String::new());
    lines.push("Contact".to_string());
    let contact = &manifest.config.contact;
    match contact.relay.credentials() {
        Some(_) => lines.push(format!("{}Relay: configured", indent(1))),
        None => lines.push(format!(
            "{}Relay: not configured (visitors are sent to {})",
            indent(1),
            contact.fallback_email
        )),
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    for file in ["config.toml", "portfolio.toml", "packages.toml", "skills.toml"] {
        if source_root.join(file).exists() {
            lines.push(format!("{}{}", indent(1), file));
        }
    }
    if let Some(source) = &manifest.about.source {
        lines.push(format!("{}{}", indent(1), source));
    }
    if manifest.has_assets {
        lines.push(format!("{}assets/", indent(1)));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![
        "Home \u{2192} index.html".to_string(),
        format!(
            "{}Portfolio: {} of {} entries visible ({})",
            indent(1),
            report.visible,
            report.entries,
            report.active_filter
        ),
        format!("{}Packages: {}", indent(1), report.packages),
    ];

    if !report.assets.is_empty() {
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset));
        }
    }

    lines.push(format!(
        "Generated 1 page, {}, {}",
        plural(report.entries, "card"),
        plural(report.assets.len(), "asset")
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Catalog output
// ============================================================================

/// Format the gallery's filtered list, as the page would show it.
pub fn format_catalog(view: &GalleryViewModel<'_>) -> Vec<String> {
    let summary = view.platform_summary();
    let mut lines = vec![format!(
        "{} ({})",
        summary.label,
        plural(summary.count, "video")
    )];
    if !summary.description.is_empty() {
        lines.push(format!("{}{}", indent(1), summary.description));
    }

    for (i, entry) in view.filtered().into_iter().enumerate() {
        lines.push(entry_header(i + 1, entry));
        lines.push(format!("{}{}", indent(1), entry_metrics(entry)));
        if let Some(thumb) = thumbnail::candidates(entry).first() {
            lines.push(format!("{}Thumbnail: {}", indent(1), thumb));
        }
        match view.validate_outbound_link(&entry.video_url) {
            LinkAction::Follow => lines.push(format!("{}Link: {}", indent(1), entry.video_url)),
            LinkAction::Suppress => lines.push(format!("{}Link: (none)", indent(1))),
        }
        if !entry.tags.is_empty() {
            lines.push(format!("{}Tags: {}", indent(1), entry.tags.join(", ")));
        }
    }
    lines
}

pub fn print_catalog(view: &GalleryViewModel<'_>) {
    for line in format_catalog(view) {
        println!("{}", line);
    }
}

// ============================================================================
// Contact output
// ============================================================================

/// Format the settled state of a contact form.
pub fn format_submission(form: &ContactForm) -> Vec<String> {
    if form.succeeded() {
        vec!["Thank you for your message! I'll get back to you soon.".to_string()]
    } else if let Some(err) = form.error() {
        vec![format!("Error: {err}")]
    } else if form.is_submitting() {
        vec!["Sending...".to_string()]
    } else {
        vec!["Nothing sent.".to_string()]
    }
}

pub fn print_submission(form: &ContactForm) {
    for line in format_submission(form) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::contact::{ContactFields, Field};
    use crate::config::ContactConfig;
    use crate::relay::RelayError;
    use crate::test_helpers::*;
    use std::path::PathBuf;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "video"), "1 video");
        assert_eq!(plural(0, "video"), "0 videos");
        assert_eq!(plural(4, "card"), "4 cards");
    }

    // =========================================================================
    // Scan output
    // =========================================================================

    #[test]
    fn scan_output_groups_by_platform() {
        let tmp = setup_fixtures();
        let manifest = crate::scan::scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest, tmp.path());

        assert_eq!(lines[0], "Portfolio");
        assert_eq!(lines[1], "Long Form (1 video)");
        assert_eq!(lines[2], "    001 Wedding Highlights (4:12)");
        assert_eq!(lines[3], "        48K views, 3.1K likes, 91% engagement");
        assert_eq!(lines[4], "Short Form (2 videos)");
        assert!(lines.contains(&"001 Wedding Package (popular)".to_string()));
        assert!(lines.contains(&"    DaVinci Resolve 92%".to_string()));
        assert!(lines.contains(&"    Wedding Coverage (2 skills)".to_string()));
        assert!(lines.contains(&"    Relay: configured".to_string()));
        assert!(lines.contains(&"    skills.toml".to_string()));
        assert!(lines.contains(&"    about.md".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
    }

    #[test]
    fn scan_output_reports_missing_relay() {
        let manifest = stock_manifest();
        let lines = format_scan_output(&manifest, Path::new("/nonexistent"));
        assert!(
            lines
                .iter()
                .any(|l| l.contains("Relay: not configured (visitors are sent to kaleb@example.com)"))
        );
        // Nothing found on disk
        assert_eq!(lines.last().map(String::as_str), Some("Config"));
    }

    // =========================================================================
    // Generate output
    // =========================================================================

    #[test]
    fn generate_output_summarizes_report() {
        let report = GenerateReport {
            index: PathBuf::from("dist/index.html"),
            active_filter: "short-form".to_string(),
            visible: 2,
            entries: 3,
            packages: 1,
            assets: vec!["robots.txt".to_string()],
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(lines[1], "    Portfolio: 2 of 3 entries visible (short-form)");
        assert!(lines.contains(&"    robots.txt".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Generated 1 page, 3 cards, 1 asset"
        );
    }

    #[test]
    fn generate_output_without_assets() {
        let report = GenerateReport {
            index: PathBuf::from("dist/index.html"),
            active_filter: "long-form".to_string(),
            visible: 4,
            entries: 8,
            packages: 3,
            assets: vec![],
        };
        let lines = format_generate_output(&report);
        assert!(!lines.contains(&"Assets".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 1 page, 8 cards, 0 assets");
    }

    // =========================================================================
    // Catalog output
    // =========================================================================

    #[test]
    fn catalog_lists_filtered_entries() {
        let catalog = Catalog::stock();
        let view = GalleryViewModel::new(&catalog, Platform::LongForm);
        let lines = format_catalog(&view);
        assert_eq!(lines[0], "Long Form (4 videos)");
        assert_eq!(lines[2], "001 Cinematic Travel Vlog (8:53)");
        assert!(lines.contains(
            &"    Thumbnail: https://img.youtube.com/vi/_LZDitqcPIA/maxresdefault.jpg".to_string()
        ));
    }

    #[test]
    fn catalog_marks_suppressed_links() {
        let tmp = setup_fixtures();
        let manifest = crate::scan::scan(tmp.path()).unwrap();
        let view = GalleryViewModel::new(&manifest.catalog, Platform::ShortForm);
        let lines = format_catalog(&view);
        assert!(lines.contains(&"    Link: (none)".to_string()));
        assert!(lines.contains(&"    Thumbnail: /thumbnails/reel-23.jpg".to_string()));
    }

    #[test]
    fn catalog_with_unknown_filter_is_empty() {
        let catalog = Catalog::stock();
        let mut view = GalleryViewModel::new(&catalog, Platform::LongForm);
        view.change_filter("vertical");
        assert_eq!(format_catalog(&view), vec!["Unknown (0 videos)".to_string()]);
    }

    // =========================================================================
    // Submission output
    // =========================================================================

    #[test]
    fn submission_error_is_prefixed() {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "A");
        let _ = form.begin_submission(&ContactConfig::default());
        assert_eq!(format_submission(&form), vec!["Error: Please fill in all fields."]);
    }

    #[test]
    fn submission_relay_failure() {
        let mut form = ContactForm::with_fields(ContactFields {
            name: "Abebe".into(),
            email: "abebe@example.com".into(),
            subject: "Edit".into(),
            message: "Please cut my reel.".into(),
        });
        form.complete_submission(Err(RelayError::Unavailable));
        assert!(format_submission(&form)[0].contains("temporarily unavailable"));
    }

    #[test]
    fn fresh_form_sent_nothing() {
        assert_eq!(format_submission(&ContactForm::new()), vec!["Nothing sent."]);
    }
}
