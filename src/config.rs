//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by a sparse user config in the content root.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Kaleb Mitiku | Video Editor"
//! owner = "Kaleb Mitiku"
//! role = "Professional Video Editor"
//! lead = "Creative video editor, motion designer & cinematographer"
//!
//! [[site.stats]]
//! number = "50+"
//! label = "Projects Completed"
//!
//! [gallery]
//! default_filter = "long-form"  # or "short-form"
//!
//! [contact]
//! recipient_name = "Kaleb"
//! fallback_email = "kaleb@example.com"
//!
//! [contact.relay]
//! endpoint = "https://api.emailjs.com/api/v1.0/email/send"
//! # service_id = "service_xxx"
//! # template_id = "template_xxx"
//! # public_key = "xxxxxxxx"
//!
//! [theme]
//! max_width = "1200px"
//! grid_gap = "1.5rem"
//! card_radius = "12px"
//!
//! [colors.light]
//! background = "#ffffff"
//! # ...
//! ```
//!
//! ## Relay Credentials
//!
//! The three relay identifiers may also come from the environment, which
//! keeps them out of the content repository:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `REELFOLIO_RELAY_SERVICE_ID` | `contact.relay.service_id` |
//! | `REELFOLIO_RELAY_TEMPLATE_ID` | `contact.relay.template_id` |
//! | `REELFOLIO_RELAY_PUBLIC_KEY` | `contact.relay.public_key` |
//!
//! Unknown keys are rejected to catch typos early.

use crate::catalog::Platform;
use crate::relay::DEFAULT_ENDPOINT;
use crate::types::{ContactChannel, SocialLink, Stat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity shown in the navbar, hero, and footer.
    pub site: SiteInfo,
    /// Portfolio gallery settings.
    pub gallery: GalleryConfig,
    /// Contact section and relay settings.
    pub contact: ContactConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.default_filter.parse::<Platform>().is_err() {
            return Err(ConfigError::Validation(format!(
                "gallery.default_filter must be \"long-form\" or \"short-form\", got {:?}",
                self.gallery.default_filter
            )));
        }
        let endpoint = &self.contact.relay.endpoint;
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Validation(
                "contact.relay.endpoint must be an http(s) URL".into(),
            ));
        }
        if self.contact.fallback_email.trim().is_empty() {
            return Err(ConfigError::Validation(
                "contact.fallback_email must not be empty".into(),
            ));
        }
        if self.site.stats.is_empty() {
            return Err(ConfigError::Validation(
                "site.stats must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The default gallery filter. Falls back to long-form for unvalidated configs.
    pub fn default_filter(&self) -> Platform {
        self.gallery
            .default_filter
            .parse()
            .unwrap_or(Platform::LongForm)
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// `<title>` of the generated page.
    pub title: String,
    /// Name shown in the hero and footer.
    pub owner: String,
    /// Badge above the hero headline.
    pub role: String,
    /// One-line hero lead.
    pub lead: String,
    /// Optional resume download link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub stats: Vec<Stat>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Kaleb Mitiku | Video Editor".to_string(),
            owner: "Kaleb Mitiku".to_string(),
            role: "Professional Video Editor".to_string(),
            lead: "Creative video editor, motion designer & cinematographer with 2+ years of professional experience".to_string(),
            resume_url: None,
            stats: vec![
                Stat::new("50+", "Projects Completed"),
                Stat::new("50+", "Satisfied Clients"),
                Stat::new("2+", "Years Experience"),
            ],
        }
    }
}

/// Portfolio gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Filter active when the page loads.
    pub default_filter: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_filter: Platform::LongForm.key().to_string(),
        }
    }
}

/// Contact section settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// `to_name` template variable sent to the relay.
    pub recipient_name: String,
    /// Shown to visitors when the relay is not configured.
    pub fallback_email: String,
    pub relay: RelayConfig,
    pub channels: Vec<ContactChannel>,
    pub socials: Vec<SocialLink>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient_name: "Kaleb".to_string(),
            fallback_email: "kaleb@example.com".to_string(),
            relay: RelayConfig::default(),
            channels: vec![
                ContactChannel::new(
                    "Email",
                    "kaleb@example.com",
                    "mailto:kaleb@example.com",
                    "Send me an email anytime",
                ),
                ContactChannel::new(
                    "Phone",
                    "+251 91 234 5678",
                    "tel:+251912345678",
                    "Call or text me directly",
                ),
                ContactChannel::new(
                    "Telegram",
                    "@kalebeditor",
                    "https://t.me/kalebeditor",
                    "Message me on Telegram",
                ),
                ContactChannel::new(
                    "Location",
                    "Addis Ababa, Ethiopia",
                    "#",
                    "Based in Ethiopia, serving globally",
                ),
            ],
            socials: vec![
                SocialLink::new("LinkedIn", "https://linkedin.com/in/kalebeditor", "#0077B5"),
                SocialLink::new("Instagram", "https://instagram.com/kalebeditor", "#E4405F"),
                SocialLink::new("WhatsApp", "https://wa.me/251912345678", "#25D366"),
                SocialLink::new("Telegram", "https://t.me/kalebeditor", "#0088CC"),
            ],
        }
    }
}

/// Relay endpoint and routing identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: None,
            template_id: None,
            public_key: None,
        }
    }
}

/// The three relay identifiers, all present and non-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayCredentials<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
}

pub const ENV_SERVICE_ID: &str = "REELFOLIO_RELAY_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "REELFOLIO_RELAY_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "REELFOLIO_RELAY_PUBLIC_KEY";

impl RelayConfig {
    pub fn credentials(&self) -> Option<RelayCredentials<'_>> {
        fn present(v: &Option<String>) -> Option<&str> {
            v.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }
        Some(RelayCredentials {
            service_id: present(&self.service_id)?,
            template_id: present(&self.template_id)?,
            public_key: present(&self.public_key)?,
        })
    }

    /// Override identifiers from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Override identifiers from `lookup`; unset or blank values are ignored.
    pub fn apply_env_with<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = read(ENV_SERVICE_ID) {
            self.service_id = Some(v);
        }
        if let Some(v) = read(ENV_TEMPLATE_ID) {
            self.template_id = Some(v);
        }
        if let Some(v) = read(ENV_PUBLIC_KEY) {
            self.public_key = Some(v);
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of section content (CSS value).
    pub max_width: String,
    /// Gap between portfolio cards (CSS value).
    pub grid_gap: String,
    /// Corner radius of cards and buttons (CSS value).
    pub card_radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "1200px".to_string(),
            grid_gap: "1.5rem".to_string(),
            card_radius: "12px".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Card and navbar surface.
    pub surface: String,
    pub text: String,
    /// Secondary text: metrics, captions, descriptions.
    pub text_muted: String,
    pub border: String,
    /// Highlights, active filter, buttons.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f7f7fb".to_string(),
            surface: "#ffffff".to_string(),
            text: "#14141f".to_string(),
            text_muted: "#5c5c70".to_string(),
            border: "#e2e2ea".to_string(),
            accent: "#4a90f2".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b0b12".to_string(),
            surface: "#161622".to_string(),
            text: "#f1f1f6".to_string(),
            text_muted: "#9a9ab0".to_string(),
            border: "#2a2a3a".to_string(),
            accent: "#00d4aa".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. Environment overrides are not applied here.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Reelfolio Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "Kaleb Mitiku | Video Editor"
owner = "Kaleb Mitiku"
role = "Professional Video Editor"
lead = "Creative video editor, motion designer & cinematographer with 2+ years of professional experience"
# resume_url = "/assets/resume.pdf"

# Hero stats. Listing any replaces the whole list.
[[site.stats]]
number = "50+"
label = "Projects Completed"

[[site.stats]]
number = "50+"
label = "Satisfied Clients"

[[site.stats]]
number = "2+"
label = "Years Experience"

# ---------------------------------------------------------------------------
# Portfolio gallery
# ---------------------------------------------------------------------------
[gallery]
# Filter active on page load: "long-form" or "short-form".
default_filter = "long-form"

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# Sent to the relay as the template's to_name.
recipient_name = "Kaleb"
# Shown to visitors when the relay credentials are missing.
fallback_email = "kaleb@example.com"

[contact.relay]
endpoint = "https://api.emailjs.com/api/v1.0/email/send"
# All three are required for the form to send. They can also be set with
# REELFOLIO_RELAY_SERVICE_ID, REELFOLIO_RELAY_TEMPLATE_ID and
# REELFOLIO_RELAY_PUBLIC_KEY.
# service_id = "service_xxxxxxx"
# template_id = "template_xxxxxxx"
# public_key = "xxxxxxxxxxxxxxx"

[[contact.channels]]
title = "Email"
value = "kaleb@example.com"
link = "mailto:kaleb@example.com"
description = "Send me an email anytime"

[[contact.channels]]
title = "Phone"
value = "+251 91 234 5678"
link = "tel:+251912345678"
description = "Call or text me directly"

[[contact.channels]]
title = "Telegram"
value = "@kalebeditor"
link = "https://t.me/kalebeditor"
description = "Message me on Telegram"

[[contact.channels]]
title = "Location"
value = "Addis Ababa, Ethiopia"
link = "#"
description = "Based in Ethiopia, serving globally"

[[contact.socials]]
name = "LinkedIn"
url = "https://linkedin.com/in/kalebeditor"
color = "#0077B5"

[[contact.socials]]
name = "Instagram"
url = "https://instagram.com/kalebeditor"
color = "#E4405F"

[[contact.socials]]
name = "WhatsApp"
url = "https://wa.me/251912345678"
color = "#25D366"

[[contact.socials]]
name = "Telegram"
url = "https://t.me/kalebeditor"
color = "#0088CC"

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
max_width = "1200px"
grid_gap = "1.5rem"
card_radius = "12px"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f7f7fb"
surface = "#ffffff"
text = "#14141f"
text_muted = "#5c5c70"
border = "#e2e2ea"
accent = "#4a90f2"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b0b12"
surface = "#161622"
text = "#f1f1f6"
text_muted = "#9a9ab0"
border = "#2a2a3a"
accent = "#00d4aa"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --grid-gap: {grid_gap};
    --card-radius: {card_radius};
}}"#,
        max_width = theme.max_width,
        grid_gap = theme.grid_gap,
        card_radius = theme.card_radius,
    )
}
