//! Shared types used by config, scan, and generate.
//!
//! These types are serialized into the JSON manifest between the scan and
//! generate stages and must stay identical on both sides.

use crate::catalog::Platform;
use serde::{Deserialize, Serialize};

/// A hero statistic, e.g. "50+ Projects Completed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

impl Stat {
    pub fn new(number: &str, label: &str) -> Self {
        Self {
            number: number.to_string(),
            label: label.to_string(),
        }
    }
}

/// A direct contact method in the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactChannel {
    pub title: String,
    pub value: String,
    /// `mailto:`, `tel:`, an external URL, or `#` for none.
    pub link: String,
    pub description: String,
}

impl ContactChannel {
    pub fn new(title: &str, value: &str, link: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            link: link.to_string(),
            description: description.to_string(),
        }
    }

    /// External links open in a new tab.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Brand color used on hover.
    pub color: String,
}

impl SocialLink {
    pub fn new(name: &str, url: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            color: color.to_string(),
        }
    }
}

/// Price points for a service package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pricing {
    pub single: String,
    pub package: String,
    pub turnaround: String,
}

/// A service package in the services section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Package {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub popular: bool,
    pub features: Vec<String>,
    #[serde(default)]
    pub uses: Vec<String>,
    pub pricing: Pricing,
    pub accent_color: String,
}

/// A named proficiency, as a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// 0 to 100.
    pub level: u8,
}

/// A group of core skills, e.g. "Editing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub skills: Vec<Skill>,
}

/// An editing application and how well it is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Software {
    pub name: String,
    pub level: u8,
    /// What the application is used for, e.g. "Color Grading".
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The skills section: software proficiency and core competencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skills {
    #[serde(default)]
    pub software: Vec<Software>,
    #[serde(default)]
    pub core: Vec<SkillCategory>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.software.is_empty() && self.core.is_empty()
    }

    /// Every level in the section with the name it belongs to.
    pub fn levels(&self) -> impl Iterator<Item = (&str, u8)> {
        self.software
            .iter()
            .map(|s| (s.name.as_str(), s.level))
            .chain(
                self.core
                    .iter()
                    .flat_map(|c| c.skills.iter().map(|s| (s.name.as_str(), s.level))),
            )
    }
}

/// Navbar item. Items with children render as a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    /// In-page section id, without `#`.
    pub section: String,
    /// Gallery filter requested when this item is chosen.
    pub filter: Option<Platform>,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn section(title: &str, section: &str) -> Self {
        Self {
            title: title.to_string(),
            section: section.to_string(),
            filter: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    pub fn with_filter(mut self, filter: Platform) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// The navbar of the generated page.
pub fn site_navigation() -> Vec<NavItem> {
    vec![
        NavItem::section("About", "about"),
        NavItem::section("Portfolio", "portfolio").with_children(vec![
            NavItem::section("Long Form Video", "portfolio").with_filter(Platform::LongForm),
            NavItem::section("Short Form Video", "portfolio").with_filter(Platform::ShortForm),
            NavItem::section("Skills", "skills"),
        ]),
        NavItem::section("Services", "services")
            .with_children(vec![NavItem::section("Packages", "services")]),
        NavItem::section("Contact", "contact"),
    ]
}
