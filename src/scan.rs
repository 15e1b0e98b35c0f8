//! Content directory scanning and manifest generation.
//!
//! Stage 1 of the build. Reads the content directory into a [`Manifest`] that
//! the generate stage renders.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml        # Site configuration (optional)
//! ├── portfolio.toml     # Portfolio entries (optional, stock catalog otherwise)
//! ├── packages.toml      # Service packages (optional, stock packages otherwise)
//! ├── skills.toml        # Software and core skills (optional, stock skills otherwise)
//! ├── about.md           # Hero bio in markdown (optional)
//! └── assets/            # Copied verbatim to the output root
//!     └── thumbnails/
//!         └── tiktok-3.jpg
//! ```
//!
//! Every file is optional: an empty content directory produces the stock site.

use crate::catalog::{Catalog, CatalogError};
use crate::config::{self, SiteConfig};
use crate::types::{Package, Pricing, Skill, SkillCategory, Skills, Software};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("packages.toml: {0}")]
    Packages(#[from] toml::de::Error),
    #[error("Duplicate package id {0}")]
    DuplicatePackage(u32),
    #[error("skills.toml: {0}")]
    Skills(toml::de::Error),
    #[error("Skill '{name}' has level {level}; levels run from 0 to 100")]
    SkillLevel { name: String, level: u8 },
}

/// Manifest output from the scan stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub config: SiteConfig,
    pub catalog: Catalog,
    pub packages: Vec<Package>,
    #[serde(default)]
    pub skills: Skills,
    pub about: About,
    /// Whether `assets/` exists and should be copied.
    #[serde(default)]
    pub has_assets: bool,
}

/// Hero bio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    /// Raw markdown body.
    pub body: String,
    /// `about.md` if the bio came from the content directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Default for About {
    fn default() -> Self {
        Self {
            body: "I craft cinematic visuals and cool animations that capture attention and \
                   emotion. My goal? To make every project unforgettable and trigger real \
                   connection the moment you hit play."
                .to_string(),
            source: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PackagesFile {
    #[serde(default)]
    packages: Vec<Package>,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    // Load site config (uses defaults if config.toml doesn't exist)
    let mut config = config::load_config(root)?;
    config.contact.relay.apply_env();

    let catalog = Catalog::load(root)?;
    let packages = load_packages(root)?;
    let skills = load_skills(root)?;
    let about = load_about(root)?;
    let has_assets = root.join("assets").is_dir();

    tracing::debug!(
        entries = catalog.len(),
        packages = packages.len(),
        software = skills.software.len(),
        skill_categories = skills.core.len(),
        has_assets,
        "scanned content directory"
    );

    Ok(Manifest {
        config,
        catalog,
        packages,
        skills,
        about,
        has_assets,
    })
}

fn load_packages(root: &Path) -> Result<Vec<Package>, ScanError> {
    let path = root.join("packages.toml");
    if !path.exists() {
        return Ok(stock_packages());
    }
    let content = fs::read_to_string(&path)?;
    let file: PackagesFile = toml::from_str(&content)?;

    let mut seen = std::collections::HashSet::new();
    for pkg in &file.packages {
        if !seen.insert(pkg.id) {
            return Err(ScanError::DuplicatePackage(pkg.id));
        }
    }
    Ok(file.packages)
}

fn load_skills(root: &Path) -> Result<Skills, ScanError> {
    let path = root.join("skills.toml");
    if !path.exists() {
        return Ok(stock_skills());
    }
    let content = fs::read_to_string(&path)?;
    let skills: Skills = toml::from_str(&content).map_err(ScanError::Skills)?;

    if let Some((name, level)) = skills.levels().find(|&(_, level)| level > 100) {
        return Err(ScanError::SkillLevel {
            name: name.to_string(),
            level,
        });
    }
    Ok(skills)
}

fn load_about(root: &Path) -> Result<About, ScanError> {
    let path = root.join("about.md");
    if !path.is_file() {
        return Ok(About::default());
    }
    let body = fs::read_to_string(&path)?;
    Ok(About {
        body,
        source: Some("about.md".to_string()),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in service packages.
pub fn stock_packages() -> Vec<Package> {
    vec![
        Package {
            id: 1,
            title: "Short-Form Content Package".to_string(),
            subtitle: "For businesses, artists, and influencers who want to shine on TikTok, \
                       Instagram Reels, or YouTube Shorts."
                .to_string(),
            popular: false,
            features: strings(&[
                "Fast-paced editing for 15–90 second clips",
                "Text overlays in Amharic or English",
                "Background music (local or international styles)",
                "Clean color and sound adjustments",
                "1–2 revisions per video",
            ]),
            uses: strings(&[
                "Music promotion",
                "Event highlights (weddings, graduations, concerts)",
                "Short brand promos or motivational clips",
            ]),
            pricing: Pricing {
                single: "2,500 ETB per video".to_string(),
                package: "5 videos package – 10,000 ETB".to_string(),
                turnaround: "2–3 days per video".to_string(),
            },
            accent_color: "#FF6B6B".to_string(),
        },
        Package {
            id: 2,
            title: "YouTube & Long-Form Package".to_string(),
            subtitle: "Ideal for YouTubers, storytellers, educators, and organizations who want \
                       polished, long-form videos."
                .to_string(),
            popular: true,
            features: strings(&[
                "Full edit (10–30 minutes)",
                "Smooth transitions and storytelling structure",
                "Subtitle (Amharic or English)",
                "Intro/outro with your logo and brand style",
                "Clean sound, color, and pacing",
            ]),
            uses: strings(&[
                "YouTube channels (vlogs, educational, lifestyle)",
                "Church programs, cultural storytelling, and interviews",
                "NGO or company video content",
            ]),
            pricing: Pricing {
                single: "5,000 ETB per video".to_string(),
                package: "Monthly plan (4 videos): 17,000 ETB".to_string(),
                turnaround: "4–6 days per video".to_string(),
            },
            accent_color: "#4A90F2".to_string(),
        },
        Package {
            id: 3,
            title: "Full Creator Package".to_string(),
            subtitle: "For creators or businesses that post both long YouTube videos and short \
                       clips for social media."
                .to_string(),
            popular: false,
            features: strings(&[
                "1 full YouTube video (10–30 min)",
                "4 short-form clips (for TikTok / Reels / Shorts)",
                "Branded graphics and subtitles",
                "Consistent color, sound, and storytelling style",
                "Up to 3 revisions",
            ]),
            uses: strings(&[
                "Artists promoting new music or events",
                "Educational and inspirational creators",
                "Brands combining storytelling + promo content",
            ]),
            pricing: Pricing {
                single: "8,000 ETB per package".to_string(),
                package: "Monthly plan (4 sets): 28,000 ETB".to_string(),
                turnaround: "5–7 days per set".to_string(),
            },
            accent_color: "#00D4AA".to_string(),
        },
    ]
}

fn category(name: &str, image: &str, skills: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        category: name.to_string(),
        image: Some(image.to_string()),
        skills: skills
            .iter()
            .map(|&(name, level)| Skill {
                name: name.to_string(),
                level,
            })
            .collect(),
    }
}

fn software(name: &str, level: u8, category: &str, image: &str) -> Software {
    Software {
        name: name.to_string(),
        level,
        category: category.to_string(),
        image: Some(image.to_string()),
    }
}

/// The built-in skills section.
pub fn stock_skills() -> Skills {
    Skills {
        software: vec![
            software("Premiere Pro", 95, "Video Editing", "/software/premiere-pro.webp"),
            software("After Effects", 90, "Motion Graphics", "/software/after-effects.webp"),
            software("DaVinci Resolve", 88, "Color Grading", "/software/davinci-resolve.webp"),
            software("Capcut", 98, "Video Editing", "/software/capcut.webp"),
        ],
        core: vec![
            category(
                "Editing",
                "/skills/editing.webp",
                &[("Video Editing", 95), ("Color Grading", 90), ("Audio Mixing", 85)],
            ),
            category(
                "Creative",
                "/skills/creative.webp",
                &[("Motion Graphics", 88), ("Visual Effects", 82), ("Storytelling", 90)],
            ),
            category(
                "Technical",
                "/skills/technical.webp",
                &[("Cinematography", 80), ("Workflow", 85), ("Quality Control", 88)],
            ),
        ],
    }
}
