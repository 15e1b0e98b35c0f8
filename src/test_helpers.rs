//! Shared test utilities for the reelfolio test suite.
//!
//! Provides fixture setup and lookup helpers over catalogs, filtered lists,
//! and manifests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let entry = find_entry(&manifest.catalog, 21);
//! assert_eq!(entry.title, "Wedding Highlights");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::{Catalog, PortfolioEntry};
use crate::scan::{self, Manifest};
use crate::types::Package;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Manifest scanned from an empty directory: stock catalog, packages, config.
pub fn stock_manifest() -> Manifest {
    let tmp = TempDir::new().unwrap();
    scan::scan(tmp.path()).unwrap()
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a catalog entry by id. Panics if not found.
pub fn find_entry(catalog: &Catalog, id: u32) -> &PortfolioEntry {
    catalog.get(id).unwrap_or_else(|| {
        panic!(
            "entry {id} not found. Available: {:?}",
            catalog.entries().iter().map(|e| e.id).collect::<Vec<_>>()
        )
    })
}

/// Find a package by title. Panics if not found.
pub fn find_package<'a>(manifest: &'a Manifest, title: &str) -> &'a Package {
    manifest
        .packages
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = manifest.packages.iter().map(|p| p.title.as_str()).collect();
            panic!("package '{title}' not found. Available: {titles:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Ids of a filtered list, in order.
pub fn entry_ids(entries: &[&PortfolioEntry]) -> Vec<u32> {
    entries.iter().map(|e| e.id).collect()
}
