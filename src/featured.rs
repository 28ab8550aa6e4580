//! Featured-image manifest builder.
//!
//! Fixed-path pipeline with no knobs: list the images directly inside
//! `images/featured` (created if absent), and emit one
//! `{src, alt, caption}` item per image to `data/featured.json`.
//!
//! Unlike the carousel builder there is no URL prefix and no site-root
//! relativization: `src` is the file path as listed, with backslashes
//! normalized to forward slashes. `caption` is always empty — the
//! consuming page renders alt text only — and `alt` comes from the plain
//! [`title_case_stem`] rules, not the carousel's acronym-aware captioner.

use crate::humanize::title_case_stem;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory listed for featured images, relative to the working dir.
pub const FEATURED_DIR: &str = "images/featured";
/// Manifest destination, relative to the working dir.
pub const OUTPUT_PATH: &str = "data/featured.json";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif"];

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One featured image. `caption` serializes as an empty string.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedItem {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// List `featured_dir` (creating it if absent) and assemble items in
/// path order.
pub fn build_items(featured_dir: &Path) -> Result<Vec<FeaturedItem>, BuildError> {
    fs::create_dir_all(featured_dir)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(featured_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_image(p))
        .collect();
    paths.sort();

    Ok(paths
        .iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            FeaturedItem {
                src: path.to_string_lossy().replace('\\', "/"),
                alt: title_case_stem(&stem),
                caption: String::new(),
            }
        })
        .collect())
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
