//! Carousel manifest builder.
//!
//! Scans an images directory (recursively by default), imposes a
//! deterministic order, and produces one [`SlideEntry`] per image:
//!
//! ```json
//! {
//!   "src": "/images/carousel/furnace-tuneup_2025.jpg",
//!   "alt": "Furnace Tune-Up",
//!   "caption": "Furnace Tune-Up",
//!   "link": "#services"
//! }
//! ```
//!
//! `src` is always a forward-slash URL path: the file's path relative to
//! the site root (base name alone if the file lives outside it), joined
//! under the configured URL prefix. Caption and alt both come from
//! [`humanize_stem`]; `link` is the same configured anchor on every
//! slide.
//!
//! The run is a single linear pass: discover, sort, assemble. Any
//! filesystem error aborts the run before output is written.

use crate::humanize::humanize_stem;
use clap::ValueEnum;
use serde::Serialize;
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("error walking images root: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("images-root does not exist or is not a directory: {0}")]
    BadImagesRoot(PathBuf),
}

/// One slide in the carousel manifest. Immutable once assembled;
/// serialized verbatim, field order as declared.
#[derive(Debug, Clone, Serialize)]
pub struct SlideEntry {
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub link: String,
}

/// Display order for discovered images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    /// Case-insensitive file name
    Name,
    /// Case-insensitive full path
    Path,
    /// Modification time, newest first
    Mtime,
}

/// Everything the build needs besides the output destination, which the
/// caller owns (write to a file or print for a dry run).
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub images_root: PathBuf,
    pub site_root: PathBuf,
    pub url_prefix: String,
    pub default_link: String,
    pub sort: SortMode,
    pub recursive: bool,
}

/// Run the carousel pipeline: discover, sort, assemble.
///
/// Fails fast with [`BuildError::BadImagesRoot`] before touching any
/// files if `images_root` is missing or not a directory.
pub fn build(opts: &BuildOptions) -> Result<Vec<SlideEntry>, BuildError> {
    let images_root = opts
        .images_root
        .canonicalize()
        .map_err(|_| BuildError::BadImagesRoot(opts.images_root.clone()))?;
    if !images_root.is_dir() {
        return Err(BuildError::BadImagesRoot(opts.images_root.clone()));
    }

    // A missing site root is not fatal: relativization just falls back
    // to base names.
    let site_root = opts
        .site_root
        .canonicalize()
        .unwrap_or_else(|_| opts.site_root.clone());

    let mut files = discover_images(&images_root, opts.recursive)?;
    sort_files(&mut files, opts.sort)?;

    Ok(build_entries(
        &files,
        &site_root,
        &opts.url_prefix,
        &opts.default_link,
    ))
}

/// Enumerate regular files under `images_root` with a supported image
/// extension. Order is filesystem-dependent; callers sort afterwards.
pub fn discover_images(images_root: &Path, recursive: bool) -> Result<Vec<PathBuf>, BuildError> {
    let mut files = Vec::new();
    if recursive {
        for entry in WalkDir::new(images_root) {
            let entry = entry?;
            if entry.file_type().is_file() && is_image(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(images_root)? {
            let path = entry?.path();
            if path.is_file() && is_image(&path) {
                files.push(path);
            }
        }
    }
    Ok(files)
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Sort in place. All modes use stable sorts, so equal keys keep their
/// enumeration order.
pub fn sort_files(files: &mut Vec<PathBuf>, mode: SortMode) -> Result<(), BuildError> {
    match mode {
        SortMode::Name => files.sort_by_key(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        }),
        SortMode::Path => files.sort_by_key(|p| p.to_string_lossy().to_lowercase()),
        SortMode::Mtime => {
            // Stat up front so a failure aborts before any reordering
            let mut keyed = Vec::with_capacity(files.len());
            for path in files.drain(..) {
                let modified = fs::metadata(&path)?.modified()?;
                keyed.push((modified, path));
            }
            keyed.sort_by_key(|(modified, _)| Reverse(*modified));
            files.extend(keyed.into_iter().map(|(_, path)| path));
        }
    }
    Ok(())
}

/// Join a site-relative path under the URL prefix, always forward-slash.
///
/// A prefix ending in `/` concatenates directly; a non-empty prefix
/// gains a `/` separator; an empty prefix means a single leading `/`.
pub fn to_url(prefix: &str, rel: &Path) -> String {
    let url = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if prefix.ends_with('/') {
        format!("{prefix}{url}")
    } else if !prefix.is_empty() {
        format!("{prefix}/{url}")
    } else {
        format!("/{url}")
    }
}

/// Assemble one [`SlideEntry`] per file, preserving the given order.
pub fn build_entries(
    files: &[PathBuf],
    site_root: &Path,
    url_prefix: &str,
    default_link: &str,
) -> Vec<SlideEntry> {
    files
        .iter()
        .map(|file| {
            let rel = match file.strip_prefix(site_root) {
                Ok(rel) => rel.to_path_buf(),
                // Outside the site root: degraded but non-fatal, keep
                // just the file name
                Err(_) => file
                    .file_name()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| file.clone()),
            };
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let caption = humanize_stem(&stem);
            SlideEntry {
                src: to_url(url_prefix, &rel),
                alt: caption.clone(),
                caption,
                link: default_link.to_string(),
            }
        })
        .collect()
}
