//! # slidegen
//!
//! Builds JSON slide manifests from directories of images. The
//! filesystem is the data source: file names become captions and
//! directory contents become manifest entries — no database, no
//! front-matter, no separate ordering file.
//!
//! # Two Pipelines
//!
//! Two independent one-shot pipelines, one subcommand each:
//!
//! ```text
//! carousel   images/carousel/  →  carousel.json        {src, alt, caption, link}
//! featured   images/featured/  →  data/featured.json   {src, alt, caption}
//! ```
//!
//! They share no runtime state and deliberately keep separate
//! humanization rules, extension allow-lists, and manifest shapes: the
//! carousel feeds a homepage slider that wants acronym-aware captions
//! and per-slide links, while the featured grid wants plain title-cased
//! alt text and nothing else. See [`humanize`] for both rule sets.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Pipeline A — recursive discovery, sorting, URL building, slide entries |
//! | [`featured`] | Pipeline B — flat listing of the featured directory |
//! | [`humanize`] | Filename stem → display text, both rule sets |
//! | [`output`] | CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## Manifests Over Templating
//!
//! The builders emit plain JSON consumed by whatever renders the site.
//! Each manifest is human-readable and diffable, so a rerun that changes
//! nothing produces a byte-identical file — useful for build systems
//! that skip work on unchanged outputs.
//!
//! ## Fail Fast, Write Once
//!
//! Each run is a single linear pass with no partial-completion state:
//! either the whole manifest is assembled and written, or the run aborts
//! before the output file is touched. Filesystem errors are treated as
//! unrecoverable for a one-shot batch tool.

pub mod carousel;
pub mod featured;
pub mod humanize;
pub mod output;
