//! Filename-to-display-text transforms.
//!
//! Both manifest builders derive human-readable text from image file
//! names, but with deliberately different rule sets:
//!
//! - [`humanize_stem`] builds carousel captions: separator-aware token
//!   splitting, numeric export-suffix stripping, and an acronym table so
//!   trade terms like "HVAC" or "IAQ" keep their casing.
//! - [`title_case_stem`] builds featured-image alt text: plain
//!   word-by-word title casing with no domain vocabulary.
//!
//! The two manifests feed different consumers, so the rule sets live
//! side by side rather than being merged into one "smart" captioner.
//! Both functions are pure and total: same input, same output, and the
//! carousel variant falls back to `"Photo"` rather than ever returning
//! an empty caption.

use regex::Regex;
use std::sync::LazyLock;

/// Canonical display forms for tokens the plain capitalizer would get
/// wrong. Keys are lowercase; lookup is case-insensitive.
const ACRONYMS: &[(&str, &str)] = &[
    ("ac", "AC"),
    ("hvac", "HVAC"),
    ("iaq", "IAQ"),
    ("uv", "UV"),
    ("hepa", "HEPA"),
    ("rtu", "RTU"),
    ("ahu", "AHU"),
    ("mini", "Mini"),
    // "mini split" compounds to "Mini-Split" after joining
    ("split", "Split"),
];

/// Caption used when a stem reduces to nothing (e.g. digit-only names).
const FALLBACK_CAPTION: &str = "Photo";

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\-\s]+").unwrap());
static STRAY_HEPA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bHepa\b").unwrap());
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Convert a filename stem into a carousel caption.
///
/// `furnace-tuneup_2025` → `"Furnace Tune-Up"`,
/// `2024_ac_repair_01` → `"AC Repair"`,
/// `20250102` → `"Photo"`.
pub fn humanize_stem(stem: &str) -> String {
    let name = stem.replace("%20", " ");
    let mut tokens: Vec<&str> = SEPARATORS
        .split(&name)
        .filter(|t| !t.is_empty())
        .collect();

    // Digit-only tokens at either end are export/version suffixes.
    // Digits in the middle ("unit_2_replacement") are real content.
    while tokens.first().is_some_and(|t| is_all_digits(t)) {
        tokens.remove(0);
    }
    while tokens.last().is_some_and(|t| is_all_digits(t)) {
        tokens.pop();
    }

    if tokens.is_empty() {
        return FALLBACK_CAPTION.to_string();
    }

    let fixed: Vec<String> = tokens
        .iter()
        .map(|t| {
            let lower = t.to_lowercase();
            match ACRONYMS.iter().find(|(key, _)| *key == lower) {
                Some((_, display)) => (*display).to_string(),
                None => capitalize(t),
            }
        })
        .collect();

    // Compound-word fixes the per-token table can't express
    let caption = fixed.join(" ");
    let caption = caption.replace("Tuneup", "Tune-Up");
    let caption = caption.replace("Mini Split", "Mini-Split");
    let caption = STRAY_HEPA.replace_all(&caption, "HEPA");
    let caption = SPACE_RUNS.replace_all(&caption, " ");

    let caption = caption.trim();
    if caption.is_empty() {
        FALLBACK_CAPTION.to_string()
    } else {
        caption.to_string()
    }
}

/// Convert a filename stem into featured-image alt text.
///
/// Dashes and underscores become spaces, then every letter that follows
/// a non-letter is uppercased and every other letter lowercased:
/// `cozy-fireplace` → `"Cozy Fireplace"`, `NEW_unit` → `"New Unit"`.
pub fn title_case_stem(stem: &str) -> String {
    let spaced = stem.replace(['-', '_'], " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_was_letter = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }
    out
}

fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// First character uppercased, the rest lowercased.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
