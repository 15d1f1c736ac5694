// src/domain/post/derivation.rs
//! Field derivations run by the write path before a post reaches storage.
//!
//! Everything here is a plain function of its inputs (the current time is
//! passed in), so the rules can be exercised without a store.
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Plain-text characters kept by a derived excerpt before the ellipsis.
pub const EXCERPT_MAX_CHARS: usize = 200;
pub const ELLIPSIS: &str = "...";
/// Upper bound for an excerpt supplied by the client (column width).
pub const EXCERPT_STORAGE_MAX_CHARS: usize = 500;

const SLUG_FALLBACK: &str = "post";
/// Leaves room for the time suffix inside the 255-character slug column.
const SLUG_BASE_MAX_CHARS: usize = 240;
const SLUG_SUFFIX_MODULUS: i64 = 10_000;
const TAG_SEPARATOR: char = ',';

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("valid slug pattern"));
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^>]*>").expect("valid markup pattern"));

/// Lowercase `input`, collapse every run outside `[a-z0-9]` into one hyphen
/// and trim hyphens from both ends. May return an empty string.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Slug for a new post: the slugified title plus a coarse time suffix.
///
/// The suffix only lowers the collision rate; uniqueness is enforced by the
/// store and surfaces as a conflict.
pub fn derive_slug(title: &str, now: DateTime<Utc>) -> String {
    let slug = slugify(title);
    // slugify output is ASCII, so byte offsets are char offsets.
    let base = slug[..slug.len().min(SLUG_BASE_MAX_CHARS)].trim_end_matches('-');
    let base = if base.is_empty() { SLUG_FALLBACK } else { base };
    let suffix = now.timestamp().rem_euclid(SLUG_SUFFIX_MODULUS);
    format!("{base}-{suffix}")
}

/// Remove anything shaped like `<...>`.
pub fn strip_markup(content: &str) -> Cow<'_, str> {
    MARKUP_TAG.replace_all(content, "")
}

/// Plain-text excerpt of `content`, cut to [`EXCERPT_MAX_CHARS`] characters
/// with [`ELLIPSIS`] appended when anything was cut.
pub fn derive_excerpt(content: &str) -> String {
    let plain = strip_markup(content);
    match plain.char_indices().nth(EXCERPT_MAX_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &plain[..cut]),
        None => plain.into_owned(),
    }
}

/// Use the supplied excerpt when it has text, otherwise derive one.
pub fn resolve_excerpt(supplied: Option<&str>, content: &str) -> DomainResult<String> {
    match supplied.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) if value.chars().count() > EXCERPT_STORAGE_MAX_CHARS => {
            Err(DomainError::validation(format!(
                "excerpt must be at most {EXCERPT_STORAGE_MAX_CHARS} characters"
            )))
        }
        Some(value) => Ok(value.to_string()),
        None => Ok(derive_excerpt(content)),
    }
}

/// Trim every tag, split tags that carry a separator and drop empty entries.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .flat_map(|tag| deserialize_tags(tag.as_ref()))
        .collect()
}

pub fn serialize_tags<S: AsRef<str>>(tags: &[S]) -> String {
    normalize_tags(tags).join(",")
}

pub fn deserialize_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// `published_at` after a write: stamped with `now` the first time a post is
/// published, otherwise left as it was.
pub fn stamp_published_at(
    published: bool,
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match current {
        None if published => Some(now),
        other => other,
    }
}
