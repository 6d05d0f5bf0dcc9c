//! Turning titles into file name friendly identifiers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Used when nothing is left of the title.
pub const FALLBACK_SLUG: &str = "book";

// letters, numbers and the ASCII underscore only; `\w` would also keep marks, joiners and
// other connector punctuation such as `＿`
static NOT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s-]").expect("Slug pattern should always be valid"));
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("Slug pattern should always be valid"));
static EDGE_HYPHENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-+|-+$").expect("Slug pattern should always be valid"));

/// Normalizes `s` into a lowercase, hyphen delimited slug.
///
/// Unicode letters and digits are kept as they are (after lowercasing) so titles in any script
/// still produce a meaningful slug. Anything else other than whitespace, hyphens and underscores
/// is dropped, and each run of those separators becomes a single hyphen. Returns
/// [`FALLBACK_SLUG`] when the result would otherwise be empty.
///
/// # Examples
///
/// ```
/// assert_eq!("the-left-hand-of-darkness", bookpost::slugify("  The Left Hand of Darkness "));
/// assert_eq!("book", bookpost::slugify("?!"));
/// ```
#[must_use]
pub fn slugify(s: &str) -> String {
    let lower = s.trim().to_lowercase();
    let kept = NOT_WORD.replace_all(&lower, "");
    let hyphenated = SEPARATORS.replace_all(&kept, "-");
    let slug = EDGE_HYPHENS.replace_all(&hyphenated, "");

    if slug.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        slug.into_owned()
    }
}
