use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Used when nothing slug-safe survives cleaning.
pub const EMPTY_SLUG: &str = "untitled";

lazy_static! {
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^a-zA-Z0-9\s-]").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[\s-]+").unwrap();
    static ref SLUG_SHAPE: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
}

/// Whether `slug` is a single path segment of the form [`slugify`] produces.
pub fn is_slug(slug: &str) -> bool {
    SLUG_SHAPE.is_match(slug)
}

/// Turn free text into a lowercase, hyphen-separated identifier.
///
/// Characters outside ASCII letters, digits, whitespace and `-` are dropped,
/// then runs of whitespace and hyphens collapse into a single `-`.
pub fn slugify(text: &str) -> String {
    let cleaned = UNSAFE_CHARS.replace_all(text, "");
    let cleaned = cleaned.trim().to_lowercase();
    let slug = SEPARATORS.replace_all(&cleaned, "-");
    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug.into_owned()
    }
}

/// `<base>/<YYYY-MM-DD>[/<slug(topic)>]`
pub fn get_output_dir(base: impl AsRef<Path>, topic: Option<&str>, date: NaiveDate) -> PathBuf {
    let dated = base.as_ref().join(date.format("%Y-%m-%d").to_string());
    match topic {
        Some(topic) if !topic.is_empty() => dated.join(slugify(topic)),
        _ => dated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_slug_safe(slug: &str) -> bool {
        !slug.is_empty()
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World!"), "hello-world");
        assert_eq!(slugify("  CRM   workflows -- for SMBs "), "crm-workflows-for-smbs");
        assert_eq!(slugify("Café déjà vu"), "caf-dj-vu");
    }

    #[test]
    fn test_slugify_falls_back_for_punctuation() {
        assert_eq!(slugify("!!!"), EMPTY_SLUG);
        assert_eq!(slugify(""), EMPTY_SLUG);
        assert_eq!(slugify("   "), EMPTY_SLUG);
        assert_eq!(slugify("🚀✨"), EMPTY_SLUG);
    }

    #[test]
    fn test_slugify_is_idempotent_and_safe() {
        let inputs = [
            "Hello World!",
            "-leading and trailing-",
            "Tabs\tand\nnewlines",
            "AI automation: 5 ideas (2024)",
            "émoji 🚀 mixed_with_underscores",
            "---",
            "a - b",
        ];
        for input in inputs {
            let once = slugify(input);
            assert!(is_slug_safe(&once), "unsafe slug {:?} for {:?}", once, input);
            assert!(is_slug(&once));
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_is_slug_rejects_path_like_values() {
        assert!(is_slug("lean-crm-2024"));
        for bad in ["", "Lean-CRM", "lean crm", "../etc", "a/b", "caf\u{e9}"] {
            assert!(!is_slug(bad), "{:?} accepted", bad);
        }
    }

    #[test]
    fn test_output_dir_composition() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let output = get_output_dir("outputs", Some("My Topic"), date);
        assert!(output.ends_with("outputs/2024-01-02/my-topic"));
        assert_eq!(output, PathBuf::from("outputs").join("2024-01-02").join("my-topic"));
    }

    #[test]
    fn test_output_dir_without_topic() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(get_output_dir("out", None, date), PathBuf::from("out/2024-01-02"));
        assert_eq!(get_output_dir("out", Some(""), date), PathBuf::from("out/2024-01-02"));
    }
}
