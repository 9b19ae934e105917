use lazy_static::lazy_static;
use regex::Regex;

use cb_core::validation::KEYWORD_COUNT;

pub const FALLBACK_KEYWORDS: [&str; 5] = [
    "content systems",
    "AI automation",
    "digital marketing",
    "CRM workflows",
    "operations",
];

lazy_static! {
    static ref KEYWORDS_LINE: Regex = Regex::new(r"SEO Keywords:\s*(.+)").unwrap();
    static ref DESCRIPTION_LINE: Regex = Regex::new(r"Meta Description:\s*(.+)").unwrap();
    static ref SOCIAL_SECTION: Regex = Regex::new(r"(?s)Social Snippets:\s*(.*)").unwrap();
    static ref KEYWORD_SEPARATOR: Regex = Regex::new(r"[,;]").unwrap();
}

/// First five keywords and the meta description, if labelled in the text.
pub fn extract_meta(article: &str) -> (Vec<String>, String) {
    let keywords = KEYWORDS_LINE
        .captures(article)
        .map(|c| {
            KEYWORD_SEPARATOR
                .split(&c[1])
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .take(KEYWORD_COUNT)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let description = DESCRIPTION_LINE
        .captures(article)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();
    (keywords, description)
}

/// Everything after the `Social Snippets:` label, or empty.
pub fn extract_social(article: &str) -> String {
    SOCIAL_SECTION
        .captures(article)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default()
}

pub fn fallback_keywords() -> Vec<String> {
    FALLBACK_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
