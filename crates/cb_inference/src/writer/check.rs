use lazy_static::lazy_static;
use regex::Regex;

pub const REQUIRED_HEADINGS: [&str; 5] = ["# ", "## Hook", "## Context", "## What to do next", "## Conclusion"];
pub const SECTION_MARKER: &str = "## ";
pub const MIN_SECTIONS: usize = 6;

/// The em dash and its UTF-8-read-as-Latin-1 form.
pub const BANNED_DASHES: [&str; 2] = ["\u{2014}", "\u{e2}\u{20ac}\u{201d}"];

const CLAIM_SUBJECTS: &str = r"we|our team";
const CLAIM_VERBS: &str = r"achieved|increased|grew|boosted";

lazy_static! {
    static ref GENERIC_CLAIM: Regex = Regex::new(&claim_source(CLAIM_SUBJECTS)).unwrap();
}

fn claim_source(subjects: &str) -> String {
    format!(r"(?i)\b({})\b.*\b({})\b.*\d+%", subjects, CLAIM_VERBS)
}

fn brand_claim(brand: &str) -> Regex {
    let brand = brand.trim();
    if brand.is_empty() {
        return GENERIC_CLAIM.clone();
    }
    let subjects = format!("{}|{}", CLAIM_SUBJECTS, regex::escape(brand));
    Regex::new(&claim_source(&subjects)).unwrap_or_else(|_| GENERIC_CLAIM.clone())
}

/// Deterministic structural checks run over a generated article.
#[derive(Debug, Clone)]
pub struct SelfCheck {
    claim: Regex,
}

impl Default for SelfCheck {
    fn default() -> Self {
        Self {
            claim: GENERIC_CLAIM.clone(),
        }
    }
}

impl SelfCheck {
    /// Also treat `brand` as a first-person subject in claim detection.
    pub fn for_brand(brand: &str) -> Self {
        Self {
            claim: brand_claim(brand),
        }
    }

    /// Human-readable problems; empty means the article passes.
    pub fn run(&self, article: &str) -> Vec<String> {
        let mut errors = Vec::new();
        if BANNED_DASHES.iter().any(|dash| article.contains(dash)) {
            errors.push("Contains em dash.".to_string());
        }
        for heading in REQUIRED_HEADINGS {
            if !article.contains(heading) {
                errors.push(format!("Missing heading: {}", heading));
            }
        }
        if article.matches(SECTION_MARKER).count() < MIN_SECTIONS {
            errors.push("Not enough section headings.".to_string());
        }
        if !article.contains("- [ ]") && !article.contains("- ") {
            errors.push("Checklist missing.".to_string());
        }
        // Heuristic: flags first-person percentage claims, true or not.
        if self.claim.is_match(article) {
            errors.push("Potential fabricated percentage claim.".to_string());
        }
        errors
    }
}

/// Self-check without any brand-specific claim pattern.
pub fn validate_article_structure(article: &str) -> Vec<String> {
    SelfCheck::default().run(article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SAMPLE_ARTICLE;

    #[test]
    fn test_complete_article_passes() {
        assert!(validate_article_structure(SAMPLE_ARTICLE).is_empty());
        assert!(SelfCheck::for_brand("Evolvra").run(SAMPLE_ARTICLE).is_empty());
    }

    #[test]
    fn test_each_missing_heading_is_reported() {
        for heading in &REQUIRED_HEADINGS[1..] {
            let article = SAMPLE_ARTICLE.replace(heading, "## Other");
            let errors = validate_article_structure(&article);
            assert!(
                errors.contains(&format!("Missing heading: {}", heading)),
                "{} not reported: {:?}",
                heading,
                errors
            );
        }
    }

    #[test]
    fn test_missing_title_marker_is_reported() {
        let article = "Title\n\
            ##Hook\n##Context\n##What to do next\n##Conclusion\n- item";
        let errors = validate_article_structure(article);
        assert!(errors.contains(&"Missing heading: # ".to_string()));
    }

    #[test]
    fn test_too_few_sections() {
        let article = "# Title\n## Hook\n## Context\n## What to do next\n- a\n## Conclusion\n";
        assert_eq!(
            validate_article_structure(article),
            vec!["Not enough section headings.".to_string()]
        );
    }

    #[test]
    fn test_exactly_min_sections_passes() {
        let article = "# Title\n## Hook\n## Context\n## One\n## Two\n## What to do next\n- a\n## Conclusion\n";
        assert_eq!(article.matches(SECTION_MARKER).count(), MIN_SECTIONS);
        assert!(validate_article_structure(article).is_empty());
    }

    #[test]
    fn test_em_dash_toggles_error() {
        let with_dash = SAMPLE_ARTICLE.replace("Opening hook.", "Opening hook \u{2014} sharp.");
        assert_eq!(
            validate_article_structure(&with_dash),
            vec!["Contains em dash.".to_string()]
        );

        let mojibake = SAMPLE_ARTICLE.replace("Opening hook.", "Opening hook \u{e2}\u{20ac}\u{201d} sharp.");
        assert_eq!(
            validate_article_structure(&mojibake),
            vec!["Contains em dash.".to_string()]
        );

        let en_dash = SAMPLE_ARTICLE.replace("Opening hook.", "Opening hook \u{2013} sharp.");
        assert!(validate_article_structure(&en_dash).is_empty());
    }

    #[test]
    fn test_checklist_required() {
        let article = SAMPLE_ARTICLE.replace("- ", "* ");
        assert_eq!(
            validate_article_structure(&article),
            vec!["Checklist missing.".to_string()]
        );
    }

    #[test]
    fn test_fabricated_claims() {
        let team = SAMPLE_ARTICLE.replace("Details one.", "Our team increased leads by 40% last quarter.");
        assert_eq!(
            validate_article_structure(&team),
            vec!["Potential fabricated percentage claim.".to_string()]
        );

        let brand = SAMPLE_ARTICLE.replace("Details one.", "Evolvra boosted retention to 25%.");
        assert!(validate_article_structure(&brand).is_empty());
        assert_eq!(
            SelfCheck::for_brand("Evolvra").run(&brand),
            vec!["Potential fabricated percentage claim.".to_string()]
        );

        // Claims do not span lines.
        let split = SAMPLE_ARTICLE.replace("Details one.", "We grew fast.\nAbout 30% of teams agree.");
        assert!(validate_article_structure(&split).is_empty());
    }

    #[test]
    fn test_brand_is_escaped() {
        let check = SelfCheck::for_brand("A+B Labs");
        assert!(check.run("A+B Labs achieved 10%").iter().any(|e| e.contains("fabricated")));
    }
}
