use cb_core::config::{
    AppConfig, AuthorConfig, CompanyConfig, ContentConfig, GenerationConfig, StyleConfig,
    DEFAULT_BASE_URL,
};
use cb_core::GenerationRequest;

pub const SAMPLE_DESCRIPTION: &str = "Learn how small agencies can replace scattered spreadsheets with a lean CRM workflow, cut manual follow ups and keep each client conversation in one place.";

pub const SAMPLE_ARTICLE: &str = "# Lean CRM for agencies
## Hook
Opening hook.
## Context
Context section.
## Section One
Details one.
## Section Two
Details two.
## Section Three
Details three.
## What to do next
- Do this
- Do that
## Conclusion
Wrap-up.
SEO Keywords: lean CRM, agency operations, client follow up, sales pipeline, workflow automation
Meta Description: Learn how small agencies can replace scattered spreadsheets with a lean CRM workflow, cut manual follow ups and keep each client conversation in one place.
Social Snippets:
LinkedIn: One CRM, one inbox, zero lost leads.
Facebook: Still chasing clients across spreadsheets?
Instagram: Fewer tabs, more clients.";

pub fn sample_config() -> AppConfig {
    AppConfig {
        company: CompanyConfig {
            name: "Evolvra".to_string(),
            description: "Systems studio for service businesses.".to_string(),
        },
        author: AuthorConfig {
            bio: "Operator and writer.".to_string(),
        },
        style: StyleConfig {
            tone_rules: "Plain words, short sentences.".to_string(),
            banned_phrases: vec!["game changer".to_string(), "unlock".to_string()],
        },
        content: ContentConfig {
            pillars: vec!["AI automation".to_string(), "CRM workflows".to_string()],
        },
        generation: GenerationConfig {
            model: "gpt-4.1-mini".to_string(),
            temperature: 0.7,
            max_output_tokens: 2500,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        },
    }
}

pub fn sample_request() -> GenerationRequest {
    GenerationRequest {
        topic: "Lean CRM for agencies".to_string(),
        audience: "Agency owners".to_string(),
        platform: "linkedin".to_string(),
        target_words: 1200,
        tone: "smart, friendly, practical".to_string(),
    }
}
