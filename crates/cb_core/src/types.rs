use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input to one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub audience: String,
    pub platform: String,
    pub target_words: u32,
    pub tone: String,
}

impl GenerationRequest {
    /// Same audience, platform, length and tone, different topic.
    pub fn with_topic(&self, topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..self.clone()
        }
    }
}

/// One backend call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

/// Metadata written next to every article as `meta.json`.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub title: String,
    pub keywords: Vec<String>,
    pub description: String,
    pub platform: String,
    pub slug: String,
    pub date: String,
}

impl Meta {
    /// Fill in the fields owned by the orchestrator rather than the writer.
    pub fn stamp(&mut self, slug: impl Into<String>, date: NaiveDate) {
        self.slug = slug.into();
        self.date = date.format("%Y-%m-%d").to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicIdea {
    pub title: String,
    pub angle: String,
}

/// Everything produced for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPackage {
    pub article: String,
    pub social: String,
    pub meta: Meta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_sets_slug_and_iso_date() {
        let mut meta = Meta {
            title: "My Topic".to_string(),
            keywords: vec![],
            description: String::new(),
            platform: "linkedin".to_string(),
            slug: String::new(),
            date: String::new(),
        };
        meta.stamp("my-topic", NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(meta.slug, "my-topic");
        assert_eq!(meta.date, "2024-01-02");
    }

    #[test]
    fn test_with_topic_keeps_other_fields() {
        let base = GenerationRequest {
            topic: "First".to_string(),
            audience: "Owners".to_string(),
            platform: "linkedin".to_string(),
            target_words: 900,
            tone: "plain".to_string(),
        };
        let next = base.with_topic("Second");
        assert_eq!(next.topic, "Second");
        assert_eq!(next.audience, base.audience);
        assert_eq!(next.target_words, 900);
    }
}
