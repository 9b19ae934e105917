//! Ranked topic ideas from the configured content pillars.

use std::sync::Arc;

use cb_core::{CompletionModel, CompletionRequest, Error, GenerationConfig, Result, TopicIdea};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info, warn};

pub const TOPICS_MARKER: &str = "content topic ideas";
pub const TOPICS_MAX_OUTPUT_TOKENS: u32 = 600;
pub const UNTITLED_TOPIC: &str = "Untitled topic";

lazy_static! {
    static ref JSON_OBJECT: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// Outcome of reading topics out of free-form model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicParse {
    Parsed(Vec<TopicIdea>),
    /// No JSON object anywhere in the response.
    Empty,
}

impl TopicParse {
    pub fn into_topics(self) -> Vec<TopicIdea> {
        match self {
            TopicParse::Parsed(topics) => topics,
            TopicParse::Empty => Vec::new(),
        }
    }
}

pub fn topics_prompt(pillars: &[String], count: usize) -> String {
    format!(
        "Generate a ranked list of {count} {marker}.\n\
         Pillars: {pillars}\n\
         \n\
         Return JSON only in this format:\n\
         {{\n  \"topics\": [\n    {{\"title\": \"...\", \"angle\": \"...\"}}\n  ]\n}}\n\
         Keep angles short and practical.\n\
         Avoid em dashes.\n",
        count = count,
        marker = TOPICS_MARKER,
        pillars = pillars.join(", "),
    )
}

/// Parse the whole response as JSON, falling back to the outermost
/// `{...}` span when the model wrapped the object in prose or fences.
///
/// A span that is found but is not valid JSON is an error.
pub fn parse_topics(raw: &str) -> Result<TopicParse> {
    let raw = raw.trim();
    let payload = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(_) => {
            let Some(found) = JSON_OBJECT.find(raw) else {
                return Ok(TopicParse::Empty);
            };
            serde_json::from_str::<Value>(found.as_str())
                .map_err(|e| Error::TopicParse(format!("embedded JSON is invalid: {}", e)))?
        }
    };

    let Some(object) = payload.as_object() else {
        return Ok(TopicParse::Empty);
    };
    let topics = object
        .get("topics")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(topic_from_value).collect())
        .unwrap_or_default();
    Ok(TopicParse::Parsed(topics))
}

/// Lenient conversion: strings as-is, other values as their JSON text.
fn topic_from_value(value: &Value) -> Option<TopicIdea> {
    let entry = value.as_object()?;
    let field = |key: &str| match entry.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };
    Some(TopicIdea {
        title: field("title").unwrap_or_else(|| UNTITLED_TOPIC.to_string()),
        angle: field("angle").unwrap_or_default(),
    })
}

/// Ask the backend for `count` ideas. An unparseable answer yields no ideas.
pub async fn generate_topics(
    model: Arc<dyn CompletionModel>,
    generation: &GenerationConfig,
    pillars: &[String],
    count: usize,
) -> Result<Vec<TopicIdea>> {
    info!("💡 Generating {} topic ideas from {} pillars", count, pillars.len());
    let request = CompletionRequest {
        model: generation.model.clone(),
        prompt: topics_prompt(pillars, count),
        temperature: generation.temperature,
        max_output_tokens: TOPICS_MAX_OUTPUT_TOKENS,
    };
    let raw = model.complete(&request).await?;
    match parse_topics(&raw)? {
        TopicParse::Parsed(topics) => {
            debug!("Parsed {} topics", topics.len());
            Ok(topics)
        }
        TopicParse::Empty => {
            warn!("No JSON object found in topic response");
            Ok(Vec::new())
        }
    }
}
