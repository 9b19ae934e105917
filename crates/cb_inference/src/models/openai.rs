use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use cb_core::{CompletionModel, CompletionRequest, Error, GenerationConfig, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl ResponsesResponse {
    /// All `output_text` parts, in order.
    fn output_text(&self) -> String {
        self.output
            .iter()
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .map(|part| part.text.as_str())
            .collect()
    }
}

/// Client for the hosted Responses endpoint.
pub struct OpenAiModel {
    client: Arc<Client>,
    api_key: String,
    endpoint: Url,
}

impl OpenAiModel {
    pub fn new(api_key: Option<String>, config: &GenerationConfig) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Inference("OpenAI API key is required".to_string()))?;
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client: Arc::new(client),
            api_key,
            endpoint: config.endpoint("responses")?,
        })
    }
}

impl fmt::Debug for OpenAiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

#[async_trait]
impl CompletionModel for OpenAiModel {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ResponsesRequest {
            model: &request.model,
            input: &request.prompt,
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
        };
        tracing::debug!(
            "Sending {} prompt chars to {} ({})",
            request.prompt.chars().count(),
            self.endpoint,
            request.model
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<ResponsesResponse>()
            .await?;

        let text = response.output_text().trim().to_string();
        if text.is_empty() {
            return Err(Error::Inference(format!(
                "{} returned no output text",
                request.model
            )));
        }
        Ok(text)
    }
}
