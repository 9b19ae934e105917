//! Outline, article, self-check, optional revision, extraction.
//!
//! One pass per request costs two or three backend calls: outline, article,
//! and a single revision only when the self-check reports problems. The
//! revised text is final; it is not checked again.

use std::fmt;
use std::sync::Arc;

use cb_core::{AppConfig, CompletionModel, ContentPackage, GenerationRequest, Meta, Result};
use tracing::{debug, info, warn};

pub mod check;
pub mod extract;
pub mod prompts;

pub use check::{validate_article_structure, SelfCheck, REQUIRED_HEADINGS};
pub use extract::{extract_meta, extract_social, fallback_keywords, FALLBACK_KEYWORDS};

pub struct ContentWriter {
    model: Arc<dyn CompletionModel>,
    config: Arc<AppConfig>,
    self_check: SelfCheck,
}

impl fmt::Debug for ContentWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentWriter")
            .field("model", &self.model.name())
            .field("company", &self.config.company.name)
            .finish()
    }
}

impl ContentWriter {
    pub fn new(model: Arc<dyn CompletionModel>, config: Arc<AppConfig>) -> Self {
        let self_check = SelfCheck::for_brand(&config.company.name);
        Self {
            model,
            config,
            self_check,
        }
    }

    async fn request_completion(&self, prompt: String) -> Result<String> {
        let request = self.config.generation.request(prompt);
        let text = self.model.complete(&request).await?;
        Ok(text.trim().to_string())
    }

    pub async fn generate_outline(&self, request: &GenerationRequest) -> Result<String> {
        info!("🗒️ Outlining: {}", request.topic);
        self.request_completion(prompts::outline_prompt(&self.config, request))
            .await
    }

    pub async fn generate_article(&self, request: &GenerationRequest, outline: &str) -> Result<String> {
        info!("✍️ Writing article: {}", request.topic);
        self.request_completion(prompts::article_prompt(&self.config, request, outline))
            .await
    }

    pub fn self_check(&self, article: &str) -> Vec<String> {
        self.self_check.run(article)
    }

    pub async fn revise_article(&self, article: &str, errors: &[String]) -> Result<String> {
        info!("🔧 Revising article to fix {} issue(s)", errors.len());
        self.request_completion(prompts::revision_prompt(article, errors))
            .await
    }

    /// Article, social snippets and metadata for one request.
    ///
    /// `meta.slug` and `meta.date` are left empty for the caller to stamp.
    pub async fn generate_package(&self, request: &GenerationRequest) -> Result<ContentPackage> {
        let outline = self.generate_outline(request).await?;
        let mut article = self.generate_article(request, &outline).await?;

        let errors = self.self_check(&article);
        if errors.is_empty() {
            debug!("Self-check passed");
        } else {
            for error in &errors {
                warn!("Self-check: {}", error);
            }
            article = self.revise_article(&article, &errors).await?;
        }

        let (keywords, description) = extract_meta(&article);
        let social = extract_social(&article);
        debug!(
            "Extracted {} keywords, {} char description, {} char social section",
            keywords.len(),
            description.chars().count(),
            social.chars().count()
        );

        let keywords = if keywords.is_empty() {
            fallback_keywords()
        } else {
            keywords
        };
        let meta = Meta {
            title: request.topic.clone(),
            keywords,
            description,
            platform: request.platform.clone(),
            slug: String::new(),
            date: String::new(),
        };
        Ok(ContentPackage {
            article,
            social,
            meta,
        })
    }
}
