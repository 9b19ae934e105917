use std::path::PathBuf;
use std::sync::Arc;

use cb_core::{slugify, AppConfig, CompletionModel, GenerationRequest, Result};
use cb_inference::{generate_topics, ContentWriter};
use cb_storage::ArtifactStorage;
use chrono::NaiveDate;
use tracing::{info, warn};

/// Wires the writer, topic generator and storage for one run.
///
/// Items run one after another; the first failing item aborts the run.
pub struct Runner {
    config: Arc<AppConfig>,
    model: Arc<dyn CompletionModel>,
    writer: ContentWriter,
    storage: Arc<dyn ArtifactStorage>,
    date: NaiveDate,
}

impl Runner {
    pub fn new(
        config: Arc<AppConfig>,
        model: Arc<dyn CompletionModel>,
        storage: Arc<dyn ArtifactStorage>,
        date: NaiveDate,
    ) -> Self {
        let writer = ContentWriter::new(model.clone(), config.clone());
        Self {
            config,
            model,
            writer,
            storage,
            date,
        }
    }

    /// Generate, stamp, validate and store one article.
    pub async fn run_item(&self, request: &GenerationRequest) -> Result<PathBuf> {
        let mut package = self.writer.generate_package(request).await?;
        package.meta.stamp(slugify(&request.topic), self.date);
        package.meta.validate()?;

        let dir = self.storage.store_package(&package).await?;
        info!("📦 Saved \"{}\" to {}", request.topic, dir.display());
        Ok(dir)
    }

    pub async fn run_single(&self, request: &GenerationRequest) -> Result<PathBuf> {
        self.run_item(request).await
    }

    /// Generate `count` topic ideas, then one article per idea.
    pub async fn run_calendar(&self, template: &GenerationRequest, count: usize) -> Result<Vec<PathBuf>> {
        let topics = generate_topics(
            self.model.clone(),
            &self.config.generation,
            &self.config.content.pillars,
            count,
        )
        .await?;
        if topics.is_empty() {
            warn!("No topics generated; nothing to do");
            return Ok(Vec::new());
        }

        let mut written = Vec::with_capacity(topics.len());
        for (i, idea) in topics.iter().enumerate() {
            info!("🗓️ [{}/{}] {} ({})", i + 1, topics.len(), idea.title, idea.angle);
            written.push(self.run_item(&template.with_topic(idea.title.clone())).await?);
        }
        Ok(written)
    }
}
