use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cb_core::{ContentPackage, Result};
use tokio::fs;
use tracing::debug;

use super::package_dir;
use crate::{ArtifactStorage, ARTICLE_FILE, META_FILE, SOCIAL_FILE};

/// Writes `article.md`, `social.md` and `meta.json` as UTF-8 files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

#[async_trait]
impl ArtifactStorage for FileStorage {
    fn name(&self) -> &str {
        "file"
    }

    async fn store_package(&self, package: &ContentPackage) -> Result<PathBuf> {
        let dir = package_dir(&self.base, package)?;
        fs::create_dir_all(&dir).await?;

        let meta = serde_json::to_string_pretty(&package.meta)?;
        fs::write(dir.join(ARTICLE_FILE), &package.article).await?;
        fs::write(dir.join(SOCIAL_FILE), &package.social).await?;
        fs::write(dir.join(META_FILE), meta).await?;
        debug!("Wrote {}, {} and {} to {}", ARTICLE_FILE, SOCIAL_FILE, META_FILE, dir.display());
        Ok(dir)
    }
}
