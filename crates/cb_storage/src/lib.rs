use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use cb_core::{ContentPackage, Error, Result};

pub mod backends;

pub use backends::*;

pub const ARTICLE_FILE: &str = "article.md";
pub const SOCIAL_FILE: &str = "social.md";
pub const META_FILE: &str = "meta.json";

#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    fn name(&self) -> &str;

    /// Persist one package under `<base>/<date>/<slug>` and return that directory.
    ///
    /// Implementations refuse packages whose metadata does not validate.
    async fn store_package(&self, package: &ContentPackage) -> Result<PathBuf>;
}

/// `file` writes to disk under `base`; `memory` keeps packages in process.
pub fn create_storage(kind: &str, base: impl Into<PathBuf>) -> Result<Arc<dyn ArtifactStorage>> {
    let base = base.into();
    match kind {
        "file" => Ok(Arc::new(FileStorage::new(base))),
        "memory" => Ok(Arc::new(MemoryStorage::new(base))),
        other => Err(Error::Storage(format!("Unknown storage backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, ArtifactStorage};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_storage() {
        assert_eq!(create_storage("file", "outputs").unwrap().name(), "file");
        assert_eq!(create_storage("memory", "outputs").unwrap().name(), "memory");
        assert!(create_storage("s3", "outputs").is_err());
    }
}
