use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cb_core::{ContentPackage, Result};
use tokio::sync::RwLock;

use super::package_dir;
use crate::ArtifactStorage;

/// Keeps validated packages in process, keyed by the directory a
/// [`FileStorage`](super::FileStorage) with the same base would use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    base: PathBuf,
    packages: Arc<RwLock<HashMap<PathBuf, ContentPackage>>>,
}

impl MemoryStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            packages: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, dir: &Path) -> Option<ContentPackage> {
        self.packages.read().await.get(dir).cloned()
    }

    pub async fn len(&self) -> usize {
        self.packages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ArtifactStorage for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    async fn store_package(&self, package: &ContentPackage) -> Result<PathBuf> {
        let dir = package_dir(&self.base, package)?;
        self.packages.write().await.insert(dir.clone(), package.clone());
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::test_support::sample_package;

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryStorage::new("outputs");
        assert!(storage.is_empty().await);

        let package = sample_package();
        let dir = storage.store_package(&package).await.unwrap();
        assert_eq!(dir, PathBuf::from("outputs/2024-01-02/lean-crm"));
        assert_eq!(storage.get(&dir).await, Some(package.clone()));

        // Same slug and date overwrite.
        storage.store_package(&package).await.unwrap();
        assert_eq!(storage.len().await, 1);
    }

    #[tokio::test]
    async fn test_rejects_invalid_meta() {
        let storage = MemoryStorage::new("outputs");
        let mut package = sample_package();
        package.meta.keywords.truncate(4);
        assert!(storage.store_package(&package).await.is_err());
        assert!(storage.is_empty().await);
    }
}
