use async_trait::async_trait;

use crate::types::CompletionRequest;
use crate::Result;

#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Short backend name, used in logs
    fn name(&self) -> &str;

    /// Send one prompt and return the trimmed text response
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
