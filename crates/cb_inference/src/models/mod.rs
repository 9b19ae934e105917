use std::fmt;
use std::sync::Arc;

use cb_core::{CompletionModel, GenerationConfig, Result};

pub mod dummy;
pub mod openai;
pub mod scripted;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;
pub use scripted::ScriptedModel;

/// Which backend answers completion requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModelKind {
    #[default]
    #[value(name = "openai")]
    OpenAi,
    Dummy,
}

impl ModelKind {
    pub fn requires_api_key(self) -> bool {
        matches!(self, ModelKind::OpenAi)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::OpenAi => write!(f, "openai"),
            ModelKind::Dummy => write!(f, "dummy"),
        }
    }
}

pub fn create_model(
    kind: ModelKind,
    config: &GenerationConfig,
    api_key: Option<String>,
) -> Result<Arc<dyn CompletionModel>> {
    let model: Arc<dyn CompletionModel> = match kind {
        ModelKind::OpenAi => Arc::new(OpenAiModel::new(api_key, config)?),
        ModelKind::Dummy => Arc::new(DummyModel::new()),
    };
    tracing::debug!("Created {} backend", model.name());
    Ok(model)
}
