pub mod config;
pub mod error;
pub mod models;
pub mod paths;
pub mod types;
pub mod validation;

pub use config::{AppConfig, GenerationConfig};
pub use error::{Error, Result};
pub use models::CompletionModel;
pub use paths::{get_output_dir, is_slug, slugify};
pub use types::{CompletionRequest, ContentPackage, GenerationRequest, Meta, TopicIdea};
pub use validation::{validate_meta_value, Violation};

pub mod prelude {
    pub use super::{
        AppConfig, CompletionModel, CompletionRequest, ContentPackage, Error, GenerationRequest,
        Meta, Result, TopicIdea,
    };
}
