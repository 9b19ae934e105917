pub mod models;
pub mod topics;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use models::{create_model, ModelKind};
pub use topics::{generate_topics, parse_topics, TopicParse};
pub use writer::{validate_article_structure, ContentWriter, SelfCheck};

pub mod prelude {
    pub use super::models::create_model;
    pub use super::writer::ContentWriter;
    pub use cb_core::{AppConfig, ContentPackage, Error, GenerationRequest, Result};
}
