use crate::{
    error::GenerationError,
    models::{GeneratedImage, GenerationRequest},
};
use async_trait::async_trait;

/// Turns prompt text into the language the image service understands.
/// Implementations always resolve to some string.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> String;
}

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GeneratedImage, GenerationError>;
}
