pub mod image_client;
pub mod traits;
pub mod translation_client;

use crate::{config::StudioConfig, error::Result};
use std::sync::Arc;

pub use image_client::ImageClient;
pub use traits::{ImageGenerator, Translator};
pub use translation_client::TranslationClient;

/// Both outbound clients, built from one config.
#[derive(Clone)]
pub struct RemoteClients {
    translation_client: TranslationClient,
    image_client: ImageClient,
}

impl RemoteClients {
    pub fn new(config: &StudioConfig) -> Result<Self> {
        Ok(Self {
            translation_client: TranslationClient::new(config.translator.clone())?,
            image_client: ImageClient::new(config.image.clone())?,
        })
    }

    pub fn into_parts(self) -> (Arc<dyn Translator>, Arc<dyn ImageGenerator>) {
        (
            Arc::new(self.translation_client),
            Arc::new(self.image_client),
        )
    }
}
