use crate::{
    config::TranslatorConfig,
    error::{Result, StudioError, TranslationError},
    logger,
    lookup::lookup_translate,
    models::{TranslationEnvelope, TranslationRequest},
    remote::traits::Translator,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct TranslationClient {
    client: Client,
    config: TranslatorConfig,
}

impl TranslationClient {
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("promptgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StudioError::ClientError(e.to_string()))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: TranslatorConfig) -> Self {
        Self { client, config }
    }

    /// Translates `text`, waiting at most `timeout` for the service. Any
    /// failure falls back to the lookup table on the untranslated text.
    pub async fn translate_with_timeout(&self, text: &str, timeout: Duration) -> String {
        let _timer = logger::timer("translate");

        match self.request(text, timeout).await {
            Ok(translated) => {
                log::debug!("Remote translation: '{}' -> '{}'", text, translated);
                translated
            }
            Err(e) => {
                log::warn!("Translation failed, using fallback dictionary: {}", e);
                lookup_translate(text)
            }
        }
    }

    async fn request(
        &self,
        text: &str,
        timeout: Duration,
    ) -> std::result::Result<String, TranslationError> {
        // Dropping the exchange future on expiry aborts the in-flight request.
        tokio::time::timeout(timeout, self.exchange(text))
            .await
            .map_err(|_| TranslationError::Timeout(timeout))?
    }

    async fn exchange(&self, text: &str) -> std::result::Result<String, TranslationError> {
        let payload = TranslationRequest {
            text,
            source_lang: &self.config.source_lang,
            target_lang: &self.config.target_lang,
        };

        let response = self
            .client
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Status(status.as_u16()));
        }

        let envelope: TranslationEnvelope = response
            .json()
            .await
            .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;
        Ok(envelope.response.translated_text)
    }
}

#[async_trait]
impl Translator for TranslationClient {
    async fn translate(&self, text: &str) -> String {
        self.translate_with_timeout(text, self.config.timeout).await
    }
}
