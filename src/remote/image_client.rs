use crate::{
    config::ImageConfig,
    error::{GenerationError, Result, StudioError},
    logger,
    models::{GeneratedImage, GenerationRequest, ImageErrorBody, ImageResponse},
    remote::traits::ImageGenerator,
};
use async_trait::async_trait;
use reqwest::Client;

pub const GENERIC_FAILURE_MESSAGE: &str = "image generation failed";

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: ImageConfig,
}

impl ImageClient {
    pub fn new(config: ImageConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("promptgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StudioError::ClientError(e.to_string()))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: ImageConfig) -> Self {
        Self { client, config }
    }

    async fn exchange(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GeneratedImage, GenerationError> {
        let response = self
            .client
            .post(&self.config.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout(self.config.timeout)
                } else {
                    GenerationError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        log::debug!("Image API responded with HTTP {}", status);

        if !status.is_success() {
            // The error body is optional; anything unreadable gets the generic message.
            let body: ImageErrorBody = response.json().await.unwrap_or_default();
            log::error!("Image API error body: {:?}", body);
            return Err(GenerationError::Rejected {
                status: status.as_u16(),
                message: body
                    .error
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            });
        }

        let body: ImageResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;
        log::debug!("Image payload received: {} base64 chars", body.image.len());

        Ok(GeneratedImage::new(body.image))
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GeneratedImage, GenerationError> {
        let _timer = logger::timer("generate");
        log::info!(
            "Generating image: prompt='{}', steps={}",
            request.prompt,
            request.steps
        );

        tokio::time::timeout(self.config.timeout, self.exchange(request))
            .await
            .map_err(|_| GenerationError::Timeout(self.config.timeout))?
    }
}
