use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::StepCount;
use crate::error::Result;

pub const IMAGE_MIME: &str = "image/png";
pub const SAVE_FILE_NAME: &str = "generated-image.png";

/// Body sent to the image endpoint: `{"prompt": ..., "steps": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub steps: StepCount,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, steps: StepCount) -> Self {
        Self {
            prompt: prompt.into(),
            steps,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    pub image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageErrorBody {
    pub error: Option<String>,
}

/// Base64 image payload as returned by the service, without a data-URI
/// prefix. Always treated as PNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub data: String,
}

impl GeneratedImage {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", IMAGE_MIME, self.data)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(self.data.trim())?)
    }

    /// Decodes and writes the image to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let bytes = self.decode()?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Writes the image as `generated-image.png` inside `dir`.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(SAVE_FILE_NAME);
        self.save_to(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudioError;
    use serde_json::json;

    const PNG_MAGIC_B64: &str = "iVBORw0KGgo=";

    #[test]
    fn test_request_body_shape() {
        let body =
            serde_json::to_value(GenerationRequest::new("black panther", StepCount::clamped(6)))
                .unwrap();
        assert_eq!(body, json!({"prompt": "black panther", "steps": 6}));
    }

    #[test]
    fn test_data_uri_prefix() {
        let image = GeneratedImage::new("iVBORw0K");
        assert_eq!(image.data_uri(), "data:image/png;base64,iVBORw0K");
    }

    #[test]
    fn test_decode_png_magic() {
        let bytes = GeneratedImage::new(PNG_MAGIC_B64).decode().unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = GeneratedImage::new("not base64!!").decode().unwrap_err();
        assert!(matches!(err, StudioError::DecodeError(_)));
    }

    #[test]
    fn test_save_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = GeneratedImage::new(PNG_MAGIC_B64).save_in(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), SAVE_FILE_NAME);
        assert_eq!(fs::read(&path).unwrap().len(), 8);
    }

    #[test]
    fn test_error_body_is_optional() {
        let body: ImageErrorBody = serde_json::from_value(json!({})).unwrap();
        assert!(body.error.is_none());
        let body: ImageErrorBody = serde_json::from_value(json!({"error": "nsfw"})).unwrap();
        assert_eq!(body.error.as_deref(), Some("nsfw"));
    }
}
