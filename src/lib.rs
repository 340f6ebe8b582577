//! Prompt-to-image client: translate a prompt (with an offline dictionary
//! fallback), send it to an image-generation endpoint, keep the result.

pub mod config;
pub mod error;
pub mod logger;
pub mod lookup;
pub mod models;
pub mod remote;
pub mod ui;
pub mod workflow;

pub use config::{ImageConfig, StudioConfig, TranslatorConfig};
pub use error::{GenerationError, Result, StudioError, TranslationError};
pub use lookup::{lookup_translate, vocabulary};
pub use models::*;
pub use remote::{ImageClient, ImageGenerator, RemoteClients, TranslationClient, Translator};
pub use workflow::{Phase, RunOutcome, StudioState, WorkflowController};
