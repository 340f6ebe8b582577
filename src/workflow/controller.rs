use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use uuid::Uuid;

use super::state::{Phase, RunOutcome, StudioState};
use crate::{
    config::StudioConfig,
    error::{Result, StudioError},
    models::{GenerationRequest, Notification, StepCount},
    remote::{ImageGenerator, RemoteClients, Translator},
};

pub const EMPTY_PROMPT_MESSAGE: &str = "Enter a prompt to generate an image";
pub const IMAGE_READY_MESSAGE: &str = "Image generated successfully!";
pub const TIMEOUT_MESSAGE: &str = "Server response timed out. Please try again.";
pub const FAILURE_MESSAGE: &str = "Failed to generate image. Please try again.";

enum Claim {
    Busy,
    Invalid,
    Start(String, StepCount),
}

/// Drives translate → generate → display for one front end.
pub struct WorkflowController {
    translator: Arc<dyn Translator>,
    generator: Arc<dyn ImageGenerator>,
    state: watch::Sender<StudioState>,
    notifications: mpsc::UnboundedSender<Notification>,
}

impl WorkflowController {
    pub fn new(
        translator: Arc<dyn Translator>,
        generator: Arc<dyn ImageGenerator>,
        steps: StepCount,
    ) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (state, _) = watch::channel(StudioState::new(steps));
        let (notifications, inbox) = mpsc::unbounded_channel();

        let controller = Self {
            translator,
            generator,
            state,
            notifications,
        };
        (controller, inbox)
    }

    pub fn from_config(
        config: &StudioConfig,
    ) -> Result<(Self, mpsc::UnboundedReceiver<Notification>)> {
        let (translator, generator) = RemoteClients::new(config)?.into_parts();
        Ok(Self::new(translator, generator, config.default_steps))
    }

    pub fn subscribe(&self) -> watch::Receiver<StudioState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> StudioState {
        self.state.borrow().clone()
    }

    pub fn set_prompt(&self, text: &str) {
        self.state.send_modify(|s| s.prompt.set(text));
    }

    /// Applies a step edit. Returns `false` (state untouched) for
    /// non-numeric input.
    pub fn set_steps(&self, input: &str) -> bool {
        match StepCount::parse(input) {
            Some(steps) => {
                self.state.send_modify(|s| s.steps = steps);
                true
            }
            None => {
                log::debug!("Ignoring non-numeric step count '{}'", input);
                false
            }
        }
    }

    /// Runs one submission to completion. Never fails: every path ends back
    /// in `Phase::Idle` with `is_loading == false`.
    pub async fn generate(&self) -> RunOutcome {
        let run_id = Uuid::new_v4();

        let mut claim = Claim::Busy;
        self.state.send_if_modified(|s| {
            if s.is_loading {
                return false;
            }
            s.error_message = None;
            if s.prompt.is_blank() {
                claim = Claim::Invalid;
                return true;
            }
            s.is_loading = true;
            s.phase = Phase::Translating;
            claim = Claim::Start(s.prompt.trimmed().to_string(), s.steps);
            true
        });

        let (prompt, steps) = match claim {
            Claim::Busy => {
                log::warn!("[{}] Submission ignored, a run is already in flight", run_id);
                return RunOutcome::Busy;
            }
            Claim::Invalid => {
                log::info!("[{}] validating -> {}: empty prompt", run_id, Phase::Idle);
                self.notify(Notification::error(EMPTY_PROMPT_MESSAGE));
                return RunOutcome::Invalid;
            }
            Claim::Start(prompt, steps) => (prompt, steps),
        };
        log::info!("[{}] validating -> {}", run_id, Phase::Translating);

        let translated = self.translator.translate(&prompt).await;
        self.notify(Notification::success(format!(
            "Translated prompt: {}",
            translated
        )));
        self.state.send_modify(|s| {
            s.phase = Phase::Generating;
            s.last_translation = Some(translated.clone());
        });
        log::info!(
            "[{}] {} -> {}: '{}'",
            run_id,
            Phase::Translating,
            Phase::Generating,
            translated
        );

        let request = GenerationRequest::new(translated, steps);
        match self.generator.generate(&request).await {
            Ok(image) => {
                self.state.send_modify(|s| {
                    s.image = Some(image);
                    s.is_loading = false;
                    s.phase = Phase::Idle;
                });
                self.notify(Notification::success(IMAGE_READY_MESSAGE));
                log::info!("[{}] {} -> {}: image stored", run_id, Phase::Generating, Phase::Idle);
                RunOutcome::Generated
            }
            Err(e) => {
                log::error!("[{}] Image generation error: {}", run_id, e);
                let (message, outcome) = if e.is_timeout() {
                    (TIMEOUT_MESSAGE, RunOutcome::TimedOut)
                } else {
                    (FAILURE_MESSAGE, RunOutcome::Failed)
                };
                self.state.send_modify(|s| {
                    s.error_message = Some(message.to_string());
                    s.is_loading = false;
                    s.phase = Phase::Idle;
                });
                self.notify(Notification::error(message));
                log::info!("[{}] {} -> {}: {:?}", run_id, Phase::Generating, Phase::Idle, outcome);
                outcome
            }
        }
    }

    /// Writes the current image to `dir` as `generated-image.png`.
    pub fn save_image(&self, dir: &Path) -> Result<PathBuf> {
        let image = self.state.borrow().image.clone().ok_or(StudioError::NoImage)?;
        let path = image.save_in(dir)?;
        log::info!("💾 Image saved to: {}", path.display());
        self.notify(Notification::info(format!("Image saved to {}", path.display())));
        Ok(path)
    }

    fn notify(&self, notification: Notification) {
        // A closed inbox only means nobody renders toasts anymore.
        let _ = self.notifications.send(notification);
    }
}
