use serde::Serialize;
use std::fmt;

use crate::models::{GeneratedImage, Prompt, StepCount};

/// Stored phase of the current run. Validation is synchronous and happens
/// before any phase change, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Translating,
    Generating,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Translating => "translating",
            Phase::Generating => "generating",
        };
        f.write_str(name)
    }
}

/// Everything the front end renders. Owned by one controller and only
/// mutated through its store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudioState {
    pub prompt: Prompt,
    pub steps: StepCount,
    pub phase: Phase,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub image: Option<GeneratedImage>,
    pub last_translation: Option<String>,
}

impl StudioState {
    pub fn new(steps: StepCount) -> Self {
        Self {
            prompt: Prompt::default(),
            steps,
            phase: Phase::Idle,
            is_loading: false,
            error_message: None,
            image: None,
            last_translation: None,
        }
    }
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new(StepCount::default())
    }
}

/// How a single submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Generated,
    /// Blank prompt; nothing was sent.
    Invalid,
    /// Another run was still in flight; the submission was ignored.
    Busy,
    TimedOut,
    Failed,
}
