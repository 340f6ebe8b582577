pub mod controller;
pub mod state;

pub use controller::{
    WorkflowController, EMPTY_PROMPT_MESSAGE, FAILURE_MESSAGE, IMAGE_READY_MESSAGE,
    TIMEOUT_MESSAGE,
};
pub use state::{Phase, RunOutcome, StudioState};
