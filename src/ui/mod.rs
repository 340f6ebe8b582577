pub mod intent;
pub mod render;
pub mod terminal;

pub use intent::Intent;
pub use terminal::TerminalUi;
