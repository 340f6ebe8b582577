use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use super::intent::{Intent, HELP};
use super::render::{render_notification, render_state};
use crate::{
    error::Result,
    lookup::vocabulary,
    models::Notification,
    workflow::{RunOutcome, WorkflowController},
};

/// Line-oriented front end: reads intents from stdin and forwards them to
/// the controller. Generation runs in the background so input stays live.
pub struct TerminalUi {
    controller: Arc<WorkflowController>,
    output_dir: PathBuf,
}

impl TerminalUi {
    pub fn new(controller: Arc<WorkflowController>, output_dir: PathBuf) -> Self {
        Self {
            controller,
            output_dir,
        }
    }

    pub async fn run(self, notifications: mpsc::UnboundedReceiver<Notification>) -> Result<()> {
        let toasts = tokio::spawn(show_toasts(notifications));

        let mut stdout = io::stdout();
        stdout.write_all(format!("{}\n\n", HELP).as_bytes()).await?;
        stdout
            .write_all(render_state(&self.controller.state()).as_bytes())
            .await?;
        stdout.flush().await?;

        let mut lines = BufReader::new(io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let reply = match Intent::parse(&line) {
                Intent::Quit => break,
                intent => self.handle(intent),
            };
            if let Some(reply) = reply {
                stdout.write_all(reply.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        toasts.abort();
        log::info!("👋 Session closed");
        Ok(())
    }

    fn handle(&self, intent: Intent) -> Option<String> {
        match intent {
            Intent::EditPrompt(text) => {
                self.controller.set_prompt(&text);
                let state = self.controller.state();
                Some(format!(
                    "Prompt set ({} chars)\n",
                    state.prompt.as_str().chars().count()
                ))
            }
            Intent::EditSteps(value) => {
                if self.controller.set_steps(&value) {
                    Some(format!("Steps: {}\n", self.controller.state().steps))
                } else {
                    Some(format!(
                        "'{}' is not a number; steps stay at {}\n",
                        value,
                        self.controller.state().steps
                    ))
                }
            }
            Intent::Generate => {
                if self.controller.state().is_loading {
                    return Some("Already generating, please wait\n".to_string());
                }
                let controller = self.controller.clone();
                tokio::spawn(async move {
                    if controller.generate().await == RunOutcome::Generated {
                        print!("{}", render_state(&controller.state()));
                    }
                });
                None
            }
            Intent::Save(dir) => {
                let dir = dir.unwrap_or_else(|| self.output_dir.clone());
                match self.controller.save_image(&dir) {
                    Ok(_) => None,
                    Err(e) => Some(format!("Cannot save: {}\n", e)),
                }
            }
            Intent::Show => Some(render_state(&self.controller.state())),
            Intent::Vocabulary => Some(
                vocabulary()
                    .iter()
                    .map(|(ru, en)| format!("  {} -> {}\n", ru, en))
                    .collect(),
            ),
            Intent::Help => Some(format!("{}\n", HELP)),
            Intent::Unknown(name) => Some(format!("Unknown command '/{}', try /help\n", name)),
            Intent::Blank | Intent::Quit => None,
        }
    }
}

async fn show_toasts(mut notifications: mpsc::UnboundedReceiver<Notification>) {
    while let Some(notification) = notifications.recv().await {
        println!("{}", render_notification(&notification));
    }
}
