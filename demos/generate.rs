use promptgen::{RunOutcome, StudioConfig, WorkflowController};
use std::env;

/// One-shot generation: `cargo run --example generate -- черная пантера`
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = StudioConfig::from_env();
    promptgen::logger::init_with_config(config.logger.clone())?;
    if dotenv_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::warn!("⚠️  No .env file found");
    }

    let prompt = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let (controller, mut notifications) = WorkflowController::from_config(&config)?;

    controller.set_prompt(&prompt);
    let outcome = controller.generate().await;

    while let Ok(notification) = notifications.try_recv() {
        println!("{}", notification.message);
    }

    if outcome == RunOutcome::Generated {
        let path = controller.save_image(&config.output_dir)?;
        println!("Saved {}", path.display());
    }

    Ok(())
}
