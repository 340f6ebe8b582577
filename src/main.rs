use promptgen::{logger, ui::TerminalUi, StudioConfig, WorkflowController};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = StudioConfig::from_env();
    logger::init_with_config(config.logger.clone())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }
    logger::log_config_info(&config);

    let (controller, notifications) = match WorkflowController::from_config(&config) {
        Ok(parts) => parts,
        Err(e) => {
            log::error!("❌ Failed to build HTTP clients: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🚀 promptgen v{} ready", env!("CARGO_PKG_VERSION"));
    TerminalUi::new(Arc::new(controller), config.output_dir.clone())
        .run(notifications)
        .await?;

    Ok(())
}
