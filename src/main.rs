use tracing::info;

use tinylink_tui::config::Config;
use tinylink_tui::{logging, tui};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let _log_guard = logging::init(&config);

    info!(
        api_base = %config.api_base,
        short_base = %config.short_base,
        "starting dashboard"
    );

    tui::run(config).await
}
