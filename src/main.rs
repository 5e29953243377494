use anyhow::Result;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use yoga_assistant::bot::{self, Command};
use yoga_assistant::config::BotConfig;
use yoga_assistant::dialogue::QuizSession;
use yoga_assistant::localization::init_localization;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting Yoga Assistant Telegram Bot");

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid bot configuration");
            return Err(e.into());
        }
    };

    init_localization()?;

    let bot = Bot::new(config.token.clone());

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    // The full webhook URL ends with the token, so only the host is logged
    info!(
        webhook_host = config.webhook_url.host_str().unwrap_or_default(),
        port = config.port,
        "Setting up webhook"
    );

    let listener = webhooks::axum(
        bot.clone(),
        webhooks::Options::new(config.listen_addr(), config.webhook_url.clone()),
    )
    .await?;

    info!("Webhook registered, starting dispatcher");

    Dispatcher::builder(bot, bot::schema())
        .dependencies(dptree::deps![
            InMemStorage::<QuizSession>::new(),
            Arc::new(config.menu.clone())
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
