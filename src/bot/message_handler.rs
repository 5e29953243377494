//! Message Handler module for commands and plain messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

// Import localization
use crate::localization::t_lang;

use crate::config::MenuSettings;
use crate::dialogue::QuizSession;

// Import UI builder functions
use super::ui_builder::{render_screen, render_welcome, RenderedScreen, Screen};

/// Commands the bot advertises in the Telegram menu
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "открыть главное меню")]
    Start,
    #[command(description = "контакты и помощь")]
    Help,
}

/// Handle `/start` and `/help`, each answered with a fresh message
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    settings: Arc<MenuSettings>,
) -> Result<()> {
    let language_code = msg
        .from
        .as_ref()
        .and_then(|user| user.language_code.as_deref());

    let screen = match cmd {
        Command::Start => {
            let first_name = msg
                .from
                .as_ref()
                .map(|user| user.first_name.as_str())
                .unwrap_or_default();
            info!(user_id = %msg.chat.id, "User opened the main menu");
            render_welcome(first_name, language_code)
        }
        Command::Help => render_screen(
            Screen::Help,
            &QuizSession::default(),
            &settings,
            language_code,
        ),
    };

    send_screen(&bot, msg.chat.id, screen).await
}

/// Any other message gets a hint pointing at `/start`
pub async fn message_handler(bot: Bot, msg: Message) -> Result<()> {
    debug!(user_id = %msg.chat.id, "Received non-command message from user");

    let language_code = msg
        .from
        .as_ref()
        .and_then(|user| user.language_code.as_deref());

    bot.send_message(msg.chat.id, t_lang("fallback-hint", language_code))
        .await?;

    Ok(())
}

async fn send_screen(bot: &Bot, chat_id: ChatId, screen: RenderedScreen) -> Result<()> {
    let keyboard = screen.keyboard();
    bot.send_message(chat_id, screen.text)
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await?;
    Ok(())
}
