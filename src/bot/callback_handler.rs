//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, error, warn};

use crate::config::MenuSettings;
use crate::menu_action::MenuAction;

// Import dialogue types
use crate::dialogue::QuizDialogue;

use super::dialogue_manager::handle_action;

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    dialogue: QuizDialogue,
    settings: Arc<MenuSettings>,
) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "Received callback query from user");

    // Answer first so the client stops its loading indicator even if the
    // session storage fails below
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(user_id = %q.from.id, error = %e, "Failed to answer callback query");
    }

    let language_code = q.from.language_code.as_deref();
    let action = q.data.as_deref().and_then(MenuAction::parse);

    match (action, &q.message) {
        (Some(action), Some(msg)) => {
            let stored = dialogue.get().await?;
            let had_session = stored.is_some();
            let mut session = stored.unwrap_or_default();
            debug!(user_id = %q.from.id, action = ?action, session = ?session, "Handling menu action");

            let screen = handle_action(action, &mut session, &settings, language_code);

            match bot
                .edit_message_text(msg.chat().id, msg.id(), screen.text.clone())
                .parse_mode(ParseMode::Html)
                .reply_markup(screen.keyboard())
                .await
            {
                Ok(_) => (),
                Err(e) => {
                    error!(user_id = %q.from.id, action = ?action, error = %e, "Failed to edit menu message")
                }
            }

            if !session.is_empty() {
                dialogue.update(session).await?;
            } else if had_session {
                dialogue.exit().await?;
            }
        }
        (Some(action), None) => {
            debug!(user_id = %q.from.id, action = ?action, "Callback message is unavailable, nothing to edit");
        }
        (None, _) => {
            // Unknown buttons are ignored
            debug!(user_id = %q.from.id, data = ?q.data, "Ignoring unrecognised callback data");
        }
    }

    Ok(())
}
