//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `message_handler`: Handles `/start`, `/help` and any other message
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Renders menu screens and their keyboards
//! - `dialogue_manager`: Applies menu actions to the quiz session

pub mod callback_handler;
pub mod dialogue_manager;
pub mod message_handler;
pub mod ui_builder;

use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::dispatching::{HandlerExt, UpdateHandler};
use teloxide::prelude::*;

use crate::dialogue::{user_dialogue, QuizSession};

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::{command_handler, message_handler, Command};

// Re-export utility functions that might be used elsewhere
pub use dialogue_manager::{apply_action, handle_action};
pub use ui_builder::{render_screen, render_welcome, RenderedScreen, Screen};

/// Build the update handler tree.
///
/// Requires an `Arc<InMemStorage<QuizSession>>` and an `Arc<MenuSettings>`
/// in the dispatcher dependencies.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    let message_branch = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(dptree::endpoint(message_handler));

    let callback_branch = Update::filter_callback_query()
        .map(
            |q: CallbackQuery, storage: Arc<InMemStorage<QuizSession>>| {
                user_dialogue(storage, &q.from)
            },
        )
        .endpoint(callback_handler);

    dptree::entry()
        .branch(message_branch)
        .branch(callback_branch)
}
