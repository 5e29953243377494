//! # Callback Session Tests
//!
//! Sends callback query updates through the bot's handler tree and checks
//! what ends up in the session storage. The bot points at an unreachable
//! API URL, so Telegram calls fail and only their errors get logged.

use anyhow::Result;
use std::ops::ControlFlow;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use teloxide::types::{ChatId, Update};
use url::Url;

use yoga_assistant::bot;
use yoga_assistant::config::{MenuSettings, SiteLinks, DEFAULT_SITE_URL};
use yoga_assistant::dialogue::{QuizDialogue, QuizSession};
use yoga_assistant::localization::init_localization;
use yoga_assistant::quiz_model::{Goal, Level};

const GROUP_CHAT_ID: i64 = -1001;

fn offline_bot() -> Result<Bot> {
    Ok(Bot::new("123:abc").set_api_url(Url::parse("http://127.0.0.1:1/")?))
}

fn settings() -> Arc<MenuSettings> {
    Arc::new(MenuSettings {
        site: SiteLinks::parse(DEFAULT_SITE_URL).expect("default site URL is valid"),
        support_username: "@your_username".to_string(),
    })
}

/// A button press by `user_id` on a bot message in the group chat
fn button_press(update_id: i32, user_id: u64, data: &str) -> Result<Update> {
    let update = serde_json::from_str(&serde_json::json!({
        "update_id": update_id,
        "callback_query": {
            "id": format!("query-{update_id}"),
            "from": { "id": user_id, "is_bot": false, "first_name": "Student" },
            "message": {
                "message_id": 7,
                "date": 1_700_000_000,
                "chat": { "id": GROUP_CHAT_ID, "type": "supergroup", "title": "Yoga group" },
                "from": { "id": 42, "is_bot": true, "first_name": "Yoga bot" },
                "text": "Выберите действие:"
            },
            "chat_instance": "group-instance",
            "data": data
        }
    })
    .to_string())?;
    Ok(update)
}

async fn press(
    storage: &Arc<InMemStorage<QuizSession>>,
    update_id: i32,
    user_id: u64,
    data: &str,
) -> Result<()> {
    let deps = dptree::deps![
        offline_bot()?,
        button_press(update_id, user_id, data)?,
        Arc::clone(storage),
        settings()
    ];

    match bot::schema().dispatch(deps).await {
        ControlFlow::Break(result) => result,
        ControlFlow::Continue(_) => anyhow::bail!("callback update was not handled"),
    }
}

async fn stored_session(
    storage: &Arc<InMemStorage<QuizSession>>,
    id: i64,
) -> Result<Option<QuizSession>> {
    Ok(QuizDialogue::new(Arc::clone(storage), ChatId(id)).get().await?)
}

/// Users answering in the same group chat keep separate sessions
#[tokio::test]
async fn test_sessions_are_kept_per_user_in_group_chat() -> Result<()> {
    init_localization()?;
    let storage = InMemStorage::<QuizSession>::new();

    press(&storage, 1, 11, "test_stress").await?;
    press(&storage, 2, 22, "level_advanced").await?;

    assert_eq!(
        stored_session(&storage, 11).await?,
        Some(QuizSession {
            goal: Some(Goal::Stress),
            ..Default::default()
        })
    );
    assert_eq!(
        stored_session(&storage, 22).await?,
        Some(QuizSession {
            level: Some(Level::Advanced),
            ..Default::default()
        })
    );
    assert_eq!(stored_session(&storage, GROUP_CHAT_ID).await?, None);

    Ok(())
}

/// The result removes the session of the user who finished, and only theirs
#[tokio::test]
async fn test_result_removes_only_finishing_users_session() -> Result<()> {
    init_localization()?;
    let storage = InMemStorage::<QuizSession>::new();

    press(&storage, 1, 11, "test_pain").await?;
    press(&storage, 2, 11, "level_beginner").await?;
    press(&storage, 3, 22, "test_sleep").await?;

    assert_eq!(
        stored_session(&storage, 11).await?,
        Some(QuizSession {
            goal: Some(Goal::Pain),
            level: Some(Level::Beginner),
            zone: None,
        })
    );

    press(&storage, 4, 11, "zone_back").await?;

    assert_eq!(stored_session(&storage, 11).await?, None);
    assert_eq!(
        stored_session(&storage, 22).await?,
        Some(QuizSession {
            goal: Some(Goal::Sleep),
            ..Default::default()
        })
    );

    Ok(())
}

/// Navigation and unknown buttons never create a session
#[tokio::test]
async fn test_navigation_and_unknown_buttons_store_nothing() -> Result<()> {
    init_localization()?;
    let storage = InMemStorage::<QuizSession>::new();

    press(&storage, 1, 11, "start_test").await?;
    press(&storage, 2, 11, "schedule").await?;
    press(&storage, 3, 11, "test_yoga").await?;
    // Result with nothing answered: defaults are shown, nothing to remove
    press(&storage, 4, 11, "zone_ok").await?;

    assert_eq!(stored_session(&storage, 11).await?, None);

    Ok(())
}
