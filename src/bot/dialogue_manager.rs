//! Dialogue Manager module for quiz state transitions
//!
//! Pure functions: they take the session by mutable reference and never
//! touch Telegram, so the callback handler owns loading and storing it.

use crate::config::MenuSettings;
use crate::dialogue::QuizSession;
use crate::menu_action::MenuAction;

use super::ui_builder::{render_screen, RenderedScreen, Screen};

/// Record the answer carried by `action` and pick the next screen
pub fn apply_action(action: MenuAction, session: &mut QuizSession) -> Screen {
    match action {
        MenuAction::MainMenu => Screen::Main,
        MenuAction::StartTest => Screen::QuizGoal,
        MenuAction::Schedule => Screen::Schedule,
        MenuAction::Courses => Screen::Courses,
        MenuAction::Help => Screen::Help,
        MenuAction::Goal(goal) => {
            session.goal = Some(goal);
            Screen::QuizLevel
        }
        MenuAction::Level(level) => {
            session.level = Some(level);
            Screen::QuizZone
        }
        MenuAction::Zone(zone) => {
            session.zone = Some(zone);
            Screen::Result
        }
    }
}

/// Apply an action and render the screen it leads to.
///
/// The session is cleared once the result screen has been rendered, so the
/// next quiz starts from scratch.
pub fn handle_action(
    action: MenuAction,
    session: &mut QuizSession,
    settings: &MenuSettings,
    language_code: Option<&str>,
) -> RenderedScreen {
    let screen = apply_action(action, session);
    let rendered = render_screen(screen, session, settings, language_code);

    if screen == Screen::Result {
        session.clear();
    }

    rendered
}
