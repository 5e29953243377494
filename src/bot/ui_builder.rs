//! UI Builder module for rendering menu screens and their keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::html;
use url::Url;

// Import localization
use crate::localization::{t_args_lang, t_lang};

use crate::config::MenuSettings;
use crate::dialogue::QuizSession;
use crate::menu_action::MenuAction;
use crate::quiz_model::{Goal, Level, Zone};
use crate::recommendation::recommend;

/// A named presentation state of the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    QuizGoal,
    QuizLevel,
    QuizZone,
    Result,
    Schedule,
    Courses,
    Help,
}

/// What happens when a button is pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonTarget {
    Action(MenuAction),
    Link(Url),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: String,
    pub target: ButtonTarget,
}

impl MenuButton {
    pub fn action(label: String, action: MenuAction) -> Self {
        Self {
            label,
            target: ButtonTarget::Action(action),
        }
    }

    pub fn link(label: String, url: Url) -> Self {
        Self {
            label,
            target: ButtonTarget::Link(url),
        }
    }

    fn to_inline(&self) -> InlineKeyboardButton {
        match &self.target {
            ButtonTarget::Action(action) => {
                InlineKeyboardButton::callback(self.label.clone(), action.callback_data())
            }
            ButtonTarget::Link(url) => InlineKeyboardButton::url(self.label.clone(), url.clone()),
        }
    }
}

/// Screen text (HTML) plus its keyboard rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScreen {
    pub text: String,
    pub buttons: Vec<Vec<MenuButton>>,
}

impl RenderedScreen {
    pub fn keyboard(&self) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(
            self.buttons
                .iter()
                .map(|row| row.iter().map(MenuButton::to_inline).collect::<Vec<_>>()),
        )
    }

    /// Every action reachable from this screen, in keyboard order
    pub fn actions(&self) -> Vec<MenuAction> {
        self.buttons
            .iter()
            .flatten()
            .filter_map(|button| match button.target {
                ButtonTarget::Action(action) => Some(action),
                ButtonTarget::Link(_) => None,
            })
            .collect()
    }
}

/// Render a screen for the given session state
pub fn render_screen(
    screen: Screen,
    session: &QuizSession,
    settings: &MenuSettings,
    language_code: Option<&str>,
) -> RenderedScreen {
    match screen {
        Screen::Main => main_menu(t_lang("main-menu-prompt", language_code), language_code),
        Screen::QuizGoal => quiz_goal(language_code),
        Screen::QuizLevel => quiz_level(language_code),
        Screen::QuizZone => quiz_zone(session, language_code),
        Screen::Result => quiz_result(session, settings, language_code),
        Screen::Schedule => schedule(language_code),
        Screen::Courses => courses(settings, language_code),
        Screen::Help => help(settings, language_code),
    }
}

/// Main menu preceded by a personal greeting, sent in reply to `/start`
pub fn render_welcome(first_name: &str, language_code: Option<&str>) -> RenderedScreen {
    let text = format!(
        "{}\n\n{}",
        t_args_lang(
            "welcome-greeting",
            &[("name", html::escape(first_name).as_str())],
            language_code
        ),
        t_lang("main-menu-prompt", language_code)
    );
    main_menu(text, language_code)
}

fn main_menu(text: String, language_code: Option<&str>) -> RenderedScreen {
    let entries = [
        ("button-take-test", MenuAction::StartTest),
        ("button-schedule", MenuAction::Schedule),
        ("button-courses", MenuAction::Courses),
        ("button-help", MenuAction::Help),
    ];

    RenderedScreen {
        text,
        buttons: entries
            .into_iter()
            .map(|(key, action)| vec![MenuButton::action(t_lang(key, language_code), action)])
            .collect(),
    }
}

fn back_row(action: MenuAction, language_code: Option<&str>) -> Vec<MenuButton> {
    vec![MenuButton::action(t_lang("button-back", language_code), action)]
}

fn quiz_goal(language_code: Option<&str>) -> RenderedScreen {
    let mut buttons: Vec<Vec<MenuButton>> = Goal::ALL
        .into_iter()
        .map(|goal| {
            vec![MenuButton::action(
                t_lang(&format!("goal-{goal}"), language_code),
                MenuAction::Goal(goal),
            )]
        })
        .collect();
    buttons.push(back_row(MenuAction::MainMenu, language_code));

    RenderedScreen {
        text: t_lang("quiz-goal-question", language_code),
        buttons,
    }
}

fn quiz_level(language_code: Option<&str>) -> RenderedScreen {
    let mut buttons: Vec<Vec<MenuButton>> = Level::ALL
        .into_iter()
        .map(|level| {
            vec![MenuButton::action(
                t_lang(&format!("level-{level}"), language_code),
                MenuAction::Level(level),
            )]
        })
        .collect();
    buttons.push(back_row(MenuAction::StartTest, language_code));

    RenderedScreen {
        text: t_lang("quiz-level-question", language_code),
        buttons,
    }
}

fn quiz_zone(session: &QuizSession, language_code: Option<&str>) -> RenderedScreen {
    let mut buttons: Vec<Vec<MenuButton>> = Zone::ALL
        .into_iter()
        .map(|zone| {
            vec![MenuButton::action(
                t_lang(&format!("zone-{zone}"), language_code),
                MenuAction::Zone(zone),
            )]
        })
        .collect();

    // Back re-asks the level question for the goal already chosen
    let back = match session.goal {
        Some(goal) => MenuAction::Goal(goal),
        None => MenuAction::StartTest,
    };
    buttons.push(back_row(back, language_code));

    RenderedScreen {
        text: t_lang("quiz-zone-question", language_code),
        buttons,
    }
}

fn quiz_result(
    session: &QuizSession,
    settings: &MenuSettings,
    language_code: Option<&str>,
) -> RenderedScreen {
    let answers = session.answers();
    let course = recommend(&answers);

    let goal = format!("<code>{}</code>", answers.goal);
    let level = format!("<code>{}</code>", answers.level);
    let zone = format!("<code>{}</code>", answers.zone);

    let text = format!(
        "{}\n\n<b>{}</b> {}\n\n<b>{}</b> {}\n\n{}",
        t_lang("result-title", language_code),
        t_lang("result-params-label", language_code),
        t_args_lang(
            "result-params",
            &[
                ("goal", goal.as_str()),
                ("level", level.as_str()),
                ("zone", zone.as_str()),
            ],
            language_code
        ),
        t_lang("result-recommendation-label", language_code),
        t_lang(course.title_key(), language_code),
        t_lang("result-closing", language_code)
    );

    RenderedScreen {
        text,
        buttons: vec![
            vec![MenuButton::link(
                t_lang("button-get-course", language_code),
                settings.site.link(course.path()),
            )],
            vec![MenuButton::action(
                t_lang("button-to-main-menu", language_code),
                MenuAction::MainMenu,
            )],
        ],
    }
}

fn schedule(language_code: Option<&str>) -> RenderedScreen {
    let text = format!(
        "<b>{}</b>\n\n{}\n\n{}",
        t_lang("schedule-title", language_code),
        t_lang("schedule-body", language_code),
        t_lang("schedule-footer", language_code)
    );

    RenderedScreen {
        text,
        buttons: vec![back_row(MenuAction::MainMenu, language_code)],
    }
}

fn courses(settings: &MenuSettings, language_code: Option<&str>) -> RenderedScreen {
    let text = format!(
        "<b>{}</b>\n\n{}",
        t_lang("courses-title", language_code),
        t_lang("courses-description", language_code)
    );

    let links = [
        ("courses-beginner", "beginner"),
        ("courses-advanced", "advanced"),
        ("courses-meditation", "meditation"),
    ];
    let mut buttons: Vec<Vec<MenuButton>> = links
        .into_iter()
        .map(|(key, path)| {
            vec![MenuButton::link(
                t_lang(key, language_code),
                settings.site.link(path),
            )]
        })
        .collect();
    buttons.push(back_row(MenuAction::MainMenu, language_code));

    RenderedScreen { text, buttons }
}

fn help(settings: &MenuSettings, language_code: Option<&str>) -> RenderedScreen {
    let contact = html::escape(&settings.support_username);
    let text = format!(
        "<b>{}</b>\n\n{}\n{}",
        t_lang("help-title", language_code),
        t_args_lang("help-payment", &[("contact", contact.as_str())], language_code),
        t_args_lang("help-support", &[("contact", contact.as_str())], language_code)
    );

    RenderedScreen {
        text,
        buttons: vec![back_row(MenuAction::MainMenu, language_code)],
    }
}
