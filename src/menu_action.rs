//! # Menu Action Module
//!
//! Typed view of the callback data carried by inline keyboard buttons.
//! Callback data is decoded into a [`MenuAction`] once, at the boundary,
//! and everything past the callback handler works with the enum.

use crate::quiz_model::{Goal, Level, Zone};

pub const MAIN_MENU: &str = "main_menu";
pub const START_TEST: &str = "start_test";
pub const SCHEDULE: &str = "schedule";
pub const COURSES: &str = "courses";
pub const HELP: &str = "help";

pub const GOAL_PREFIX: &str = "test_";
pub const LEVEL_PREFIX: &str = "level_";
pub const ZONE_PREFIX: &str = "zone_";

/// A button press the bot knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    MainMenu,
    StartTest,
    Schedule,
    Courses,
    Help,
    Goal(Goal),
    Level(Level),
    Zone(Zone),
}

impl MenuAction {
    /// Decode callback data.
    ///
    /// Exact matches win over prefixed answers. Returns `None` for anything
    /// unrecognised, including a known prefix with an unknown value.
    pub fn parse(data: &str) -> Option<Self> {
        let action = match data {
            MAIN_MENU => Self::MainMenu,
            START_TEST => Self::StartTest,
            SCHEDULE => Self::Schedule,
            COURSES => Self::Courses,
            HELP => Self::Help,
            _ => {
                if let Some(value) = data.strip_prefix(GOAL_PREFIX) {
                    Self::Goal(Goal::from_wire(value)?)
                } else if let Some(value) = data.strip_prefix(LEVEL_PREFIX) {
                    Self::Level(Level::from_wire(value)?)
                } else if let Some(value) = data.strip_prefix(ZONE_PREFIX) {
                    Self::Zone(Zone::from_wire(value)?)
                } else {
                    return None;
                }
            }
        };
        Some(action)
    }

    /// Encode the action as callback data
    pub fn callback_data(&self) -> String {
        match self {
            Self::MainMenu => MAIN_MENU.to_string(),
            Self::StartTest => START_TEST.to_string(),
            Self::Schedule => SCHEDULE.to_string(),
            Self::Courses => COURSES.to_string(),
            Self::Help => HELP.to_string(),
            Self::Goal(goal) => format!("{GOAL_PREFIX}{goal}"),
            Self::Level(level) => format!("{LEVEL_PREFIX}{level}"),
            Self::Zone(zone) => format!("{ZONE_PREFIX}{zone}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_actions() {
        assert_eq!(MenuAction::parse("main_menu"), Some(MenuAction::MainMenu));
        assert_eq!(MenuAction::parse("start_test"), Some(MenuAction::StartTest));
        assert_eq!(MenuAction::parse("schedule"), Some(MenuAction::Schedule));
        assert_eq!(MenuAction::parse("courses"), Some(MenuAction::Courses));
        assert_eq!(MenuAction::parse("help"), Some(MenuAction::Help));
    }

    #[test]
    fn test_parse_prefixed_answers() {
        assert_eq!(
            MenuAction::parse("test_weight"),
            Some(MenuAction::Goal(Goal::Weight))
        );
        assert_eq!(
            MenuAction::parse("level_advanced"),
            Some(MenuAction::Level(Level::Advanced))
        );
        assert_eq!(
            MenuAction::parse("zone_breath"),
            Some(MenuAction::Zone(Zone::Breath))
        );
    }

    #[test]
    fn test_parse_ignores_unknown_data() {
        assert_eq!(MenuAction::parse(""), None);
        assert_eq!(MenuAction::parse("settings"), None);
        assert_eq!(MenuAction::parse("test_"), None);
        assert_eq!(MenuAction::parse("test_flexibility"), None);
        assert_eq!(MenuAction::parse("zone_back_extra"), None);
        assert_eq!(MenuAction::parse("MAIN_MENU"), None);
    }

    #[test]
    fn test_callback_data_matches_parse() {
        let actions = [
            MenuAction::MainMenu,
            MenuAction::StartTest,
            MenuAction::Goal(Goal::Pain),
            MenuAction::Level(Level::Beginner),
            MenuAction::Zone(Zone::Ok),
        ];
        for action in actions {
            assert_eq!(MenuAction::parse(&action.callback_data()), Some(action));
        }
        assert_eq!(MenuAction::Goal(Goal::Sleep).callback_data(), "test_sleep");
    }

    #[test]
    fn test_callback_data_fits_telegram_limit() {
        // Telegram rejects callback data longer than 64 bytes
        for goal in Goal::ALL {
            assert!(MenuAction::Goal(goal).callback_data().len() <= 64);
        }
        for zone in Zone::ALL {
            assert!(MenuAction::Zone(zone).callback_data().len() <= 64);
        }
    }
}
