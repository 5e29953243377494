//! # Quiz Model Module
//!
//! Answer types for the course-matching quiz. Each answer has a stable
//! wire name which is used both inside callback data (`test_stress`,
//! `level_beginner`, ...) and on the result screen.

use serde::{Deserialize, Serialize};

/// First question: what the user wants from their practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Stress,
    Weight,
    Sleep,
    Pain,
}

/// Second question: how experienced the user is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Advanced,
}

/// Third question: the body area that needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Back,
    Hips,
    Breath,
    Ok,
}

impl Goal {
    /// All goals in the order they are offered on the quiz screen
    pub const ALL: [Goal; 4] = [Goal::Stress, Goal::Weight, Goal::Sleep, Goal::Pain];

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Stress => "stress",
            Goal::Weight => "weight",
            Goal::Sleep => "sleep",
            Goal::Pain => "pain",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.as_str() == value)
    }
}

impl Level {
    pub const ALL: [Level; 2] = [Level::Beginner, Level::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Advanced => "advanced",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Back, Zone::Hips, Zone::Breath, Zone::Ok];

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Back => "back",
            Zone::Hips => "hips",
            Zone::Breath => "breath",
            Zone::Ok => "ok",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|zone| zone.as_str() == value)
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_inverts_as_str() {
        for goal in Goal::ALL {
            assert_eq!(Goal::from_wire(goal.as_str()), Some(goal));
        }
        for level in Level::ALL {
            assert_eq!(Level::from_wire(level.as_str()), Some(level));
        }
        for zone in Zone::ALL {
            assert_eq!(Zone::from_wire(zone.as_str()), Some(zone));
        }
    }

    #[test]
    fn test_from_wire_rejects_unknown_values() {
        assert_eq!(Goal::from_wire("flexibility"), None);
        assert_eq!(Level::from_wire("expert"), None);
        assert_eq!(Zone::from_wire(""), None);
        assert_eq!(Zone::from_wire("Back"), None);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Goal::Pain).unwrap(), "\"pain\"");
        assert_eq!(serde_json::to_string(&Zone::Ok).unwrap(), "\"ok\"");
    }
}
