//! Quiz dialogue module holding the per-user answer state.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};
use teloxide::types::{ChatId, User};

use crate::quiz_model::{Goal, Level, Zone};

/// Answers collected so far in the course-matching quiz
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    pub goal: Option<Goal>,
    pub level: Option<Level>,
    pub zone: Option<Zone>,
}

/// Type alias for our quiz dialogue
pub type QuizDialogue = Dialogue<QuizSession, InMemStorage<QuizSession>>;

/// Open the quiz dialogue of a user.
///
/// Sessions are keyed by the user rather than the chat, so people answering
/// the quiz in the same group keep separate answers.
pub fn user_dialogue(storage: Arc<InMemStorage<QuizSession>>, user: &User) -> QuizDialogue {
    QuizDialogue::new(storage, ChatId::from(user.id))
}

/// Answers with the fallbacks applied for any question that was skipped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizAnswers {
    pub goal: Goal,
    pub level: Level,
    pub zone: Zone,
}

pub const DEFAULT_GOAL: Goal = Goal::Sleep;
pub const DEFAULT_LEVEL: Level = Level::Beginner;
pub const DEFAULT_ZONE: Zone = Zone::Ok;

impl QuizSession {
    pub fn is_empty(&self) -> bool {
        self.goal.is_none() && self.level.is_none() && self.zone.is_none()
    }

    /// Resolve the session into a complete answer set.
    ///
    /// A user can reach the last question through an old keyboard left in
    /// the chat history, so missing answers fall back to sleep / beginner /
    /// ok instead of failing.
    pub fn answers(&self) -> QuizAnswers {
        QuizAnswers {
            goal: self.goal.unwrap_or(DEFAULT_GOAL),
            level: self.level.unwrap_or(DEFAULT_LEVEL),
            zone: self.zone.unwrap_or(DEFAULT_ZONE),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
