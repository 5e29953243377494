//! # Recommendation Module
//!
//! Maps finished quiz answers to the course the bot recommends.

use crate::dialogue::QuizAnswers;
use crate::quiz_model::{Goal, Level, Zone};

/// A course the bot can recommend at the end of the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    Stress,
    /// Weight loss course; `dynamic` selects the advanced wording
    Weight { dynamic: bool },
    Pain,
    Sleep,
    Basic,
}

impl Course {
    /// Localization key of the course title
    pub fn title_key(self) -> &'static str {
        match self {
            Course::Stress => "course-stress",
            Course::Weight { dynamic: true } => "course-weight-dynamic",
            Course::Weight { dynamic: false } => "course-weight-beginner",
            Course::Pain => "course-pain",
            Course::Sleep => "course-sleep",
            Course::Basic => "course-basic",
        }
    }

    /// Path of the course page, relative to the site URL
    pub fn path(self) -> &'static str {
        match self {
            Course::Stress => "stress-course",
            Course::Weight { .. } => "weight-course",
            Course::Pain => "pain-course",
            Course::Sleep => "sleep-course",
            Course::Basic => "basic-course",
        }
    }
}

/// Pick a course for the given answers.
///
/// Rules are checked in order and the first match wins. A pain goal only
/// gets the therapy course when the problem zone is the back; any other
/// zone falls through to the basic course.
pub fn recommend(answers: &QuizAnswers) -> Course {
    match answers.goal {
        Goal::Stress => Course::Stress,
        Goal::Weight => Course::Weight {
            dynamic: answers.level == Level::Advanced,
        },
        Goal::Pain if answers.zone == Zone::Back => Course::Pain,
        Goal::Sleep => Course::Sleep,
        _ => Course::Basic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(goal: Goal, level: Level, zone: Zone) -> QuizAnswers {
        QuizAnswers { goal, level, zone }
    }

    #[test]
    fn test_goal_zone_precedence_table() {
        for level in Level::ALL {
            for zone in Zone::ALL {
                assert_eq!(
                    recommend(&answers(Goal::Stress, level, zone)),
                    Course::Stress
                );
                assert_eq!(recommend(&answers(Goal::Sleep, level, zone)), Course::Sleep);
                assert!(matches!(
                    recommend(&answers(Goal::Weight, level, zone)),
                    Course::Weight { .. }
                ));

                let expected_pain = if zone == Zone::Back {
                    Course::Pain
                } else {
                    Course::Basic
                };
                assert_eq!(recommend(&answers(Goal::Pain, level, zone)), expected_pain);
            }
        }
    }

    #[test]
    fn test_weight_wording_depends_on_level() {
        assert_eq!(
            recommend(&answers(Goal::Weight, Level::Advanced, Zone::Ok)),
            Course::Weight { dynamic: true }
        );
        assert_eq!(
            recommend(&answers(Goal::Weight, Level::Beginner, Zone::Back)),
            Course::Weight { dynamic: false }
        );
    }

    #[test]
    fn test_pain_without_back_gets_basic_course() {
        let course = recommend(&answers(Goal::Pain, Level::Beginner, Zone::Hips));
        assert_eq!(course, Course::Basic);
        assert_eq!(course.path(), "basic-course");
    }

    #[test]
    fn test_course_paths() {
        assert_eq!(Course::Stress.path(), "stress-course");
        assert_eq!(Course::Weight { dynamic: true }.path(), "weight-course");
        assert_eq!(Course::Pain.path(), "pain-course");
        assert_eq!(Course::Sleep.path(), "sleep-course");
    }
}
