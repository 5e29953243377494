//! # Yoga Assistant Telegram Bot
//!
//! A Telegram bot for a yoga studio: an inline-button main menu, a short
//! quiz that recommends a course, and informational screens with the class
//! schedule, course links and contacts.

pub mod bot;
pub mod config;
pub mod config_errors;
pub mod dialogue;
pub mod localization;
pub mod menu_action;
pub mod quiz_model;
pub mod recommendation;
