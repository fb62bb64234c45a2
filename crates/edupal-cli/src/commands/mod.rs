pub mod auth;
pub mod catalog;
pub mod common;
pub mod config;
pub mod reminders;
pub mod suggest;
pub mod watch;
