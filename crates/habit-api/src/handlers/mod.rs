//! HTTP request handlers

pub mod auth;
pub mod checkins;
pub mod friends;
pub mod health;
pub mod messages;
pub mod stats;
pub mod tasks;
pub mod users;
