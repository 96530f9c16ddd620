//! Command handlers for the jobdeck binary.

pub mod auth;
pub mod jobs;
