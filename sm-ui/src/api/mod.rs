//! HTTP API handlers for sm-ui

pub mod artists;
pub mod chat;
pub mod dashboard;
pub mod health;
pub mod ui;
