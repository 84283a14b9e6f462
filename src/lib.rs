//! Command-line clients for a local grok2api service.
//!
//! Each binary in `src/bin` parses its flags, builds a [`config::Config`],
//! and hands off to one handler in [`commands`].

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;
