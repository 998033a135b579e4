//! Terminal client for the AI platform API: an interactive tabbed console
//! plus one-shot subcommands over the same typed client.

pub mod commands;
pub mod tui;
