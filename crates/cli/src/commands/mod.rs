//! CLI command handlers

pub mod formats;
pub mod statement;
