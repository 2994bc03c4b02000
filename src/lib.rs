//! tasktrack library - task store and CLI command implementations

pub mod cli;
pub mod config;
pub mod store;
