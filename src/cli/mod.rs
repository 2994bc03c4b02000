//! CLI command implementations

pub mod add;
pub mod definition;
pub mod delete;
pub mod export;
pub mod list;
pub mod mark;
pub mod update;

pub use definition::{Cli, Commands};

/// Clip a value to `max` display columns, marking elision with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let head: String = s.chars().take(max - 3).collect();
    format!("{}...", head)
}
