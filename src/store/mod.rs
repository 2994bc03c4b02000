//! Task store - data model, id allocation, and JSON file persistence
//!
//! The store is the only component that mutates state. Callers acquire a
//! [`TaskStore`] handle at startup, apply at most one operation, and exit;
//! each operation is a full load of the collection followed by a full
//! rewrite of the file. Cross-process writers are not coordinated: the
//! last save wins.

pub mod error;
pub mod storage;
pub mod task;

pub use error::{Result, StoreError};
pub use storage::TaskStore;
pub use task::{Status, Task};

use std::path::PathBuf;

/// File name of the persisted collection inside the data directory.
pub const TASKS_FILE: &str = "tasks.json";

/// Default application data directory (`~/.tasktrack`).
pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(".tasktrack"))
}
