//! Background Tasks
//!
//! Long-running maintenance tasks spawned at startup.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
