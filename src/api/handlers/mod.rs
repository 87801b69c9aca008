// src/api/handlers/mod.rs
mod health;
mod todos;
mod verify;

pub use health::health_check;
pub use todos::{create_todo, list_todos};
pub use verify::{run_consistency_test, verify};
