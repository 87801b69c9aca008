// src/models.rs
use serde::{Deserialize, Serialize};

/// A persisted todo row. `created_at` is serialized as `createdAt` to match
/// the wire format clients already consume.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Create payload for a todo. Both fields are required.
#[derive(Deserialize, Clone, Debug)]
pub struct NewTodo {
    pub text: String,
    pub completed: bool,
}

/// The two-field JSON body the evaluator model is instructed to return.
/// The score is deliberately absent: it is computed locally from the
/// reasoning text instead of trusting model arithmetic.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Evaluation {
    pub reasoning: String,
    pub suggestions: String,
}
