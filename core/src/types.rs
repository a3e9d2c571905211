//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's JSON schema but are defined independently
//! of the mock-server crate. Integration tests catch any schema drift between
//! the two. Timestamps stay opaque strings: the client only forwards them and
//! never does arithmetic on them.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
///
/// `is_completed` and `completed_at` are expected to agree (a completed todo
/// carries a completion time), but that pairing is owned by the backend and
/// is not checked here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub username: String,
    pub title: String,
    pub is_completed: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub username: String,
    pub title: String,
}

/// Request payload for marking a todo as completed. The backend only applies
/// the change when `username` owns the todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteTodo {
    pub username: String,
}
