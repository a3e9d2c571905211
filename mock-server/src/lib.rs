//! In-memory stand-in for the todo backend.
//!
//! Serves the same routes as the real service under `/api`, keeping todos in
//! a `RwLock`-guarded store that lives as long as the router. Used by the
//! client's integration tests and for local development.

pub mod error;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub use error::AppError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub username: String,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Deserialize)]
pub struct CompleteTodo {
    #[serde(default)]
    pub username: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub username: Option<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    todos: Vec<Todo>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let api = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}/complete", patch(complete_todo));
    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(db)
}

pub const DEFAULT_PORT: u16 = 8080;

/// Port to listen on: `DEFAULT_PORT` when unset, an error when set but not a
/// valid port number.
pub fn parse_port(raw: Option<&str>) -> Result<u16, std::io::Error> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse().map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("PORT must be a port number, got {value:?}"),
            )
        }),
    }
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_todos(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let username = params
        .username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("username is required".to_string()))?;

    let store = db.read().await;
    let mut todos: Vec<Todo> = store
        .todos
        .iter()
        .filter(|t| t.username == username)
        .cloned()
        .collect();
    todos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    Ok(Json(todos))
}

async fn create_todo(
    State(db): State<Db>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(input) = payload?;
    if input.username.is_empty() || input.title.is_empty() {
        return Err(AppError::BadRequest(
            "username and title are required".to_string(),
        ));
    }

    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        username: input.username,
        title: input.title,
        is_completed: false,
        created_at: Utc::now(),
        completed_at: None,
    };
    store.todos.push(todo.clone());
    tracing::info!(id = todo.id, username = %todo.username, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Marks the todo completed if `(id, username)` matches one. A miss is not an
/// error: the response is the same either way.
async fn complete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    payload: Result<Json<CompleteTodo>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let id: u64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id format".to_string()))?;
    let Json(input) = payload?;
    if input.username.is_empty() {
        return Err(AppError::BadRequest("username is required".to_string()));
    }

    let mut store = db.write().await;
    let now = Utc::now();
    let mut matched = 0;
    for todo in store
        .todos
        .iter_mut()
        .filter(|t| t.id == id && t.username == input.username)
    {
        todo.is_completed = true;
        todo.completed_at = Some(now);
        matched += 1;
    }
    tracing::info!(id, username = %input.username, matched, "todo completion applied");
    Ok(Json(json!({ "status": "completed", "id": id })))
}
