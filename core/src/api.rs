//! One-call-per-operation wrapper that pairs `TodoClient` with a `Transport`.
//!
//! Each method issues exactly one request and hands back whatever the
//! client's parser or the transport produced. No retries, no translation.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::summary::{summarize, Summary};
use crate::transport::{Transport, UreqTransport};
use crate::types::{CompleteTodo, CreateTodo, Todo};

/// Blocking todo API: builds each request with a `TodoClient`, sends it
/// through `T`, and parses the reply.
///
/// `TodoApi::from_config` is the usual way in; tests pass their own
/// `Transport` to `TodoApi::new`.
pub struct TodoApi<T> {
    client: TodoClient,
    transport: T,
}

impl TodoApi<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            TodoClient::new(&config.base_url),
            UreqTransport::new(config.timeout),
        )
    }
}

impl<T: Transport> TodoApi<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn list_todos(&self, username: &str) -> Result<Vec<Todo>, ApiError> {
        let req = self.client.build_list_todos(username);
        let todos = self.client.parse_list_todos(self.send(req)?)?;
        debug!(username, count = todos.len(), "listed todos");
        Ok(todos)
    }

    pub fn create_todo(&self, username: &str, title: &str) -> Result<Todo, ApiError> {
        let input = CreateTodo {
            username: username.to_string(),
            title: title.to_string(),
        };
        let req = self.client.build_create_todo(&input)?;
        let todo = self.client.parse_create_todo(self.send(req)?)?;
        debug!(id = todo.id, username, "created todo");
        Ok(todo)
    }

    pub fn complete_todo(&self, id: u64, username: &str) -> Result<(), ApiError> {
        let input = CompleteTodo {
            username: username.to_string(),
        };
        let req = self.client.build_complete_todo(id, &input)?;
        self.client.parse_complete_todo(self.send(req)?)?;
        debug!(id, username, "completed todo");
        Ok(())
    }

    /// Fetch the user's todos and count them.
    pub fn summary(&self, username: &str) -> Result<Summary, ApiError> {
        Ok(summarize(&self.list_todos(username)?))
    }

    fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = req.method;
        let path = req.path.clone();
        debug!(%method, %path, "sending request");
        match self.transport.execute(req) {
            Ok(resp) => {
                if resp.is_success() {
                    debug!(%method, %path, status = resp.status, "response received");
                } else {
                    warn!(%method, %path, status = resp.status, "request rejected");
                }
                Ok(resp)
            }
            Err(e) => {
                warn!(%method, %path, error = %e, "request failed");
                Err(e)
            }
        }
    }
}
