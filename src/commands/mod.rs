//! REST API Bindings
//!
//! Frontend bindings to the todo backend, organized by resource.

mod todo;
mod status;

use async_trait::async_trait;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{NewTodo, Todo, TodoPatch};

// Re-export all public items
pub use todo::*;
pub use status::*;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, or a body that could not be encoded or parsed
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("HTTP error! status: {status}")]
    Status { status: u16, status_text: String },
}

/// The calls the todo client makes against the backend.
///
/// Futures from `gloo-net` are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait TodoApi {
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    async fn create_todo(&self, new_todo: &NewTodo<'_>) -> Result<()>;

    async fn update_todo(&self, id: i64, patch: &TodoPatch<'_>) -> Result<()>;

    async fn delete_todo(&self, id: i64) -> Result<()>;
}

/// `TodoApi` over `fetch`
#[derive(Debug, Clone, Copy)]
pub struct HttpTodoApi {
    base: &'static str,
}

impl HttpTodoApi {
    pub const fn new(base: &'static str) -> Self {
        Self { base }
    }

    fn url(&self, path: &str) -> String {
        api_url(self.base, path)
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        todo::list_todos(&self.url(TODOS_PATH)).await
    }

    async fn create_todo(&self, new_todo: &NewTodo<'_>) -> Result<()> {
        todo::create_todo(&self.url(TODOS_PATH), new_todo).await
    }

    async fn update_todo(&self, id: i64, patch: &TodoPatch<'_>) -> Result<()> {
        todo::update_todo(&self.url(&todo_path(id)), patch).await
    }

    async fn delete_todo(&self, id: i64) -> Result<()> {
        todo::delete_todo(&self.url(&todo_path(id))).await
    }
}

/// Join the configured base and an absolute API path
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn ensure_ok(response: Response) -> Result<Response> {
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response)
    } else {
        log::warn!("[API] {} -> {} {}", response.url(), response.status(), response.status_text());
        Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(ensure_ok(response)?.json().await?)
}
