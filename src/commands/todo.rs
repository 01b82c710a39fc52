//! Todo Commands
//!
//! Requests against the `/api/todos` collection.

use gloo_net::http::Request;
use serde::de::IgnoredAny;

use super::{ensure_ok, into_json, Result};
use crate::models::{NewTodo, Todo, TodoPatch};

pub const TODOS_PATH: &str = "/api/todos";

pub fn todo_path(id: i64) -> String {
    format!("{}/{}", TODOS_PATH, id)
}

pub(super) async fn list_todos(url: &str) -> Result<Vec<Todo>> {
    let response = Request::get(url).send().await?;
    into_json(response).await
}

// The POST and PUT bodies are not used, but they still have to be JSON.

pub(super) async fn create_todo(url: &str, new_todo: &NewTodo<'_>) -> Result<()> {
    let response = Request::post(url).json(new_todo)?.send().await?;
    into_json::<IgnoredAny>(response).await?;
    Ok(())
}

pub(super) async fn update_todo(url: &str, patch: &TodoPatch<'_>) -> Result<()> {
    let response = Request::put(url).json(patch)?.send().await?;
    into_json::<IgnoredAny>(response).await?;
    Ok(())
}

/// Expects `204 No Content`; the body is never read.
pub(super) async fn delete_todo(url: &str) -> Result<()> {
    let response = Request::delete(url).send().await?;
    ensure_ok(response)?;
    Ok(())
}
