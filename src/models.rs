//! Frontend Models
//!
//! Data structures matching the REST API's JSON records.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/todos`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
}

/// Body of `PUT /api/todos/{id}`. Omitted fields keep their server-side value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl<'a> TodoPatch<'a> {
    pub fn completed(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Default::default()
        }
    }

    pub fn title(title: &'a str) -> Self {
        Self {
            title: Some(title),
            ..Default::default()
        }
    }
}

/// Response of `GET /status`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerStatus {
    pub database_connection: String,
    pub current_db_time: String,
}
