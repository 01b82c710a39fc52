//! Todo Client
//!
//! The request → await → update-page cycle behind every user action.
//! Network access goes through a [`TodoApi`], page changes through a
//! [`TodoView`], so handlers never reach for the DOM directly.

use crate::commands::{ApiError, TodoApi};
use crate::models::{NewTodo, TodoPatch, Todo};
use crate::status::StatusKind;

pub const MSG_LOADED: &str = "Tasks loaded.";
pub const MSG_LOAD_FAILED: &str = "Failed to load tasks.";
pub const MSG_ADDED: &str = "Task added!";
pub const MSG_ADD_FAILED: &str = "Failed to add task.";
pub const MSG_TOGGLED: &str = "Task status updated!";
pub const MSG_TOGGLE_FAILED: &str = "Failed to update task status.";
pub const MSG_DELETED: &str = "Task deleted!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete task.";
pub const MSG_RENAMED: &str = "Task renamed!";
pub const MSG_RENAME_FAILED: &str = "Failed to rename task.";
pub const MSG_EMPTY_TITLE: &str = "Please enter a task title.";

/// What the client may change on the page
pub trait TodoView {
    /// Replace the rendered list with `todos`
    fn show_todos(&self, todos: Vec<Todo>);

    /// Drop a single row, leaving the rest untouched
    fn remove_todo(&self, id: i64);

    fn clear_title_input(&self);

    /// Ask the user before deleting; `false` cancels
    fn confirm_delete(&self, id: i64) -> bool;

    /// Show a transient, self-clearing message
    fn display_status(&self, message: &str, kind: StatusKind);
}

#[derive(Debug, Clone, Copy)]
pub struct TodoClient<A, V> {
    api: A,
    view: V,
}

impl<A: TodoApi, V: TodoView> TodoClient<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    pub async fn fetch_todos(&self) {
        match self.api.list_todos().await {
            Ok(todos) => {
                log::info!("[TODO] Loaded {} todos", todos.len());
                self.view.show_todos(todos);
                self.display_status(MSG_LOADED, StatusKind::Success);
            }
            Err(e) => self.fail("loading todos", &e, MSG_LOAD_FAILED),
        }
    }

    /// Form submit: trims the title and refuses to send an empty one
    pub async fn submit_title(&self, raw: &str) {
        let title = raw.trim();
        if title.is_empty() {
            self.display_status(MSG_EMPTY_TITLE, StatusKind::Error);
            return;
        }
        self.add_todo(title).await;
    }

    pub async fn add_todo(&self, title: &str) {
        match self.api.create_todo(&NewTodo { title }).await {
            Ok(()) => {
                log::info!("[TODO] Added {:?}", title);
                self.display_status(MSG_ADDED, StatusKind::Success);
                self.view.clear_title_input();
                self.fetch_todos().await;
            }
            Err(e) => self.fail("adding a todo", &e, MSG_ADD_FAILED),
        }
    }

    pub async fn toggle_todo_completed(&self, id: i64, is_completed: bool) {
        match self.api.update_todo(id, &TodoPatch::completed(!is_completed)).await {
            Ok(()) => {
                self.display_status(MSG_TOGGLED, StatusKind::Success);
                self.fetch_todos().await;
            }
            Err(e) => self.fail("toggling a todo", &e, MSG_TOGGLE_FAILED),
        }
    }

    /// Deletes after confirmation and drops the row in place; no re-fetch
    pub async fn delete_todo(&self, id: i64) {
        if !self.view.confirm_delete(id) {
            return;
        }
        match self.api.delete_todo(id).await {
            Ok(()) => {
                log::info!("[TODO] Deleted #{}", id);
                self.view.remove_todo(id);
                self.display_status(MSG_DELETED, StatusKind::Success);
            }
            Err(e) => self.fail("deleting a todo", &e, MSG_DELETE_FAILED),
        }
    }

    /// Sends the trimmed title; blank or unchanged titles are dropped
    pub async fn rename_todo(&self, id: i64, current: &str, title: &str) {
        let title = title.trim();
        if title.is_empty() || title == current {
            return;
        }
        match self.api.update_todo(id, &TodoPatch::title(title)).await {
            Ok(()) => {
                self.display_status(MSG_RENAMED, StatusKind::Success);
                self.fetch_todos().await;
            }
            Err(e) => self.fail("renaming a todo", &e, MSG_RENAME_FAILED),
        }
    }

    pub fn display_status(&self, message: &str, kind: StatusKind) {
        self.view.display_status(message, kind);
    }

    fn fail(&self, action: &str, error: &ApiError, message: &str) {
        log::error!("[TODO] Error while {}: {}", action, error);
        self.display_status(message, StatusKind::Error);
    }
}
