//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;
use crate::status::{StatusKind, StatusLine};

/// Everything the page renders, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Latest snapshot from the server, in server order
    pub todos: Vec<Todo>,
    /// Contents of the new-todo input
    pub title_input: String,
    pub status: StatusLine,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list
pub fn store_set_todos(store: &TodoStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &TodoStore, todo_id: i64) {
    store.todos().write().retain(|todo| todo.id != todo_id);
}

/// Show a status message; returns the ticket that expires it
pub fn store_show_status(store: &TodoStore, message: &str, kind: StatusKind) -> u64 {
    store.status().write().show(message, kind)
}

/// Clear the status message shown under `ticket`, unless it was replaced
pub fn store_expire_status(store: &TodoStore, ticket: u64) {
    if store.status().write().expire(ticket) {
        log::debug!("[STATUS] Cleared message #{}", ticket);
    }
}
