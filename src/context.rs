//! Application Context
//!
//! Shared page state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::client::{TodoClient, TodoView};
use crate::commands::HttpTodoApi;
use crate::config::ClientConfig;
use crate::models::Todo;
use crate::status::StatusKind;
use crate::store::{self, TodoState, TodoStateStoreFields, TodoStore};

/// Page state handed to every component
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: ClientConfig,
    pub store: TodoStore,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            store: Store::new(TodoState::default()),
        }
    }

    /// Client wired to the HTTP backend and this page
    pub fn client(&self) -> TodoClient<HttpTodoApi, AppContext> {
        TodoClient::new(self.api(), *self)
    }

    pub fn api(&self) -> HttpTodoApi {
        HttpTodoApi::new(self.config.api_base)
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

impl TodoView for AppContext {
    fn show_todos(&self, todos: Vec<Todo>) {
        store::store_set_todos(&self.store, todos);
    }

    fn remove_todo(&self, id: i64) {
        store::store_remove_todo(&self.store, id);
    }

    fn clear_title_input(&self) {
        self.store.title_input().set(String::new());
    }

    fn confirm_delete(&self, id: i64) -> bool {
        let prompt = format!("Are you sure you want to delete task #{}?", id);
        window().confirm_with_message(&prompt).unwrap_or(false)
    }

    fn display_status(&self, message: &str, kind: StatusKind) {
        let ticket = store::store_show_status(&self.store, message, kind);
        let store = self.store;
        let delay = self.config.status_clear_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store::store_expire_status(&store, ticket);
        });
    }
}
