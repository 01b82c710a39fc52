//! Todo List App
//!
//! Root component: owns the page state and loads the list on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ServerStatusBadge, StatusMessage, TodoForm, TodoList};
use crate::config::ClientConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    app_with_config(ClientConfig::from_env())
}

/// `App` with an explicit configuration
pub fn app_with_config(config: ClientConfig) -> impl IntoView {
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            client.fetch_todos().await;
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Todo List"</h1>
            <TodoForm />
            <StatusMessage />
            <TodoList />
            <ServerStatusBadge />
        </main>
    }
}
