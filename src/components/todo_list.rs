//! Todo List Component
//!
//! Renders one row per todo in the latest server snapshot.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let todos = ctx.store.todos();

    view! {
        <ul id="todoList" class="todo-list">
            <For
                each=move || todos.get()
                // Every rendered field is part of the key so edits re-render the row
                key=|todo| (todo.id, todo.title.clone(), todo.is_completed)
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
