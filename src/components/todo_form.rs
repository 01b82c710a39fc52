//! Todo Form Component
//!
//! Title input plus submit button for creating todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::TodoStateStoreFields;

/// Form for creating new todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let title_input = ctx.store.title_input();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = title_input.get_untracked();
        let client = ctx.client();
        spawn_local(async move {
            client.submit_title(&raw).await;
        });
    };

    view! {
        <form id="todoForm" class="todo-form" on:submit=submit>
            <input
                id="todoTitle"
                type="text"
                placeholder="What needs to be done?"
                autocomplete="off"
                prop:value=move || title_input.get()
                on:input=move |ev| title_input.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
