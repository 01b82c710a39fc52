//! Todo Row Component
//!
//! A single list entry: title, completion toggle and delete action.
//! Double-clicking the title switches it to an inline editor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Todo;

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.is_completed;
    let created = todo.created_at.clone().unwrap_or_default();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(todo.title.clone());
    let original = StoredValue::new(todo.title);
    let editor = NodeRef::<leptos::html::Input>::new();

    // Take keyboard focus as soon as the editor is mounted
    Effect::new(move |_| {
        if let Some(input) = editor.get() {
            let _ = input.focus();
        }
    });

    let toggle = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            client.toggle_todo_completed(id, completed).await;
        });
    };

    let delete = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            client.delete_todo(id).await;
        });
    };

    let save_title = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let current = original.get_value();
        let next = draft.get_untracked();
        // A successful rename re-renders the row; anything else reopens on the current title
        set_draft.set(current.clone());
        let client = ctx.client();
        spawn_local(async move {
            client.rename_todo(id, &current, &next).await;
        });
    };

    let cancel_edit = move || {
        set_draft.set(original.get_value());
        set_editing.set(false);
    };

    view! {
        <li data-id=id.to_string() class:completed=completed title=created>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="todo-title" on:dblclick=move |_| set_editing.set(true)>
                        {original.get_value()}
                    </span>
                }
            >
                <input
                    node_ref=editor
                    type="text"
                    class="todo-title-edit"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:blur=move |_| save_title()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                save_title();
                            }
                            "Escape" => cancel_edit(),
                            _ => {}
                        }
                    }
                />
            </Show>
            <div class="actions">
                <button
                    class="complete-btn"
                    data-completed=completed.to_string()
                    title=if completed { "Mark as not done" } else { "Mark as done" }
                    on:click=toggle
                >
                    {if completed { "✅" } else { "❓" }}
                </button>
                <button class="delete-btn" title="Delete" on:click=delete>"🗑️"</button>
            </div>
        </li>
    }
}
