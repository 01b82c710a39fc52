#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use pretty_assertions::assert_eq;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

use todo_list_ui::app::app_with_config;
use todo_list_ui::client::TodoView;
use todo_list_ui::components::{StatusMessage, TodoList};
use todo_list_ui::config::ClientConfig;
use todo_list_ui::context::AppContext;
use todo_list_ui::models::Todo;
use todo_list_ui::status::StatusKind;
use todo_list_ui::store::TodoStateStoreFields;

wasm_bindgen_test_configure!(run_in_browser);

// Fixtures

fn container() -> HtmlElement {
    let root = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

fn todo(id: i64, title: &str, is_completed: bool) -> Todo {
    Todo { id, title: title.to_string(), is_completed, created_at: None }
}

fn find(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{} not found", selector))
}

fn rows(root: &HtmlElement) -> u32 {
    root.query_selector_all("#todoList li").unwrap().length()
}

/// Let the reactive system flush pending DOM updates
async fn settle(ms: u32) {
    TimeoutFuture::new(ms).await;
}

fn double_click(target: &Element) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let ev = MouseEvent::new_with_mouse_event_init_dict("dblclick", &init).unwrap();
    target.dispatch_event(&ev).unwrap();
}

fn type_into(input: &HtmlInputElement, text: &str) {
    input.set_value(text);
    let init = EventInit::new();
    init.set_bubbles(true);
    let ev = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&ev).unwrap();
}

fn press(target: &Element, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&ev).unwrap();
}

fn click(root: &HtmlElement, selector: &str) {
    find(root, selector).unchecked_into::<HtmlElement>().click();
}

fn editor(root: &HtmlElement) -> HtmlInputElement {
    find(root, ".todo-title-edit").unchecked_into::<HtmlInputElement>()
}

/// Replace `window.confirm` with a fixed answer
fn answer_confirm(answer: bool) {
    let stub = Closure::<dyn Fn() -> bool>::new(move || answer);
    js_sys::Reflect::set(&window(), &JsValue::from_str("confirm"), stub.as_ref()).unwrap();
    stub.forget();
}

fn status_text(ctx: &AppContext) -> String {
    ctx.store.status().get_untracked().text()
}

/// A single-row list; the test server has no API, so any request ends in an error status
async fn mount_single_row(root: &HtmlElement) -> AppContext {
    let ctx = AppContext::new(ClientConfig::default());
    let handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <TodoList /> }
    });
    handle.forget();
    ctx.show_todos(vec![todo(3, "Call mom", false)]);
    settle(20).await;
    ctx
}

// Tests

#[wasm_bindgen_test]
async fn renders_one_row_per_todo() {
    let root = container();
    let ctx = AppContext::new(ClientConfig::default());
    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <TodoList /> }
    });

    ctx.show_todos(vec![todo(5, "Water plants", false), todo(7, "Pay rent", true), todo(9, "Call mom", false)]);
    settle(20).await;

    assert_eq!(rows(&root), 3);
    let done = find(&root, "li[data-id=\"7\"]");
    assert!(done.class_list().contains("completed"));
    assert_eq!(find(&root, "li[data-id=\"7\"] .todo-title").text_content().unwrap().trim(), "Pay rent");
    assert_eq!(
        find(&root, "li[data-id=\"7\"] .complete-btn").get_attribute("data-completed").as_deref(),
        Some("true")
    );
    assert!(!find(&root, "li[data-id=\"5\"]").class_list().contains("completed"));
    assert_eq!(root.query_selector_all("#todoList ~ *").unwrap().length(), 0);
}

#[wasm_bindgen_test]
async fn removing_a_todo_drops_only_its_row() {
    let root = container();
    let ctx = AppContext::new(ClientConfig::default());
    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <TodoList /> }
    });

    ctx.show_todos(vec![todo(5, "Water plants", false), todo(7, "Pay rent", true), todo(9, "Call mom", false)]);
    settle(20).await;
    ctx.remove_todo(7);
    settle(20).await;

    assert_eq!(rows(&root), 2);
    assert!(root.query_selector("li[data-id=\"7\"]").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn status_message_clears_after_three_seconds() {
    let root = container();
    let ctx = AppContext::new(ClientConfig::default());
    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <StatusMessage /> }
    });

    ctx.display_status("Task added!", StatusKind::Success);
    settle(20).await;
    let status = find(&root, "#statusMessage");
    assert_eq!(status.text_content().unwrap(), "Task added!");
    assert_eq!(status.class_name(), "status-message success");

    settle(2500).await;
    assert_eq!(status.text_content().unwrap(), "Task added!");

    settle(700).await;
    assert_eq!(status.text_content().unwrap(), "");
    assert_eq!(status.class_name(), "status-message");
}

#[wasm_bindgen_test]
async fn newer_status_outlives_older_timer() {
    let root = container();
    let ctx = AppContext::new(ClientConfig { status_clear_ms: 200, ..ClientConfig::default() });
    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <StatusMessage /> }
    });

    ctx.display_status("Tasks loaded.", StatusKind::Success);
    settle(120).await;
    ctx.display_status("Failed to add task.", StatusKind::Error);
    settle(120).await;

    let status = find(&root, "#statusMessage");
    assert_eq!(status.text_content().unwrap(), "Failed to add task.");
    assert_eq!(status.class_name(), "status-message error");

    settle(200).await;
    assert_eq!(status.text_content().unwrap(), "");
}

#[wasm_bindgen_test]
async fn page_exposes_dom_contract_and_reports_missing_backend() {
    let root = container();
    let _handle = mount_to(root.clone(), || app_with_config(ClientConfig::default()));
    settle(20).await;

    for id in ["todoForm", "todoTitle", "todoList", "statusMessage"] {
        find(&root, &format!("#{}", id));
    }

    // The test server has no /api/todos, so the initial load fails cleanly
    settle(1000).await;
    let status = find(&root, "#statusMessage");
    assert_eq!(status.text_content().unwrap(), "Failed to load tasks.");
    assert_eq!(status.class_name(), "status-message error");
    assert_eq!(rows(&root), 0);

    // Nor /status
    assert_eq!(find(&root, "footer.server-status").text_content().unwrap(), "Server unreachable");
}

#[wasm_bindgen_test]
async fn escape_closes_focused_editor_without_a_request() {
    let root = container();
    let ctx = mount_single_row(&root).await;

    double_click(&find(&root, ".todo-title"));
    settle(20).await;
    let input = editor(&root);
    assert_eq!(input.value(), "Call mom");
    let focused = document().active_element().unwrap();
    assert!(focused.class_list().contains("todo-title-edit"));

    type_into(&input, "Call dad");
    press(&input, "Escape");
    settle(300).await;

    assert!(root.query_selector(".todo-title-edit").unwrap().is_none());
    assert_eq!(find(&root, ".todo-title").text_content().unwrap().trim(), "Call mom");
    assert_eq!(status_text(&ctx), "");
}

#[wasm_bindgen_test]
async fn blank_rename_is_dropped_and_editor_reopens_on_current_title() {
    let root = container();
    let ctx = mount_single_row(&root).await;

    double_click(&find(&root, ".todo-title"));
    settle(20).await;
    let input = editor(&root);
    type_into(&input, "   ");
    press(&input, "Enter");
    settle(300).await;

    assert_eq!(find(&root, ".todo-title").text_content().unwrap().trim(), "Call mom");
    assert_eq!(status_text(&ctx), "");

    double_click(&find(&root, ".todo-title"));
    settle(20).await;
    assert_eq!(editor(&root).value(), "Call mom");
}

#[wasm_bindgen_test]
async fn enter_commits_rename_through_the_client() {
    let root = container();
    let ctx = mount_single_row(&root).await;

    double_click(&find(&root, ".todo-title"));
    settle(20).await;
    let input = editor(&root);
    type_into(&input, "Call dad");
    press(&input, "Enter");
    settle(1000).await;

    assert_eq!(status_text(&ctx), "Failed to rename task.");
}

#[wasm_bindgen_test]
async fn complete_button_sends_toggle() {
    let root = container();
    let ctx = mount_single_row(&root).await;

    click(&root, "li[data-id=\"3\"] .complete-btn");
    settle(1000).await;

    assert_eq!(status_text(&ctx), "Failed to update task status.");
}

#[wasm_bindgen_test]
async fn delete_button_asks_before_sending() {
    let root = container();
    let ctx = mount_single_row(&root).await;

    answer_confirm(false);
    click(&root, "li[data-id=\"3\"] .delete-btn");
    settle(300).await;
    assert_eq!(status_text(&ctx), "");
    assert_eq!(rows(&root), 1);

    answer_confirm(true);
    click(&root, "li[data-id=\"3\"] .delete-btn");
    settle(1000).await;
    assert_eq!(status_text(&ctx), "Failed to delete task.");
    assert_eq!(rows(&root), 1);
}
