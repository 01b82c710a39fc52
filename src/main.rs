//! Todo List Frontend Entry Point

use leptos::prelude::*;
use todo_list_ui::{config::ClientConfig, logging, App};

fn main() {
    console_error_panic_hook::set_once();
    logging::init(&ClientConfig::from_env());
    mount_to_body(App);
}
