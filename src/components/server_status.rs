//! Server Status Badge
//!
//! Footer line probing the backend's `/status` endpoint once on load.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::ServerStatus;

#[derive(Clone, Debug, PartialEq)]
enum Probe {
    Pending,
    Up(ServerStatus),
    Down,
}

#[component]
pub fn ServerStatusBadge() -> impl IntoView {
    let ctx = use_app_context();
    let (probe, set_probe) = signal(Probe::Pending);

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.server_status().await {
                Ok(status) => set_probe.set(Probe::Up(status)),
                Err(e) => {
                    log::warn!("[APP] Status probe failed: {}", e);
                    set_probe.set(Probe::Down);
                }
            }
        });
    });

    view! {
        <footer class="server-status">
            {move || match probe.get() {
                Probe::Pending => "Checking server...".to_string(),
                Probe::Up(s) => format!("Database: {} ({})", s.database_connection, s.current_db_time),
                Probe::Down => "Server unreachable".to_string(),
            }}
        </footer>
    }
}
