//! Status Message Component
//!
//! Outcome of the last action. Clearing is scheduled by `AppContext`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::TodoStateStoreFields;

#[component]
pub fn StatusMessage() -> impl IntoView {
    let status = use_app_context().store.status();

    view! {
        <div id="statusMessage" class=move || status.with(|s| s.class()) role="status">
            {move || status.with(|s| s.text())}
        </div>
    }
}
