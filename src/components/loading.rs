//! Loading indicator shown while a session profile or listing is in flight.

use leptos::prelude::*;

/// Centered spinner with a label.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator">
            <span class="loading-indicator__spinner" aria-hidden="true"></span>
            <span class="loading-indicator__label">"Loading..."</span>
        </div>
    }
}
