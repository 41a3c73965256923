//! Toast host rendering the shared notification stack.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Fixed-position stack of dismissable notifications.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                            ToastKind::Info => "toast toast--info",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div class=class role="status">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(&id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
