//! Email-verification reminder dialog.
//!
//! Booking flows intercept submission for unverified users and show this
//! dialog instead of calling the booking API. The single component backs
//! every booking page, so the gate lives in one place.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Modal prompting the user to verify their email, with a resend action.
#[component]
pub fn VerifyEmailDialog(email: String, on_close: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let sending = RwSignal::new(false);

    let resend_email = email.clone();
    let resend = move |_| {
        if sending.get() {
            return;
        }
        sending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let email = resend_email.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::resend_verification(&email).await {
                    Ok(()) => toasts.update(|t| {
                        t.push(ToastKind::Success, format!("Verification email sent to {email}"));
                    }),
                    Err(e) => toasts.update(|t| t.push(ToastKind::Error, e.to_string())),
                }
                sending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &resend_email;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Verify your email"</h2>
                <p class="dialog__text">
                    "You need to verify " <strong>{email}</strong>
                    " before making a booking. Check your inbox for the verification link."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button class="btn btn--primary" on:click=resend disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Resend email" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
