//! Login page with email/password form and return-path handling.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};

/// Login page. On success the session store is populated, the token is
/// persisted, and the user is sent to the propagated return path (or their
/// role's landing route), replacing history.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        if pending.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            toasts.update(|t| t.push(ToastKind::Error, "Enter your email and password"));
            return;
        }
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(data) => {
                        crate::util::token_store::save(&data.token);
                        let role = data.user.role();
                        auth.update(|a| a.login(data.token, data.user));

                        let target = query
                            .get_untracked()
                            .get("from")
                            .unwrap_or_else(|| role.landing_route().to_owned());
                        navigate(
                            &target,
                            leptos_router::NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(e) => {
                        toasts.update(|t| t.push(ToastKind::Error, e.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&email_value, &password_value, &query, &auth);
        }
    });

    view! {
        <div class="login-page">
            <h1>"NDAREHE"</h1>
            <p>"Accommodation, transportation and tours across Rwanda"</p>

            <form
                class="login-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary login-page__submit" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
