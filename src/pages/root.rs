//! Root-path redirector.
//!
//! Authenticated visitors landing on `/` are sent to their role's
//! dashboard; anonymous visitors see nothing and stay. Navigation fires at
//! most once per resolved session and replaces history so back-navigation
//! does not return to `/`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingIndicator;
use crate::state::auth::AuthState;
use crate::state::guard::{self, RootDecision};

/// Page mounted on `/`.
#[component]
pub fn RootRedirectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let navigated = StoredValue::new(false);

    Effect::new(move || {
        if let RootDecision::Navigate(route) = guard::evaluate_root(&auth.get()) {
            if !navigated.get_value() {
                navigated.set_value(true);
                navigate(
                    route,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    move || match guard::evaluate_root(&auth.get()) {
        RootDecision::Loading => view! { <LoadingIndicator/> }.into_any(),
        RootDecision::Idle | RootDecision::Navigate(_) => ().into_any(),
    }
}
