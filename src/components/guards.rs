//! Route guard components.
//!
//! DESIGN
//! ======
//! Both guards are thin shells over the pure state machine in
//! [`crate::state::guard`]: the component observes the session, lets the
//! machine decide, and turns `NoSession`/`Denied` decisions into a single
//! history-replacing navigation. The login redirect always carries the
//! originally requested path so the login page can send the user back.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingIndicator;
use crate::state::auth::{AuthState, Role};
use crate::state::guard::{self, GuardState};

/// Gate a subtree behind "a session exists". Any authenticated role is
/// admitted.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(&[], None, children)
}

/// Gate a subtree behind "a session exists and the role is admitted".
/// Denied users are sent to their own dashboard unless `redirect` says
/// otherwise.
#[component]
pub fn RequireRole(
    allowed: &'static [Role],
    #[prop(optional)] redirect: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    guarded(allowed, redirect, children)
}

fn guarded(
    allowed: &'static [Role],
    redirect: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| guard::evaluate(&auth.get(), allowed, redirect));

    // Redirects replace history so repeated renders do not grow the stack.
    Effect::new(move || match decision.get() {
        GuardState::NoSession => {
            let target = guard::login_route_from(&location.pathname.get_untracked());
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        GuardState::Denied { redirect } => {
            navigate(
                &redirect,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        GuardState::LoadingProfile | GuardState::Authorized => {}
    });

    move || match decision.get() {
        GuardState::Authorized => children().into_any(),
        GuardState::LoadingProfile => view! { <LoadingIndicator/> }.into_any(),
        GuardState::NoSession | GuardState::Denied { .. } => ().into_any(),
    }
}
