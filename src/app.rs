//! Root application component with routing, context providers, and
//! session restore.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{RequireAuth, RequireRole};
use crate::components::toast::ToastHost;
use crate::pages::{
    accommodations::AccommodationsPage, admin::AdminPage, dashboard::DashboardPage,
    login::LoginPage, provider::ProviderPage, root::RootRedirectPage, tours::ToursPage,
    transportation::TransportationPage,
};
use crate::state::auth::{AuthState, Role};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, restores a persisted session,
/// and sets up client-side routing. The root path, the dashboards, and the
/// role-guarded areas follow the landing-route mapping in
/// [`crate::state::auth::Role`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    restore_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/ndarehe.css"/>
        <Title text="NDAREHE"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirectPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RequireRole allowed=ADMIN_ONLY><AdminPage/></RequireRole> }
                />
                <Route
                    path=StaticSegment("provider-dashboard")
                    view=|| view! { <RequireRole allowed=PROVIDER_ONLY><ProviderPage/></RequireRole> }
                />
                <Route path=StaticSegment("accommodations") view=AccommodationsPage/>
                <Route path=StaticSegment("transportation") view=TransportationPage/>
                <Route path=StaticSegment("tours") view=ToursPage/>
            </Routes>
        </Router>
    }
}

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const PROVIDER_ONLY: &[Role] = &[Role::Provider];

/// Rehydrate a persisted session: hold the token immediately (guards show
/// their loading state), then exchange it for a profile. A stale token
/// clears the session and the stored value.
fn restore_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = crate::util::token_store::read() else {
            return;
        };
        auth.update(|a| a.begin_restore(token.clone()));

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_profile(&token).await {
                Ok(user) => auth.update(|a| a.set_user(user)),
                Err(e) => {
                    leptos::logging::warn!("session restore failed: {e}");
                    crate::util::token_store::clear();
                    auth.update(AuthState::logout);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
