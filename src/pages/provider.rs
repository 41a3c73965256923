//! Provider dashboard.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Provider landing page. Mounted behind the PROVIDER role guard; shows
/// the provider's profile summary and the bookings made against their
/// listings.
#[component]
pub fn ProviderPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let bookings = LocalResource::new(move || {
        let token = auth.get().token.unwrap_or_default();
        async move { crate::net::api::fetch_my_bookings(&token).await }
    });

    let profile = move || {
        auth.get().user.map(|u| {
            view! {
                <div class="provider-page__profile">
                    <span class="provider-page__name">{format!("{} {}", u.first_name, u.last_name)}</span>
                    <span class="provider-page__email">{u.email}</span>
                    <span class="provider-page__role">{u.role}</span>
                </div>
            }
        })
    };

    view! {
        <div class="provider-page">
            <header class="provider-page__header">
                <h1>"Provider dashboard"</h1>
            </header>

            {profile}

            <section class="provider-page__bookings">
                <h2>"Recent bookings"</h2>
                <Suspense fallback=move || view! { <p>"Loading bookings..."</p> }>
                    {move || {
                        bookings.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="provider-page__empty">"No bookings yet."</p> }.into_any()
                            }
                            Ok(list) => view! {
                                <ul class="booking-list">
                                    {list
                                        .into_iter()
                                        .map(|b| view! {
                                            <li class="booking-list__row">
                                                <span class="booking-list__type">{b.service_type}</span>
                                                <span class="booking-list__status">{b.status}</span>
                                            </li>
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any(),
                            Err(e) => {
                                view! { <p class="provider-page__error">{e.to_string()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
