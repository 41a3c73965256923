//! User dashboard listing the session user's bookings.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Booking;
use crate::state::auth::AuthState;

/// Dashboard page — greets the user, lists their bookings, and offers
/// logout. Mounted behind the unconditional auth guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let bookings = LocalResource::new(move || {
        let token = auth.get().token.unwrap_or_default();
        async move { crate::net::api::fetch_my_bookings(&token).await }
    });

    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome back, {}", u.first_name))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        crate::util::token_store::clear();
        auth.update(AuthState::logout);
        navigate("/login", Default::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>

            <section class="dashboard-page__bookings">
                <h2>"My bookings"</h2>
                <Suspense fallback=move || view! { <p>"Loading bookings..."</p> }>
                    {move || {
                        bookings.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="dashboard-page__empty">"No bookings yet."</p> }.into_any()
                            }
                            Ok(list) => view! {
                                <ul class="booking-list">
                                    {list.into_iter().map(booking_row).collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any(),
                            Err(e) => {
                                view! { <p class="dashboard-page__error">{e.to_string()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

fn booking_row(booking: Booking) -> impl IntoView {
    let status_class = match booking.status.as_str() {
        "CONFIRMED" => "booking-list__status booking-list__status--confirmed",
        "CANCELLED" => "booking-list__status booking-list__status--cancelled",
        _ => "booking-list__status booking-list__status--pending",
    };
    let amount = booking
        .total_amount
        .map(|rwf| format!("{rwf} RWF"))
        .unwrap_or_default();

    view! {
        <li class="booking-list__row">
            <span class="booking-list__type">{booking.service_type}</span>
            <span class=status_class>{booking.status}</span>
            <span class="booking-list__amount">{amount}</span>
        </li>
    }
}
