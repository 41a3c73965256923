//! Accommodation catalog and booking flow.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::service_card::ServiceCard;
use crate::components::verify_email::VerifyEmailDialog;
use crate::net::types::Accommodation;
use crate::state::auth::AuthState;
use crate::state::booking::AccommodationDraft;
use crate::state::guard;
use crate::state::toast::{ToastKind, ToastState};

/// Accommodation listings with a booking dialog. Browsing is public;
/// booking requires a session, so anonymous visitors are sent to login
/// with the return path attached.
#[component]
pub fn AccommodationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let listings = LocalResource::new(|| crate::net::api::fetch_accommodations());
    let selected = RwSignal::new(None::<Accommodation>);

    let on_book = Callback::new(move |listing: Accommodation| {
        if auth.get_untracked().token.is_none() {
            navigate(&guard::login_route_from("/accommodations"), Default::default());
            return;
        }
        selected.set(Some(listing));
    });

    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <h1>"Accommodations"</h1>
            </header>

            <div class="catalog-page__grid">
                <Suspense fallback=move || view! { <p>"Loading accommodations..."</p> }>
                    {move || {
                        listings.get().map(|result| match result {
                            Ok(list) => list
                                .into_iter()
                                .map(|listing| {
                                    let card = listing.clone();
                                    view! {
                                        <ServiceCard
                                            name=card.name
                                            detail=card.location
                                            price=format!("{} RWF / night", card.price_per_night)
                                            on_book=Callback::new(move |()| on_book.run(listing.clone()))
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any(),
                            Err(e) => view! { <p class="catalog-page__error">{e.to_string()}</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </div>

            {move || {
                selected
                    .get()
                    .map(|listing| view! { <AccommodationBookingDialog listing=listing on_close=on_close/> })
            }}
        </div>
    }
}

/// Modal dialog collecting an accommodation booking draft.
#[component]
fn AccommodationBookingDialog(listing: Accommodation, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let check_in = RwSignal::new(String::new());
    let check_out = RwSignal::new(String::new());
    let guests = RwSignal::new("1".to_owned());
    let submitting = RwSignal::new(false);
    let confirmed = RwSignal::new(None::<String>);
    let show_verify = RwSignal::new(false);

    let listing_id = listing.id.clone();
    let max_guests = listing.max_guests;

    let submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        let draft = AccommodationDraft {
            check_in: check_in.get(),
            check_out: check_out.get(),
            guests: guests.get().trim().parse().unwrap_or(0),
        };
        if let Err(message) = draft.validate(max_guests) {
            toasts.update(|t| t.push(ToastKind::Error, message));
            return;
        }

        // Verification gate: intercept before any network call.
        let session = auth.get_untracked();
        if session.needs_verification() {
            show_verify.set(true);
            return;
        }
        let Some(token) = session.token else {
            return;
        };
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let request = draft.to_request(&listing_id);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_booking(&token, &request).await {
                    Ok(booking) => {
                        toasts.update(|t| t.push(ToastKind::Success, "Booking requested"));
                        confirmed.set(Some(booking.id));
                    }
                    Err(e) => toasts.update(|t| t.push(ToastKind::Error, e.to_string())),
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&token, &listing_id);
        }
    });

    let verify_email = move || {
        auth.get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                {move || match confirmed.get() {
                    Some(booking_id) => view! {
                        <div class="dialog__confirmation">
                            <h2>"Booking requested"</h2>
                            <p>"Reference " <code>{booking_id}</code></p>
                            <div class="dialog__actions">
                                <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                                    "Done"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <h2>{format!("Book {}", listing.name)}</h2>
                        <label class="dialog__label">
                            "Check-in"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || check_in.get()
                                on:input=move |ev| check_in.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Check-out"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || check_out.get()
                                on:input=move |ev| check_out.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            {format!("Guests (max {max_guests})")}
                            <input
                                class="dialog__input"
                                type="number"
                                min="1"
                                max=max_guests.to_string()
                                prop:value=move || guests.get()
                                on:input=move |ev| guests.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| submit.run(())
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Booking..." } else { "Book now" }}
                            </button>
                        </div>
                    }
                    .into_any(),
                }}

                <Show when=move || show_verify.get()>
                    <VerifyEmailDialog
                        email=verify_email()
                        on_close=Callback::new(move |()| show_verify.set(false))
                    />
                </Show>
            </div>
        </div>
    }
}
