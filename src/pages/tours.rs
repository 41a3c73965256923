//! Tour catalog and booking flow.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::service_card::ServiceCard;
use crate::components::verify_email::VerifyEmailDialog;
use crate::net::types::Tour;
use crate::state::auth::AuthState;
use crate::state::booking::TourDraft;
use crate::state::guard;
use crate::state::toast::{ToastKind, ToastState};

/// Tour listings with a booking dialog.
#[component]
pub fn ToursPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let listings = LocalResource::new(|| crate::net::api::fetch_tours());
    let selected = RwSignal::new(None::<Tour>);

    let on_book = Callback::new(move |tour: Tour| {
        if auth.get_untracked().token.is_none() {
            navigate(&guard::login_route_from("/tours"), Default::default());
            return;
        }
        selected.set(Some(tour));
    });

    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <h1>"Tours"</h1>
            </header>

            <div class="catalog-page__grid">
                <Suspense fallback=move || view! { <p>"Loading tours..."</p> }>
                    {move || {
                        listings.get().map(|result| match result {
                            Ok(list) => list
                                .into_iter()
                                .map(|tour| {
                                    let card = tour.clone();
                                    view! {
                                        <ServiceCard
                                            name=card.name
                                            detail=card.location
                                            price=format!("{} RWF / person", card.price_per_person)
                                            on_book=Callback::new(move |()| on_book.run(tour.clone()))
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
                    .map(|tour| view! { <TourBookingDialog tour=tour on_close=on_close/> })
            }}
        </div>
    }
}

/// Modal dialog collecting a tour booking draft.
#[component]
fn TourBookingDialog(tour: Tour, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let date = RwSignal::new(String::new());
    let participants = RwSignal::new("1".to_owned());
    let submitting = RwSignal::new(false);
    let confirmed = RwSignal::new(None::<String>);
    let show_verify = RwSignal::new(false);

    let tour_id = tour.id.clone();

    let submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        let draft = TourDraft {
            date: date.get(),
            participants: participants.get().trim().parse().unwrap_or(0),
        };
        if let Err(message) = draft.validate() {
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
            let request = draft.to_request(&tour_id);
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
            let _ = (&token, &tour_id);
        }
    });

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
                        <h2>{format!("Book {}", tour.name)}</h2>
                        <label class="dialog__label">
                            "Date"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Participants"
                            <input
                                class="dialog__input"
                                type="number"
                                min="1"
                                prop:value=move || participants.get()
                                on:input=move |ev| participants.set(event_target_value(&ev))
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
                        email=auth.get().user.map(|u| u.email).unwrap_or_default()
                        on_close=Callback::new(move |()| show_verify.set(false))
                    />
                </Show>
            </div>
        </div>
    }
}
