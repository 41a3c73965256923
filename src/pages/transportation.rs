//! Transportation catalog and the two-step booking + payment flow.
//!
//! FLOW
//! ====
//! Booking creation and payment creation are two independent API calls
//! with no compensating action between them (a backend-contract gap). A
//! failed payment therefore keeps the dialog on the payment step and tells
//! the user the booking exists but is unpaid; the form stays editable for
//! manual resubmission.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::service_card::ServiceCard;
use crate::components::verify_email::VerifyEmailDialog;
use crate::net::types::{CreatePaymentRequest, Vehicle};
use crate::state::auth::AuthState;
use crate::state::booking::{FlowStage, PaymentDraft, RateSelection, TransportationDraft};
use crate::state::guard;
use crate::state::toast::{ToastKind, ToastState};

/// Vehicle listings with the booking/payment dialog.
#[component]
pub fn TransportationPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let listings = LocalResource::new(|| crate::net::api::fetch_transportation());
    let selected = RwSignal::new(None::<Vehicle>);

    let on_book = Callback::new(move |vehicle: Vehicle| {
        if auth.get_untracked().token.is_none() {
            navigate(&guard::login_route_from("/transportation"), Default::default());
            return;
        }
        selected.set(Some(vehicle));
    });

    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <h1>"Transportation"</h1>
            </header>

            <div class="catalog-page__grid">
                <Suspense fallback=move || view! { <p>"Loading vehicles..."</p> }>
                    {move || {
                        listings.get().map(|result| match result {
                            Ok(list) => list
                                .into_iter()
                                .map(|vehicle| {
                                    let card = vehicle.clone();
                                    view! {
                                        <ServiceCard
                                            name=card.name
                                            detail=format!("{} \u{b7} seats {}", card.vehicle_type, card.capacity)
                                            price=format!("{} RWF / trip", card.price_per_trip)
                                            on_book=Callback::new(move |()| on_book.run(vehicle.clone()))
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
                    .map(|vehicle| view! { <TransportationBookingDialog vehicle=vehicle on_close=on_close/> })
            }}
        </div>
    }
}

/// Modal dialog driving the details → payment → confirmed flow.
#[component]
fn TransportationBookingDialog(vehicle: Vehicle, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let stage = RwSignal::new(FlowStage::Details);
    let submitting = RwSignal::new(false);
    let show_verify = RwSignal::new(false);

    // Details step.
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let pickup = RwSignal::new(String::new());
    let dropoff = RwSignal::new(String::new());
    let passengers = RwSignal::new("1".to_owned());
    let hourly = RwSignal::new(false);
    let hours = RwSignal::new("1".to_owned());

    // Payment step.
    let card_payment = RwSignal::new(true);
    let card_holder = RwSignal::new(String::new());
    let card_number = RwSignal::new(String::new());
    let card_expiry = RwSignal::new(String::new());
    let card_cvc = RwSignal::new(String::new());
    let momo_phone = RwSignal::new(String::new());
    let momo_name = RwSignal::new(String::new());

    let vehicle_id = vehicle.id.clone();
    let capacity = vehicle.capacity;
    let rate_vehicle = vehicle.clone();

    let current_draft = move || TransportationDraft {
        date: date.get(),
        time: time.get(),
        pickup: pickup.get(),
        dropoff: dropoff.get(),
        passengers: passengers.get().trim().parse().unwrap_or(0),
        rate: if hourly.get() {
            RateSelection::PerHour {
                hours: hours.get().trim().parse().unwrap_or(0),
            }
        } else {
            RateSelection::PerTrip
        },
    };

    let submit_details = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        let draft = current_draft();
        if let Err(message) = draft.validate(capacity) {
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
            let amount = draft.amount_due(&rate_vehicle);
            let request = draft.to_request(&vehicle_id);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_booking(&token, &request).await {
                    Ok(booking) => {
                        stage.set(FlowStage::Payment {
                            booking_id: booking.id,
                            amount,
                        });
                    }
                    Err(e) => toasts.update(|t| t.push(ToastKind::Error, e.to_string())),
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&token, &vehicle_id, &rate_vehicle);
        }
    });

    let submit_payment = Callback::new(move |()| {
        let FlowStage::Payment { booking_id, amount } = stage.get() else {
            return;
        };
        if submitting.get() {
            return;
        }

        let payment = if card_payment.get() {
            PaymentDraft::Card {
                holder: card_holder.get(),
                number: card_number.get(),
                expiry: card_expiry.get(),
                cvc: card_cvc.get(),
            }
        } else {
            PaymentDraft::MobileMoney {
                phone: momo_phone.get(),
                account_name: momo_name.get(),
            }
        };
        if let Err(message) = payment.validate() {
            toasts.update(|t| t.push(ToastKind::Error, message));
            return;
        }
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let request = CreatePaymentRequest {
                booking_id: booking_id.clone(),
                amount,
                method: payment.to_request_fields(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_payment(&token, &request).await {
                    Ok(_) => {
                        toasts.update(|t| t.push(ToastKind::Success, "Payment received"));
                        stage.set(FlowStage::Confirmed { booking_id });
                    }
                    Err(e) => {
                        // The booking was already created; keep the flow on
                        // the payment step and say so.
                        toasts.update(|t| {
                            t.push(
                                ToastKind::Error,
                                format!("Payment failed: {e}. Your booking {booking_id} is reserved but unpaid."),
                            );
                        });
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&token, &booking_id, amount, &payment);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                {move || match stage.get() {
                    FlowStage::Details => details_form(
                        &vehicle,
                        date,
                        time,
                        pickup,
                        dropoff,
                        passengers,
                        hourly,
                        hours,
                        submitting,
                        submit_details,
                        on_close,
                    )
                    .into_any(),
                    FlowStage::Payment { amount, .. } => payment_form(
                        amount,
                        card_payment,
                        card_holder,
                        card_number,
                        card_expiry,
                        card_cvc,
                        momo_phone,
                        momo_name,
                        submitting,
                        submit_payment,
                    )
                    .into_any(),
                    FlowStage::Confirmed { booking_id } => view! {
                        <div class="dialog__confirmation">
                            <h2>"Trip booked"</h2>
                            <p>"Reference " <code>{booking_id}</code></p>
                            <div class="dialog__actions">
                                <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                                    "Done"
                                </button>
                            </div>
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

#[allow(clippy::too_many_arguments)]
fn details_form(
    vehicle: &Vehicle,
    date: RwSignal<String>,
    time: RwSignal<String>,
    pickup: RwSignal<String>,
    dropoff: RwSignal<String>,
    passengers: RwSignal<String>,
    hourly: RwSignal<bool>,
    hours: RwSignal<String>,
    submitting: RwSignal<bool>,
    submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let capacity = vehicle.capacity;
    let per_trip = vehicle.price_per_trip;
    let per_hour = vehicle.price_per_hour;

    view! {
        <h2>{format!("Book {}", vehicle.name)}</h2>
        <div class="dialog__row">
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
                "Time"
                <input
                    class="dialog__input"
                    type="time"
                    prop:value=move || time.get()
                    on:input=move |ev| time.set(event_target_value(&ev))
                />
            </label>
        </div>
        <label class="dialog__label">
            "Pickup location"
            <input
                class="dialog__input"
                type="text"
                prop:value=move || pickup.get()
                on:input=move |ev| pickup.set(event_target_value(&ev))
            />
        </label>
        <label class="dialog__label">
            "Dropoff location"
            <input
                class="dialog__input"
                type="text"
                prop:value=move || dropoff.get()
                on:input=move |ev| dropoff.set(event_target_value(&ev))
            />
        </label>
        <label class="dialog__label">
            {format!("Passengers (max {capacity})")}
            <input
                class="dialog__input"
                type="number"
                min="1"
                max=capacity.to_string()
                prop:value=move || passengers.get()
                on:input=move |ev| passengers.set(event_target_value(&ev))
            />
        </label>
        <label class="dialog__label dialog__label--inline">
            <input
                type="checkbox"
                prop:checked=move || hourly.get()
                on:change=move |ev| hourly.set(event_target_checked(&ev))
            />
            {format!("Hourly rate ({per_hour} RWF / h instead of {per_trip} RWF / trip)")}
        </label>
        <Show when=move || hourly.get()>
            <label class="dialog__label">
                "Hours"
                <input
                    class="dialog__input"
                    type="number"
                    min="1"
                    prop:value=move || hours.get()
                    on:input=move |ev| hours.set(event_target_value(&ev))
                />
            </label>
        </Show>
        <div class="dialog__actions">
            <button class="btn" on:click=move |_| on_close.run(())>
                "Cancel"
            </button>
            <button
                class="btn btn--primary"
                on:click=move |_| submit.run(())
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Booking..." } else { "Continue to payment" }}
            </button>
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn payment_form(
    amount: u32,
    card_payment: RwSignal<bool>,
    card_holder: RwSignal<String>,
    card_number: RwSignal<String>,
    card_expiry: RwSignal<String>,
    card_cvc: RwSignal<String>,
    momo_phone: RwSignal<String>,
    momo_name: RwSignal<String>,
    submitting: RwSignal<bool>,
    submit: Callback<()>,
) -> impl IntoView {
    view! {
        <h2>"Payment"</h2>
        <p class="dialog__text">{format!("Total due: {amount} RWF")}</p>

        <div class="dialog__row">
            <label class="dialog__label dialog__label--inline">
                <input
                    type="radio"
                    name="payment-method"
                    prop:checked=move || card_payment.get()
                    on:change=move |_| card_payment.set(true)
                />
                "Card"
            </label>
            <label class="dialog__label dialog__label--inline">
                <input
                    type="radio"
                    name="payment-method"
                    prop:checked=move || !card_payment.get()
                    on:change=move |_| card_payment.set(false)
                />
                "Mobile money"
            </label>
        </div>

        <Show
            when=move || card_payment.get()
            fallback=move || {
                view! {
                    <label class="dialog__label">
                        "Phone number"
                        <input
                            class="dialog__input"
                            type="tel"
                            prop:value=move || momo_phone.get()
                            on:input=move |ev| momo_phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Account name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || momo_name.get()
                            on:input=move |ev| momo_name.set(event_target_value(&ev))
                        />
                    </label>
                }
            }
        >
            <label class="dialog__label">
                "Cardholder"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || card_holder.get()
                    on:input=move |ev| card_holder.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Card number"
                <input
                    class="dialog__input"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || card_number.get()
                    on:input=move |ev| card_number.set(event_target_value(&ev))
                />
            </label>
            <div class="dialog__row">
                <label class="dialog__label">
                    "Expiry"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="MM/YY"
                        prop:value=move || card_expiry.get()
                        on:input=move |ev| card_expiry.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "CVC"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="numeric"
                        prop:value=move || card_cvc.get()
                        on:input=move |ev| card_cvc.set(event_target_value(&ev))
                    />
                </label>
            </div>
        </Show>

        <div class="dialog__actions">
            <button
                class="btn btn--primary"
                on:click=move |_| submit.run(())
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Paying..." } else { "Pay now" }}
            </button>
        </div>
    }
}
