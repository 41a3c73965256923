//! Reusable card for catalog listings.

use leptos::prelude::*;

/// A catalog card with a name, a detail line, a price label, and a
/// booking action.
#[component]
pub fn ServiceCard(
    name: String,
    detail: String,
    price: String,
    on_book: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="service-card">
            <span class="service-card__name">{name}</span>
            <span class="service-card__detail">{detail}</span>
            <span class="service-card__price">{price}</span>
            <button class="btn btn--primary service-card__book" on:click=move |_| on_book.run(())>
                "Book"
            </button>
        </div>
    }
}
