//! Admin dashboard with a catalog overview.

use leptos::prelude::*;

use crate::net::api::ApiError;

/// Admin landing page. Mounted behind the ADMIN role guard; shows how many
/// listings each catalog currently carries.
#[component]
pub fn AdminPage() -> impl IntoView {
    let counts = LocalResource::new(|| async {
        let accommodations = crate::net::api::fetch_accommodations().await.map(|v| v.len());
        let vehicles = crate::net::api::fetch_transportation().await.map(|v| v.len());
        let tours = crate::net::api::fetch_tours().await.map(|v| v.len());
        (accommodations, vehicles, tours)
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Administration"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading overview..."</p> }>
                {move || {
                    counts.get().map(|(accommodations, vehicles, tours)| {
                        view! {
                            <div class="admin-page__tiles">
                                {stat_tile("Accommodations", &accommodations)}
                                {stat_tile("Vehicles", &vehicles)}
                                {stat_tile("Tours", &tours)}
                            </div>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

fn stat_tile(label: &'static str, count: &Result<usize, ApiError>) -> impl IntoView + use<> {
    let value = count
        .as_ref()
        .map_or_else(|_| "\u{2014}".to_owned(), ToString::to_string);

    view! {
        <div class="admin-page__tile">
            <span class="admin-page__tile-value">{value}</span>
            <span class="admin-page__tile-label">{label}</span>
        </div>
    }
}
