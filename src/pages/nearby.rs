//! Nearby vendors and suppliers, sorted by distance from the device.

#[cfg(test)]
#[path = "nearby_test.rs"]
mod nearby_test;

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::User;
use crate::util::geolocation::{distance_km, GeoPoint};

/// Pair each user with their distance from `origin` and sort nearest first.
/// Users without a stored location sort last.
fn with_distances(origin: GeoPoint, users: Vec<User>) -> Vec<(User, Option<f64>)> {
    let mut out: Vec<(User, Option<f64>)> = users
        .into_iter()
        .map(|user| {
            let distance = user.location.as_ref().map(|point| {
                distance_km(
                    origin,
                    GeoPoint {
                        lat: point.lat(),
                        lng: point.lng(),
                    },
                )
            });
            (user, distance)
        })
        .collect();
    out.sort_by(|a, b| match (a.1, b.1) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    out
}

fn format_distance(distance: Option<f64>) -> String {
    match distance {
        Some(km) if km < 1.0 => format!("{:.0} m away", km * 1000.0),
        Some(km) => format!("{km:.1} km away"),
        None => "Distance unknown".to_owned(),
    }
}

#[component]
pub fn NearbyPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let origin = RwSignal::new(None::<GeoPoint>);
    let vendors = RwSignal::new(Vec::<User>::new());
    let suppliers = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let Some(position) = crate::util::geolocation::current_position().await else {
                error.set("Location access is required to find nearby vendors. Please enable location.".to_owned());
                loading.set(false);
                return;
            };
            origin.set(Some(position));
            match crate::net::api::fetch_nearby(&client, position.lat, position.lng, crate::net::types::Role::Vendor)
                .await
            {
                Ok(users) => vendors.set(users),
                Err(err) => error.set(err.to_string()),
            }
            match crate::net::api::fetch_nearby(&client, position.lat, position.lng, crate::net::types::Role::Supplier)
                .await
            {
                Ok(users) => suppliers.set(users),
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &client;
    }

    let list = move |entries: RwSignal<Vec<User>>| {
        let sorted = move || {
            origin
                .get()
                .map(|from| with_distances(from, entries.get()))
                .unwrap_or_default()
        };
        view! {
            <ul class="nearby-page__list">
                <For each=sorted key=|(user, _)| user.id.clone() let:entry>
                    <li class="nearby-page__entry">
                        <span class="nearby-page__name">{entry.0.username.clone()}</span>
                        <span class="nearby-page__distance">{format_distance(entry.1)}</span>
                    </li>
                </For>
            </ul>
        }
    };

    view! {
        <main class="nearby-page">
            <h1>"Nearby"</h1>
            <Show when=move || loading.get()>
                <p>"Locating..."</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="nearby-page__error">{move || error.get()}</p>
            </Show>
            <section>
                <h2>"Vendors"</h2>
                {list(vendors)}
                <Show when=move || !loading.get() && vendors.get().is_empty()>
                    <p class="nearby-page__empty">"No vendors nearby."</p>
                </Show>
            </section>
            <section>
                <h2>"Suppliers"</h2>
                {list(suppliers)}
                <Show when=move || !loading.get() && suppliers.get().is_empty()>
                    <p class="nearby-page__empty">"No suppliers nearby."</p>
                </Show>
            </section>
        </main>
    }
}
