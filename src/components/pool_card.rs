//! Dashboard card for a single bulk-order pool.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Pool;

#[component]
pub fn PoolCard(pool: Pool) -> impl IntoView {
    let detail_href = format!("/pool/{}", pool.id);
    let progress = pool.progress();
    let title = pool.name.clone().unwrap_or_else(|| "Bulk pool".to_owned());
    let status = pool.status.clone();
    let pledged = format!("{} / {} kg", pool.current_quantity, pool.total_required_quantity);

    view! {
        <div class="pool-card">
            <div class="pool-card__header">
                <h3 class="pool-card__name">{title}</h3>
                <span class=format!("pool-card__status pool-card__status--{status}")>{status.clone()}</span>
            </div>
            <div class="pool-card__progress">
                <div class="pool-card__progress-bar" style=format!("width: {progress}%")></div>
            </div>
            <p class="pool-card__quantities">{pledged}</p>
            <A href=detail_href.clone() attr:class="btn pool-card__open">
                "Open"
            </A>
        </div>
    }
}
