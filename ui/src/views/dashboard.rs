use dioxus::prelude::*;

use crate::core::DashboardState;
use crate::dashboard::{load_events, EventList, FilterBar, StatCards, FETCH_FAILED_NOTICE};

#[component]
pub fn Dashboard() -> Element {
    let state = use_signal(DashboardState::loading);

    // Single fetch on mount; the future writes its outcome into `state`.
    use_future(move || load_events(state));

    let snapshot = state();
    tracing::debug!(
        total = snapshot.events.len(),
        visible = snapshot.visible.len(),
        "dashboard render"
    );

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Event dashboard" }

            FilterBar { state }

            StatCards {
                stats: snapshot.stats.clone(),
                loading: snapshot.is_loading(),
            }

            if let Some(detail) = snapshot.error() {
                div { class: "dashboard-error", role: "alert",
                    strong { class: "dashboard-error__title", "{FETCH_FAILED_NOTICE}" }
                    span { class: "dashboard-error__detail", "{detail}" }
                }
            } else {
                EventList {
                    events: snapshot.visible.clone(),
                    total: snapshot.events.len(),
                }
            }
        }
    }
}
