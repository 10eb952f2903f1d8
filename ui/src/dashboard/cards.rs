use dioxus::prelude::*;

use crate::core::{format, EventStats};

const LOADING: &str = "Loading…";

#[component]
pub fn StatCards(stats: EventStats, loading: bool) -> Element {
    let (mean_label, median_label) = if loading {
        (LOADING.to_string(), LOADING.to_string())
    } else {
        (
            format::format_date(stats.mean_date),
            format::format_date(stats.median_date),
        )
    };

    let dated = stats.count - stats.undated;
    let basis = if stats.has_dates() {
        format!("Across {}", format::format_count(dated))
    } else {
        "No dated events".to_string()
    };

    rsx! {
        section { class: "stat-cards",
            div { class: "stat-card stat-card--count",
                span { class: "stat-card__label", "Total number of events" }
                strong { class: "stat-card__value", "{stats.count}" }
            }
            div { class: "stat-card",
                span { class: "stat-card__label", "Mean date" }
                strong { class: "stat-card__value", "{mean_label}" }
                if !loading {
                    span { class: "stat-card__meta", "{basis}" }
                }
            }
            div { class: "stat-card",
                span { class: "stat-card__label", "Median date" }
                strong { class: "stat-card__value", "{median_label}" }
                if !loading {
                    span { class: "stat-card__meta", "Upper middle for even counts" }
                }
            }

            if stats.undated > 0 {
                p { class: "stat-cards__note",
                    "{format::format_count(stats.undated)} without a usable date left out of mean and median."
                }
            }
        }
    }
}
