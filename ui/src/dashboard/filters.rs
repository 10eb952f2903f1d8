use dioxus::prelude::*;

use crate::core::{Action, DashboardState};

use super::{dispatch, select_value, selection};

#[component]
pub fn FilterBar(state: Signal<DashboardState>) -> Element {
    let (search, venue, location, venues, locations, has_filters, has_events) = {
        let snapshot = state.read();
        let criteria = &snapshot.criteria;
        (
            criteria.search.clone().unwrap_or_default(),
            select_value(&criteria.venue),
            select_value(&criteria.location),
            snapshot.facets.venues.clone(),
            snapshot.facets.locations.clone(),
            !criteria.is_empty(),
            !snapshot.events.is_empty(),
        )
    };

    rsx! {
        div { class: "filter-bar",
            input {
                r#type: "search",
                class: "filter-bar__search",
                placeholder: "Search events...",
                value: "{search}",
                oninput: move |evt: FormEvent| dispatch(state, Action::SetSearch(evt.value())),
            }

            select {
                class: "filter-bar__select",
                value: "{venue}",
                disabled: !has_events,
                onchange: move |evt: FormEvent| {
                    dispatch(state, Action::SelectVenue(selection(evt.value())))
                },
                option { value: "", "Select Venue" }
                for name in venues {
                    option { key: "{name}", value: "{name}", selected: name == venue, "{name}" }
                }
            }

            select {
                class: "filter-bar__select",
                value: "{location}",
                disabled: !has_events,
                onchange: move |evt: FormEvent| {
                    dispatch(state, Action::SelectLocation(selection(evt.value())))
                },
                option { value: "", "Select Location" }
                for place in locations {
                    option { key: "{place}", value: "{place}", selected: place == location, "{place}" }
                }
            }

            button {
                r#type: "button",
                class: "button button--ghost filter-bar__clear",
                disabled: !has_filters,
                onclick: move |_| dispatch(state, Action::ClearFilters),
                "Clear filters"
            }
        }
    }
}
