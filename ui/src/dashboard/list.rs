use api::EventRecord;
use dioxus::prelude::*;

use crate::dashboard::{country_label, datetime_label, performer_label};

#[component]
pub fn EventList(events: Vec<EventRecord>, total: usize) -> Element {
    let shown = events.len();
    let entries: Vec<ListEntry> = events.iter().map(ListEntry::from_record).collect();

    let placeholder = if total == 0 {
        "No events loaded yet."
    } else {
        "No events match the current filters."
    };

    rsx! {
        section { class: "dashboard-card event-list",
            div { class: "dashboard-card__header",
                h2 { "Events" }
                if total > 0 {
                    span { class: "dashboard-card__meta", "Showing {shown} of {total}" }
                }
            }

            if entries.is_empty() {
                p { class: "dashboard-card__placeholder", "{placeholder}" }
            } else {
                ul { class: "event-list__items",
                    for entry in entries.into_iter() {
                        {render_list_entry(entry)}
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct ListEntry {
    key: String,
    title: String,
    date: String,
    venue: String,
    location: String,
    performer: String,
    country: String,
}

impl ListEntry {
    fn from_record(record: &EventRecord) -> Self {
        Self {
            key: record.id.to_string(),
            title: record.title.clone(),
            date: datetime_label(record),
            venue: record.venue.name.clone(),
            location: record.venue.display_location.clone(),
            performer: performer_label(record),
            country: country_label(record),
        }
    }
}

fn render_list_entry(entry: ListEntry) -> Element {
    let ListEntry {
        key,
        title,
        date,
        venue,
        location,
        performer,
        country,
    } = entry;

    rsx! {
        li { key: "{key}", class: "event-list__item",
            h3 { class: "event-list__title", "{title}" }
            dl { class: "event-list__facts",
                div { class: "event-list__fact",
                    dt { "Date" }
                    dd { "{date}" }
                }
                div { class: "event-list__fact",
                    dt { "Venue" }
                    dd { "{venue}" }
                }
                div { class: "event-list__fact",
                    dt { "Location" }
                    dd { "{location}" }
                }
                div { class: "event-list__fact",
                    dt { "Performer" }
                    dd { "{performer}" }
                }
                div { class: "event-list__fact",
                    dt { "Country" }
                    dd { "{country}" }
                }
            }
        }
    }
}
