//! End-to-end scenarios over the pure dashboard core: a decoded listing goes
//! in, stats / facets / visible list come out.

use serde_json::json;
use time::macros::datetime;
use ui::core::{
    filter, Action, DashboardState, EventStats, Facets, FilterCriteria, LoadStatus,
};

fn decode(body: serde_json::Value) -> Vec<api::EventRecord> {
    api::decode_events(&body.to_string()).expect("fixture decodes")
}

fn two_halls() -> Vec<api::EventRecord> {
    decode(json!({
        "events": [
            {
                "id": 1,
                "title": "Jazz Night",
                "datetime_utc": "2024-01-01T00:00:00Z",
                "venue": { "name": "Hall A", "display_location": "NY" }
            },
            {
                "id": 2,
                "title": "Rock Show",
                "datetime_utc": "2024-01-03T00:00:00Z",
                "venue": { "name": "Hall B", "display_location": "LA" }
            }
        ]
    }))
}

#[test]
fn two_event_listing() {
    let events = two_halls();

    let stats = EventStats::from_events(&events);
    assert_eq!(stats.count, 2);
    assert_eq!(
        stats.mean_date.map(|d| d.date()),
        Some(datetime!(2024-01-02 0:00 UTC).date())
    );

    let hall_a = filter::apply(&events, &FilterCriteria::default().venue("Hall A"));
    assert_eq!(hall_a.len(), 1);
    assert_eq!(hall_a[0].id, api::EventId::Number(1));
}

#[test]
fn empty_listing() {
    let events = decode(json!({ "events": [] }));
    let state = DashboardState::loading().apply(Action::Loaded(events));

    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(state.stats.count, 0);
    assert_eq!(state.stats.mean_date, None);
    assert_eq!(state.stats.median_date, None);
    assert_eq!(
        ui::core::format::format_date(state.stats.mean_date),
        "Unavailable"
    );
    assert!(state.visible.is_empty());
    assert_eq!(state.facets, Facets::default());
}

#[test]
fn count_tracks_length_for_any_size() {
    for n in 1..=25u64 {
        let events: Vec<_> = (0..n)
            .map(|i| {
                json!({
                    "id": i,
                    "title": format!("Show {i}"),
                    "datetime_utc": format!("2024-02-{:02}T20:00:00", i % 28 + 1),
                    "venue": { "name": "Arena", "display_location": "Denver, CO" }
                })
            })
            .collect();
        let stats = EventStats::from_events(&decode(json!({ "events": events })));
        assert_eq!(stats.count, n as usize);
        assert!(stats.mean_date.is_some());
        assert!(stats.median_date.is_some());
    }
}

#[test]
fn user_session_filters_and_clears() {
    let events = decode(json!({
        "events": [
            { "id": 10, "title": "Summer MUSIC Fest", "datetime_utc": "2024-06-01T18:00:00",
              "venue": { "name": "Park Stage", "display_location": "Austin, TX", "country": "US" },
              "performers": [{ "name": "Various" }] },
            { "id": 11, "title": "Comedy Hour", "datetime_utc": "2024-06-02T20:00:00",
              "venue": { "name": "Laugh Hall", "display_location": "Austin, TX" } },
            { "id": 12, "title": "Chamber music", "datetime_utc": "2024-06-03T19:00:00",
              "venue": { "name": "Park Stage", "display_location": "Dallas, TX" } },
            { "id": 13, "title": "Music Trivia", "datetime_utc": "2024-06-04T19:00:00",
              "venue": { "name": "Laugh Hall", "display_location": "Austin, TX" } }
        ]
    }));

    let loaded = DashboardState::loading().apply(Action::Loaded(events));
    assert_eq!(loaded.facets.venues, vec!["Park Stage", "Laugh Hall"]);
    assert_eq!(loaded.facets.locations, vec!["Austin, TX", "Dallas, TX"]);

    let searched = loaded.apply(Action::SetSearch("music".into()));
    let ids = |state: &DashboardState| -> Vec<String> {
        state.visible.iter().map(|e| e.id.to_string()).collect()
    };
    assert_eq!(ids(&searched), vec!["10", "12", "13"]);

    let narrowed = searched.apply(Action::SelectVenue(Some("Park Stage".into())));
    assert_eq!(ids(&narrowed), vec!["10", "12"]);

    let located = narrowed.apply(Action::SelectLocation(Some("Austin, TX".into())));
    assert_eq!(ids(&located), vec!["10"]);

    // Stats always describe the full list, not the filtered view.
    assert_eq!(located.stats, loaded.stats);
    assert_eq!(located.stats.count, 4);

    let cleared = located.apply(Action::ClearFilters);
    assert_eq!(ids(&cleared), vec!["10", "11", "12", "13"]);
}

#[test]
fn visible_is_ordered_subset_of_full_list() {
    let events = two_halls();
    let state = DashboardState::loading()
        .apply(Action::Loaded(events))
        .apply(Action::SetSearch("o".into()));

    let positions: Vec<usize> = state
        .visible
        .iter()
        .map(|v| {
            state
                .events
                .iter()
                .position(|e| e.id == v.id)
                .expect("visible event comes from the full list")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(positions, vec![1]);
}

#[test]
fn failed_fetch_leaves_no_data() {
    let state = DashboardState::loading().apply(Action::FetchFailed(
        "events endpoint responded with HTTP 403".into(),
    ));
    assert_eq!(
        state.error(),
        Some("events endpoint responded with HTTP 403")
    );
    assert!(state.events.is_empty());
    assert!(state.visible.is_empty());
    assert_eq!(state.stats, EventStats::default());
}
