use api::EventRecord;

use crate::core::format;

pub(crate) fn performer_label(record: &EventRecord) -> String {
    format::or_placeholder(record.headliner()).to_string()
}

pub(crate) fn country_label(record: &EventRecord) -> String {
    format::or_placeholder(record.venue.country.as_deref()).to_string()
}

/// The raw wire timestamp, shown as delivered.
pub(crate) fn datetime_label(record: &EventRecord) -> String {
    format::or_placeholder(Some(record.datetime_utc.as_str())).to_string()
}

/// `None` for the "Select …" sentinel option, `Some(value)` otherwise.
pub(crate) fn selection(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Value for a `<select>`; `None` maps to the sentinel option's empty value.
pub(crate) fn select_value(selected: &Option<String>) -> String {
    selected.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{EventId, Performer, Venue};

    fn record(performers: Vec<Performer>, country: Option<&str>) -> EventRecord {
        EventRecord {
            id: EventId::Number(1),
            title: "Jazz Night".into(),
            datetime_utc: "2024-04-01T23:00:00".into(),
            venue: Venue {
                name: "Blue Note".into(),
                display_location: "New York, NY".into(),
                country: country.map(str::to_string),
            },
            performers,
        }
    }

    #[test]
    fn labels_fall_back_to_placeholder() {
        let bare = record(Vec::new(), None);
        assert_eq!(performer_label(&bare), "—");
        assert_eq!(country_label(&bare), "—");

        let full = record(
            vec![
                Performer { name: "Quartet".into() },
                Performer { name: "Opener".into() },
            ],
            Some("US"),
        );
        assert_eq!(performer_label(&full), "Quartet");
        assert_eq!(country_label(&full), "US");
        assert_eq!(datetime_label(&full), "2024-04-01T23:00:00");
    }

    #[test]
    fn sentinel_option_clears_selection() {
        assert_eq!(selection(String::new()), None);
        assert_eq!(selection("Hall A".into()), Some("Hall A".to_string()));
    }

    #[test]
    fn select_value_follows_criteria() {
        use crate::core::{Action, DashboardState};

        let state = DashboardState::loading()
            .apply(Action::Loaded(vec![record(Vec::new(), None)]))
            .apply(Action::SelectVenue(Some("Blue Note".into())))
            .apply(Action::SelectLocation(Some("New York, NY".into())));
        assert_eq!(select_value(&state.criteria.venue), "Blue Note");
        assert_eq!(select_value(&state.criteria.location), "New York, NY");

        let cleared = state.apply(Action::ClearFilters);
        assert_eq!(select_value(&cleared.criteria.venue), "");
        assert_eq!(select_value(&cleared.criteria.location), "");
        assert_eq!(selection(select_value(&cleared.criteria.venue)), None);
    }
}
