//! Search / venue / location filtering of the event list.

use api::EventRecord;

/// Current filter inputs. `None` and `Some("")` both mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub venue: Option<String>,
    pub location: Option<String>,
}

impl FilterCriteria {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn venue(mut self, name: impl Into<String>) -> Self {
        self.venue = Some(name.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        active(&self.search).is_none()
            && active(&self.venue).is_none()
            && active(&self.location).is_none()
    }

    /// Title contains the search text (case-insensitive), venue name and
    /// display location match exactly. Inactive criteria always pass.
    pub fn matches(&self, event: &EventRecord) -> bool {
        let search_ok = active(&self.search).is_none_or(|needle| {
            event.title.to_lowercase().contains(&needle.to_lowercase())
        });
        let venue_ok = active(&self.venue).is_none_or(|name| event.venue.name == name);
        let location_ok = active(&self.location)
            .is_none_or(|location| event.venue.display_location == location);

        search_ok && venue_ok && location_ok
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

/// Events satisfying every active criterion, in their original order.
pub fn apply(events: &[EventRecord], criteria: &FilterCriteria) -> Vec<EventRecord> {
    if criteria.is_empty() {
        return events.to_vec();
    }
    events
        .iter()
        .filter(|event| criteria.matches(event))
        .cloned()
        .collect()
}
