//! Distinct venue / location options for the filter dropdowns.

use std::collections::HashSet;

use api::EventRecord;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Facets {
    pub venues: Vec<String>,
    pub locations: Vec<String>,
}

impl Facets {
    /// One entry per distinct value, in first-seen order.
    pub fn from_events(events: &[EventRecord]) -> Self {
        Self {
            venues: distinct(events.iter().map(|e| e.venue.name.as_str())),
            locations: distinct(events.iter().map(|e| e.venue.display_location.as_str())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
