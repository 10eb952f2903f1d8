//! Wire model for the `/2/events` listing.

use std::fmt;

use serde::Deserialize;

/// Body of the events listing. Only `events` is read; paging metadata is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EventsPage {
    pub events: Vec<EventRecord>,
}

/// Identifier used only as a stable key. SeatGeek sends integers, fixtures often use strings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum EventId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{n}"),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: EventId,
    pub title: String,
    /// Raw timestamp as delivered. Usually offset-less (`2024-04-01T23:00:00`) but UTC by contract.
    pub datetime_utc: String,
    pub venue: Venue,
    #[serde(default)]
    pub performers: Vec<Performer>,
}

impl EventRecord {
    pub fn headliner(&self) -> Option<&str> {
        self.performers.first().map(|p| p.name.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Venue {
    pub name: String,
    pub display_location: String,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Performer {
    pub name: String,
}
