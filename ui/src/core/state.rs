//! Dashboard state and its pure transition function.
//!
//! The view keeps exactly one `DashboardState` in a signal and replaces it on
//! every [`Action`]. Derived values (stats, facets, visible list) are stored
//! alongside their inputs and recomputed only when those inputs change:
//! a new event list refreshes all three, a filter change refreshes `visible`.

use std::sync::Arc;

use api::EventRecord;

use super::facets::Facets;
use super::filter::{self, FilterCriteria};
use super::stats::EventStats;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Loaded(Vec<EventRecord>),
    FetchFailed(String),
    SetSearch(String),
    SelectVenue(Option<String>),
    SelectLocation(Option<String>),
    ClearFilters,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub status: LoadStatus,
    pub events: Arc<[EventRecord]>,
    pub criteria: FilterCriteria,
    pub stats: EventStats,
    pub facets: Facets,
    pub visible: Vec<EventRecord>,
}

impl DashboardState {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn apply(&self, action: Action) -> Self {
        tracing::debug!(?action, "dashboard transition");
        match action {
            Action::Loaded(events) => {
                let events: Arc<[EventRecord]> = events.into();
                Self {
                    status: LoadStatus::Ready,
                    stats: EventStats::from_events(&events),
                    facets: Facets::from_events(&events),
                    visible: filter::apply(&events, &self.criteria),
                    criteria: self.criteria.clone(),
                    events,
                }
            }
            Action::FetchFailed(message) => Self {
                status: LoadStatus::Failed(message),
                ..self.clone()
            },
            Action::SetSearch(text) => self.with_criteria(FilterCriteria {
                search: Some(text),
                ..self.criteria.clone()
            }),
            Action::SelectVenue(venue) => self.with_criteria(FilterCriteria {
                venue,
                ..self.criteria.clone()
            }),
            Action::SelectLocation(location) => self.with_criteria(FilterCriteria {
                location,
                ..self.criteria.clone()
            }),
            Action::ClearFilters => self.with_criteria(FilterCriteria::default()),
        }
    }

    fn with_criteria(&self, criteria: FilterCriteria) -> Self {
        Self {
            visible: filter::apply(&self.events, &criteria),
            criteria,
            status: self.status.clone(),
            events: Arc::clone(&self.events),
            stats: self.stats.clone(),
            facets: self.facets.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
