mod cards;
pub use cards::StatCards;

mod filters;
pub use filters::FilterBar;

mod list;
pub use list::EventList;

mod loader;
pub(crate) use loader::{load_events, FETCH_FAILED_NOTICE};

mod utils;
pub(crate) use utils::*;

use dioxus::prelude::*;

use crate::core::{Action, DashboardState};

/// Replace the dashboard state with the result of applying `action` to it.
pub(crate) fn dispatch(mut state: Signal<DashboardState>, action: Action) {
    let next = state.peek().apply(action);
    state.set(next);
}
