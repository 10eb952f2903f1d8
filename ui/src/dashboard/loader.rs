use dioxus::prelude::*;

use api::ApiConfig;

use crate::core::{platform, Action, DashboardState};

use super::dispatch;

pub(crate) const FETCH_FAILED_NOTICE: &str = "Error fetching data. Please try again later.";

/// Fetch the event list once and feed the outcome into the dashboard state.
/// Failures are final: logged, surfaced once, never retried.
pub(crate) async fn load_events(state: Signal<DashboardState>) {
    let config = ApiConfig::resolve();

    match api::fetch_events(&config).await {
        Ok(events) => dispatch(state, Action::Loaded(events)),
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch events");
            platform::alert(FETCH_FAILED_NOTICE);
            dispatch(state, Action::FetchFailed(err.to_string()));
        }
    }
}
