//! The one request the dashboard makes.

use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::{FetchError, Result};
use crate::model::{EventRecord, EventsPage};

/// GET the events listing and decode it. Non-success statuses, transport
/// failures, and malformed bodies all come back as `FetchError`.
pub async fn fetch_events(config: &ApiConfig) -> Result<Vec<EventRecord>> {
    let url = config.request_url()?;
    tracing::debug!(endpoint = %config.endpoint, "fetching events");

    let response = Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let events = decode_events(&body)?;
    tracing::info!(count = events.len(), "events loaded");
    Ok(events)
}

/// Decode a `{ "events": [...] }` body.
pub fn decode_events(body: &str) -> Result<Vec<EventRecord>> {
    let page: EventsPage = serde_json::from_str(body)?;
    Ok(page.events)
}
