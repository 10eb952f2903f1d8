//! Network collaborator for Eventboard: the SeatGeek events wire model and the
//! single GET that fills the dashboard.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{decode_events, fetch_events};
pub use config::ApiConfig;
pub use error::FetchError;
pub use model::{EventId, EventRecord, EventsPage, Performer, Venue};
