//! Pure, platform-agnostic pieces: statistics, filtering, facets, and the
//! dashboard state machine built on them.

pub mod facets;
pub mod filter;
pub mod format;
pub mod platform;
pub mod state;
pub mod stats;
pub mod timing;

pub use facets::Facets;
pub use filter::FilterCriteria;
pub use state::{Action, DashboardState, LoadStatus};
pub use stats::EventStats;
