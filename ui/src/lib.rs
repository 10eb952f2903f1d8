//! Shared UI crate for Eventboard. Statistics, filtering, and the dashboard views live here.

use dioxus::prelude::*;

pub mod core;
pub mod dashboard;
pub mod views;

pub mod components {
    // Application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme, linked by the web shell and inlined by the desktop shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
