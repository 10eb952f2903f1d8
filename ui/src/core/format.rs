//! Formatting helpers for presenting event stats.

use time::{macros::format_description, OffsetDateTime};

pub const UNAVAILABLE: &str = "Unavailable";
pub const PLACEHOLDER: &str = "—";

/// `Tue Jan 02 2024`, or "Unavailable" when there is no date to show.
pub fn format_date(date: Option<OffsetDateTime>) -> String {
    date.and_then(|d| {
        d.format(&format_description!(
            "[weekday repr:short] [month repr:short] [day] [year]"
        ))
        .ok()
    })
    .unwrap_or_else(|| UNAVAILABLE.to_string())
}

pub fn format_count(count: usize) -> String {
    match count {
        1 => "1 event".to_string(),
        n => format!("{n} events"),
    }
}

pub fn or_placeholder(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(PLACEHOLDER)
}
