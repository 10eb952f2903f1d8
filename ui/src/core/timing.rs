//! Timestamp parsing for event instants.

use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};

/// Parse an event timestamp. Accepts RFC 3339 and the offset-less
/// `YYYY-MM-DDTHH:MM:SS[.fff]` form SeatGeek sends, which is UTC by contract.
/// Returns `None` on anything else.
pub fn parse_instant(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }

    let naive = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    PrimitiveDateTime::parse(raw, naive)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_rfc3339() {
        assert_eq!(
            parse_instant("2024-01-01T00:00:00Z"),
            Some(datetime!(2024-01-01 0:00 UTC))
        );
        assert_eq!(
            parse_instant("2024-01-01T02:00:00+02:00"),
            Some(datetime!(2024-01-01 0:00 UTC))
        );
    }

    #[test]
    fn offsetless_is_utc() {
        assert_eq!(
            parse_instant("2024-04-01T23:00:00"),
            Some(datetime!(2024-04-01 23:00 UTC))
        );
    }

    #[test]
    fn offsetless_fractional_seconds_are_kept() {
        assert_eq!(
            parse_instant("2024-01-01T00:00:00.500"),
            Some(datetime!(2024-01-01 0:00:00.5 UTC))
        );
        assert_eq!(
            parse_instant("2024-01-01T00:00:00.123456"),
            Some(datetime!(2024-01-01 0:00:00.123456 UTC))
        );
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("TBA"), None);
        assert_eq!(parse_instant("2024-13-01T00:00:00"), None);
    }
}
