//! Date display helpers.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Render a profile `created_at` timestamp as `M/D/YYYY`.
///
/// Accepts RFC 3339 (the calendar date is taken in the timestamp's own
/// offset), naive `YYYY-MM-DDTHH:MM:SS[.fff]`, or a bare `YYYY-MM-DD`.
/// Unparseable input is returned unchanged.
pub fn format_member_since(raw: &str) -> String {
    parse_date(raw.trim()).map_or_else(
        || raw.to_owned(),
        |d| format!("{}/{}/{}", u8::from(d.month()), d.day(), d.year()),
    )
}

fn parse_date(raw: &str) -> Option<Date> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt.date());
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let naive_frac = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    if let Ok(dt) = PrimitiveDateTime::parse(raw, naive)
        .or_else(|_| PrimitiveDateTime::parse(raw, naive_frac))
    {
        return Some(dt.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}
