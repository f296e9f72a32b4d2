//! Timestamp formats used on the wire.
//!
//! Headers and query values use HTTP-date (`Sun, 06 Nov 1994 08:49:37 GMT`); XML
//! bodies and the object-lock retain-until header use ISO 8601 with milliseconds.
//! Incoming HTTP-dates may also use the obsolete RFC 850 and asctime forms.

use chrono::{Datelike, SecondsFormat, Utc};
use s3_restxml_model::DateTime;

/// Format as HTTP-date.
#[must_use]
pub fn format_http_date(dt: &DateTime) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an HTTP-date in IMF-fixdate, RFC 850 or asctime form.
pub fn parse_http_date(s: &str) -> Result<DateTime, chrono::ParseError> {
    let s = s.trim();
    chrono::DateTime::parse_from_rfc2822(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|err| match rfc850_with_full_year(s, Utc::now().year()) {
            Some(full) => {
                chrono::NaiveDateTime::parse_from_str(&full, "%d-%b-%Y %H:%M:%S%.f GMT")
                    .map(|ndt| ndt.and_utc())
            }
            None => Err(err),
        })
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%a %b %e %H:%M:%S%.f %Y")
                .map(|ndt| ndt.and_utc())
        })
}

/// Rewrite `Sunday, 06-Nov-94 08:49:37 GMT` as `06-Nov-1994 08:49:37 GMT`.
///
/// The two-digit year resolves to the nearest year that is not more than fifty years
/// after `this_year`.
fn rfc850_with_full_year(s: &str, this_year: i32) -> Option<String> {
    let (_, rest) = s.split_once(", ")?;
    let (date, time) = rest.split_once(' ')?;
    let (day_month, yy) = date.rsplit_once('-')?;
    if yy.len() != 2 {
        return None;
    }
    let yy: i32 = yy.parse().ok()?;

    let mut year = this_year / 100 * 100 + yy;
    if year < this_year {
        year += 100;
    }
    if year - this_year > 50 {
        year -= 100;
    }
    Some(format!("{day_month}-{year} {time}"))
}

/// Format as ISO 8601, e.g. `2006-02-03T16:45:09.000Z`.
#[must_use]
pub fn format_iso8601(dt: &DateTime) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO 8601 timestamp.
pub fn parse_iso8601(s: &str) -> Result<DateTime, chrono::ParseError> {
    let s = s.trim();
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|ndt| ndt.and_utc())
        })
}
