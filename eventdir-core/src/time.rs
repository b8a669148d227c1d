//! Start time parsing and timezone resolution.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
};
use chrono_tz::Tz;

/// Accepted `start` formats, tried in order.
pub const START_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%d"];

/// Display format for the Date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve a timezone hint, falling back to `default` when absent or unknown.
pub fn resolve_timezone(hint: Option<&str>, default: Tz) -> Tz {
    match hint {
        Some(name) => match name.trim().parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!(timezone = name, fallback = %default, "unknown timezone, using default");
                default
            }
        },
        None => default,
    }
}

/// Parse a `start` value as wall-clock time in `tz`.
pub fn parse_start(raw: &str, tz: Tz) -> Option<DateTime<Tz>> {
    parse_naive(raw.trim()).map(|naive| localize(naive, tz))
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    let [datetime_format, date_format] = START_FORMATS;

    NaiveDateTime::parse_from_str(raw, datetime_format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, date_format)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Attach `tz` to a naive local time.
///
/// Ambiguous times (clocks going back) resolve to the earlier instant. Times
/// that fall in a gap (clocks going forward) use the offset in effect before
/// the transition.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let offset = tz
                .offset_from_local_datetime(&(naive - Duration::days(1)))
                .earliest()
                .map(|o| o.fix().local_minus_utc())
                .unwrap_or(0);
            tz.from_utc_datetime(&(naive - Duration::seconds(i64::from(offset))))
        }
    }
}
