//! Date/time normalisation: lenient parsing of sheet cells into moments and
//! the next-day cutoff rule that turns a moment into an effective date.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// A parsed point in time. Sheet cells normally carry no zone (`Floating`);
/// values with an explicit offset keep it (`Fixed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    Floating(NaiveDateTime),
    Fixed(DateTime<FixedOffset>),
}

impl Moment {
    /// Calendar date as written (in the moment's own offset when fixed).
    pub fn date(&self) -> NaiveDate {
        match self {
            Moment::Floating(n) => n.date(),
            Moment::Fixed(d) => d.date_naive(),
        }
    }

    pub fn time(&self) -> NaiveTime {
        match self {
            Moment::Floating(n) => n.time(),
            Moment::Fixed(d) => d.time(),
        }
    }

    /// Same date, different wall-clock time.
    pub fn with_time(&self, time: NaiveTime) -> Moment {
        match self {
            Moment::Floating(n) => Moment::Floating(n.date().and_time(time)),
            Moment::Fixed(d) => d
                .offset()
                .from_local_datetime(&d.date_naive().and_time(time))
                .single()
                .map(Moment::Fixed)
                .unwrap_or(Moment::Floating(d.date_naive().and_time(time))),
        }
    }

    /// Attach `tz` to a floating moment, or convert a fixed one into it.
    pub fn localize(&self, tz: Tz) -> DateTime<Tz> {
        match self {
            Moment::Fixed(d) => d.with_timezone(&tz),
            Moment::Floating(n) => attach_zone(n, tz),
        }
    }
}

/// Ambiguous wall times take the earlier instant; times inside a DST gap
/// are pushed forward by the gap.
fn attach_zone(naive: &NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return dt;
    }
    tz.from_local_datetime(&(*naive + Duration::hours(1)))
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(naive))
}

// `%y` variants come first: `%Y` would read "21" as the year 0021, while
// `%y` rejects a four-digit year. `%.f` also accepts a missing fraction.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%y %H:%M:%S%.f",
    "%m/%d/%y %H:%M",
    "%m/%d/%y %I:%M:%S%.f %p",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S%.f %p",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M:%S%.f %p", "%I:%M %p"];

pub fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(s, f).ok())
}

/// Single-field value: RFC 3339, date+time, or date only (midnight).
fn parse_datetime(s: &str) -> Option<Moment> {
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(Moment::Fixed(d));
    }
    if let Some(n) = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(Moment::Floating(n));
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .map(|d| Moment::Floating(d.and_time(NaiveTime::MIN)))
}

/// Combine a date-bearing cell with an optional separate time cell.
///
/// `None` means "unparseable" and is never an error: callers decide whether
/// to skip or fall back. Month/day/year ordering follows the source sheet.
pub fn parse_moment(primary: &str, time: Option<&str>) -> Option<Moment> {
    let primary = primary.trim();
    if primary.is_empty() {
        return None;
    }

    match time.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => {
            let time = parse_time_of_day(t)?;
            Some(parse_datetime(primary)?.with_time(time))
        }
        None => parse_datetime(primary),
    }
}

/// Effective date of a moment already expressed in the target zone.
/// Times strictly before `cutoff` belong to the previous calendar day.
pub fn effective_date_in_zone(local: &DateTime<Tz>, cutoff: NaiveTime) -> NaiveDate {
    let date = local.date_naive();
    if local.time() < cutoff {
        date.pred_opt().unwrap_or(date)
    } else {
        date
    }
}

/// Localise `occurred_at` to `tz` and apply the cutoff rule.
pub fn resolve_effective_date(occurred_at: &Moment, cutoff: NaiveTime, tz: Tz) -> NaiveDate {
    effective_date_in_zone(&occurred_at.localize(tz), cutoff)
}
