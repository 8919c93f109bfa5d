use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    parsing::Parsed,
    Date, Duration, Month, OffsetDateTime, PrimitiveDateTime,
};

/// Storage and response format for calendar days
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar-day layouts accepted in request paths, tried in order
const DATE_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month padding:none]-[day padding:none]"),
    format_description!("[year]/[month padding:none]/[day padding:none]"),
    format_description!("[year].[month padding:none].[day padding:none]"),
    format_description!("[year][month][day]"),
    format_description!("[month padding:none]/[day padding:none]/[year]"),
    format_description!("[month padding:none]-[day padding:none]-[year]"),
    format_description!("[month repr:short case_sensitive:false] [day padding:none], [year]"),
    format_description!("[month repr:long case_sensitive:false] [day padding:none], [year]"),
    format_description!("[day padding:none] [month repr:short case_sensitive:false] [year]"),
    format_description!("[day padding:none] [month repr:long case_sensitive:false] [year]"),
];

/// Year-month and year-only layouts, missing parts default to January / day 1
const PARTIAL_DATE_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month padding:none]"),
    format_description!("[year]/[month padding:none]"),
    format_description!("[month repr:short case_sensitive:false] [year]"),
    format_description!("[month repr:long case_sensitive:false] [year]"),
    format_description!("[year]"),
];

/// Date-time layouts whose calendar day is used
const DATE_TIME_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("invalid date '{0}', expected a calendar date such as yyyy-mm-dd")]
pub struct InvalidDate(pub String);

/// Parse a calendar day from any of the accepted layouts.
pub fn parse_date(input: &str) -> Result<Date, InvalidDate> {
    let trimmed = input.trim();

    for &format in DATE_FORMATS {
        if let Ok(date) = Date::parse(trimmed, format) {
            return Ok(date);
        }
    }

    for &format in PARTIAL_DATE_FORMATS {
        if let Some(date) = parse_partial(trimmed, format) {
            return Ok(date);
        }
    }

    for &format in DATE_TIME_FORMATS {
        if let Ok(date_time) = PrimitiveDateTime::parse(trimmed, format) {
            return Ok(date_time.date());
        }
    }

    OffsetDateTime::parse(trimmed, &Rfc3339)
        .map(|date_time| date_time.date())
        .map_err(|_| InvalidDate(input.to_owned()))
}

fn parse_partial(input: &str, format: &[BorrowedFormatItem<'_>]) -> Option<Date> {
    let mut parsed = Parsed::new();
    let rest = parsed.parse_items(input.as_bytes(), format).ok()?;
    if !rest.is_empty() {
        return None;
    }
    let month = parsed.month().unwrap_or(Month::January);
    Date::from_calendar_date(parsed.year()?, month, 1).ok()
}

/// Parse a date exactly as it is stored (`yyyy-mm-dd`).
pub fn parse_stored_date(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input, ISO_DATE)
}

pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// The 365 days before (exclusive) through the most recent recorded date (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingYear {
    pub first_date: Date,
    pub last_date: Date,
}

impl TrailingYear {
    pub const DAYS: i64 = 365;

    pub fn ending(last_date: Date) -> Self {
        Self {
            first_date: last_date.saturating_sub(Duration::days(Self::DAYS)),
            last_date,
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        date > self.first_date && date <= self.last_date
    }
}

/// Date selection for temperature summaries.
///
/// `From` includes its start day while `Between` excludes both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    From(Date),
    Between(Date, Date),
}

impl DateRange {
    pub fn predicate(&self) -> &'static str {
        match self {
            DateRange::From(_) => "date >= ?",
            DateRange::Between(_, _) => "date > ? AND date < ?",
        }
    }

    pub fn bounds(&self) -> Vec<String> {
        match self {
            DateRange::From(start) => vec![format_date(*start)],
            DateRange::Between(start, end) => vec![format_date(*start), format_date(*end)],
        }
    }
}
