use log::{debug, warn};

use crate::{
    dates::{parse_date, DateRange, InvalidDate, TrailingYear},
    db::{self, ClimateData, DailySeries, MeasurementField, TemperatureSummary},
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    BadDate(#[from] InvalidDate),
    #[error("Failed to read climate data: {0}")]
    Store(#[from] db::Error),
}

/// Values of `field` over the trailing year ending at the most recent
/// measurement, collapsed to one value per date.
///
/// An empty store yields an empty series.
pub async fn trailing_year(
    climate_db: &dyn ClimateData,
    field: MeasurementField,
) -> Result<DailySeries, db::Error> {
    let Some(last_date) = climate_db.latest_date().await? else {
        warn!("no measurements stored, returning empty {} series", field.column());
        return Ok(DailySeries::new());
    };

    let window = TrailingYear::ending(last_date);
    debug!(
        "{} window: ({}, {}]",
        field.column(),
        window.first_date,
        window.last_date
    );

    let rows = climate_db.daily_values(field, window.first_date).await?;
    Ok(rows.into_iter().collect())
}

pub async fn precipitation(climate_db: &dyn ClimateData) -> Result<DailySeries, db::Error> {
    trailing_year(climate_db, MeasurementField::Precipitation).await
}

/// Trailing-year temperatures with the dates dropped.
pub async fn temperature_observations(
    climate_db: &dyn ClimateData,
) -> Result<Vec<Option<f64>>, db::Error> {
    let series = trailing_year(climate_db, MeasurementField::Temperature).await?;
    Ok(series.into_values())
}

/// Builds the summary range from raw path segments.
///
/// A lone start is inclusive; a start/end pair excludes both days.
pub fn summary_range(start: &str, end: Option<&str>) -> Result<DateRange, InvalidDate> {
    let start = parse_date(start)?;
    match end {
        Some(end) => Ok(DateRange::Between(start, parse_date(end)?)),
        None => Ok(DateRange::From(start)),
    }
}

pub async fn temperature_summary(
    climate_db: &dyn ClimateData,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<TemperatureSummary>, Error> {
    let range = summary_range(start, end)?;
    let summary = climate_db.temperature_summary(range).await?;
    Ok(vec![summary])
}
