mod climate_data;
mod series;

pub use climate_data::{ClimateAccess, ClimateData, Error};
pub use series::DailySeries;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Statically declared layout of the observations database
pub mod schema {
    pub const MEASUREMENT_TABLE: &str = "measurement";
    pub const MEASUREMENT_COLUMNS: &[&str] = &["id", "station", "date", "prcp", "tobs"];

    pub const STATION_TABLE: &str = "station";
    pub const STATION_COLUMNS: &[&str] = &[
        "id",
        "station",
        "name",
        "latitude",
        "longitude",
        "elevation",
    ];
}

/// Measurement column read by the trailing-year queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementField {
    Precipitation,
    Temperature,
}

impl MeasurementField {
    pub fn column(&self) -> &'static str {
        match self {
            MeasurementField::Precipitation => "prcp",
            MeasurementField::Temperature => "tobs",
        }
    }
}

/// One measurement row reduced to its date and a single value
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DailyValue {
    pub date: String,
    pub value: Option<f64>,
}

impl DailyValue {
    pub fn new(date: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Station {
    /// Station code, e.g. USC00519397
    pub station: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
    /// Surrogate key, stations are listed in ascending order of it
    #[serde(rename = "_id")]
    pub id: i64,
}

/// MIN/AVG/MAX of observed temperature over a selection, all null when nothing matched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct TemperatureSummary {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}
