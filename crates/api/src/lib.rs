pub mod dates;
pub mod db;
pub mod queries;
mod routes;
mod startup;
mod templates;
mod utils;

pub use dates::{format_date, parse_date, DateRange, InvalidDate, TrailingYear};
pub use db::{
    ClimateAccess, ClimateData, DailySeries, DailyValue, MeasurementField, Station,
    TemperatureSummary,
};
pub use routes::*;
pub use startup::{app, build_app_state, AppState};
pub use utils::*;
