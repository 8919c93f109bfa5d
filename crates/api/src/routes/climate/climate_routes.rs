use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    db::{DailySeries, Station, TemperatureSummary},
    queries::{self, Error},
    routes::climate::ErrorBody,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation by date over the trailing year ending at the latest measurement, null where unrecorded; empty when no measurements exist", content_type = "application/json", body = std::collections::HashMap<String, f64>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read measurements", body = ErrorBody)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DailySeries>, Error> {
    let series = queries::precipitation(state.climate_db.as_ref()).await?;
    Ok(Json(series))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "All stations ordered by surrogate id", content_type = "application/json", body = Vec<Station>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read stations", body = ErrorBody)
    ))]
pub async fn stations(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Station>>, Error> {
    let stations = state.climate_db.stations().await?;
    Ok(Json(stations))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations over the trailing year, one value per date with the dates dropped", content_type = "application/json", body = Vec<f64>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read measurements", body = ErrorBody)
    ))]
pub async fn tobs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Option<f64>>>, Error> {
    let values = queries::temperature_observations(state.climate_db.as_ref()).await?;
    Ok(Json(values))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "First day to include, e.g. 2017-08-01"),
    ),
    responses(
        (status = OK, description = "TMIN/TAVG/TMAX of observed temperature on or after start", content_type = "application/json", body = Vec<TemperatureSummary>),
        (status = BAD_REQUEST, description = "Start is not a calendar date", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read measurements", body = ErrorBody)
    ))]
pub async fn start_summary(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureSummary>>, Error> {
    let summary = queries::temperature_summary(state.climate_db.as_ref(), &start, None).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "Day before the first day to include"),
        ("end" = String, Path, description = "Day after the last day to include"),
    ),
    responses(
        (status = OK, description = "TMIN/TAVG/TMAX of observed temperature strictly between start and end", content_type = "application/json", body = Vec<TemperatureSummary>),
        (status = BAD_REQUEST, description = "Start or end is not a calendar date", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read measurements", body = ErrorBody)
    ))]
pub async fn start_end_summary(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummary>>, Error> {
    let summary =
        queries::temperature_summary(state.climate_db.as_ref(), &start, Some(&end)).await?;
    Ok(Json(summary))
}
