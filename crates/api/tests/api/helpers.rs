use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use climate_api::{
    app, db::Error, AppState, ClimateAccess, ClimateData, DailyValue, DateRange,
    MeasurementField, Station, TemperatureSummary,
};
use hyper::{header, Method};
use mockall::mock;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::sync::Arc;
use tempfile::TempDir;
use time::Date;
use tower::ServiceExt;

mock! {
    pub ClimateAccess {}
    #[async_trait]
    impl ClimateData for ClimateAccess {
        async fn latest_date(&self) -> Result<Option<Date>, Error>;
        async fn daily_values(
            &self,
            field: MeasurementField,
            after: Date,
        ) -> Result<Vec<DailyValue>, Error>;
        async fn stations(&self) -> Result<Vec<Station>, Error>;
        async fn temperature_summary(&self, range: DateRange) -> Result<TemperatureSummary, Error>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(climate_db: Arc<dyn ClimateData>) -> TestApp {
    TestApp {
        app: app(AppState { climate_db }),
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        let json = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("body for {uri} is not json ({e}): {body}"));
        (status, json)
    }
}

const CREATE_TABLES: &str = "
    CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    );";

pub struct MeasurementRow {
    pub station: &'static str,
    pub date: &'static str,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

pub fn measurement(
    station: &'static str,
    date: &'static str,
    prcp: Option<f64>,
    tobs: Option<f64>,
) -> MeasurementRow {
    MeasurementRow {
        station,
        date,
        prcp,
        tobs,
    }
}

/// Writes a database file with both tables, then reopens it the way the service does.
pub async fn seeded_store(
    stations: &[(i64, &str, &str)],
    measurements: &[MeasurementRow],
) -> (TempDir, ClimateAccess) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hawaii.sqlite");

    let options = SqliteConnectOptions::new()
        .filename(&path)
        .journal_mode(SqliteJournalMode::Delete)
        .create_if_missing(true);
    let writer = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::raw_sql(CREATE_TABLES).execute(&writer).await.unwrap();

    for (id, code, name) in stations {
        sqlx::query(
            "INSERT INTO station (id, station, name, latitude, longitude, elevation)
             VALUES (?, ?, ?, 21.3, -157.8, 7.0)",
        )
        .bind(*id)
        .bind(*code)
        .bind(*name)
        .execute(&writer)
        .await
        .unwrap();
    }

    for row in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(row.station)
            .bind(row.date)
            .bind(row.prcp)
            .bind(row.tobs)
            .execute(&writer)
            .await
            .unwrap();
    }
    writer.close().await;

    let access = ClimateAccess::new(path.to_str().unwrap(), 2).await.unwrap();
    access.verify_schema().await.unwrap();
    (dir, access)
}
