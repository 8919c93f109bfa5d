use async_trait::async_trait;
use climate_api_core::is_file;
use log::{debug, info};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite,
};
use std::{str::FromStr, time::Duration};
use time::Date;

use super::{
    schema::{MEASUREMENT_COLUMNS, MEASUREMENT_TABLE, STATION_COLUMNS, STATION_TABLE},
    DailyValue, MeasurementField, Station, TemperatureSummary,
};
use crate::dates::{format_date, parse_stored_date, DateRange};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Database file not found: {0}")]
    NotFound(String),
    #[error("Table '{table}' does not match the expected columns: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("Stored measurement date is not yyyy-mm-dd: {0}")]
    StoredDate(String),
}

/// Read access to the station and measurement collections
#[async_trait]
pub trait ClimateData: Sync + Send {
    /// Most recent measurement date, `None` when no measurements are stored
    async fn latest_date(&self) -> Result<Option<Date>, Error>;
    /// `(date, value)` of every measurement strictly after `after`, in surrogate key order
    async fn daily_values(
        &self,
        field: MeasurementField,
        after: Date,
    ) -> Result<Vec<DailyValue>, Error>;
    /// All stations in ascending surrogate key order
    async fn stations(&self) -> Result<Vec<Station>, Error>;
    /// MIN/AVG/MAX observed temperature for measurements in `range`
    async fn temperature_summary(&self, range: DateRange) -> Result<TemperatureSummary, Error>;
}

pub struct ClimateAccess {
    pool: SqlitePool,
}

impl ClimateAccess {
    /// Opens a read-only pool over an existing database file.
    pub async fn new(path: &str, max_connections: u32) -> Result<Self, Error> {
        if !is_file(path) {
            return Err(Error::NotFound(path.to_owned()));
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .read_only(true)
            .create_if_missing(false)
            .pragma("busy_timeout", "5000")
            .pragma("query_only", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("Opened climate database read-only at: {}", path);
        Ok(Self { pool })
    }

    /// Connection scoped to a single read; it goes back to the pool when dropped.
    async fn connection(&self) -> Result<PoolConnection<Sqlite>, Error> {
        Ok(self.pool.acquire().await?)
    }

    /// Check that every declared column of both tables can be selected.
    pub async fn verify_schema(&self) -> Result<(), Error> {
        let mut conn = self.connection().await?;
        for (table, columns) in [
            (MEASUREMENT_TABLE, MEASUREMENT_COLUMNS),
            (STATION_TABLE, STATION_COLUMNS),
        ] {
            let check_sql = format!("SELECT {} FROM {} LIMIT 0", columns.join(", "), table);
            sqlx::query(&check_sql)
                .fetch_all(&mut *conn)
                .await
                .map_err(|source| Error::Schema { table, source })?;
            debug!("verified table {} ({})", table, columns.join(", "));
        }
        Ok(())
    }
}

#[async_trait]
impl ClimateData for ClimateAccess {
    async fn latest_date(&self) -> Result<Option<Date>, Error> {
        let mut conn = self.connection().await?;
        let latest: Option<String> =
            sqlx::query_scalar(&format!("SELECT MAX(date) FROM {}", MEASUREMENT_TABLE))
                .fetch_one(&mut *conn)
                .await?;

        latest
            .map(|raw| parse_stored_date(&raw).map_err(|_| Error::StoredDate(raw)))
            .transpose()
    }

    async fn daily_values(
        &self,
        field: MeasurementField,
        after: Date,
    ) -> Result<Vec<DailyValue>, Error> {
        let query = format!(
            "SELECT date, CAST({column} AS REAL) AS value FROM {table}
             WHERE date > ?
             ORDER BY id ASC",
            column = field.column(),
            table = MEASUREMENT_TABLE,
        );

        let mut conn = self.connection().await?;
        let rows = sqlx::query_as::<_, DailyValue>(&query)
            .bind(format_date(after))
            .fetch_all(&mut *conn)
            .await?;
        debug!(
            "read {} {} rows after {}",
            rows.len(),
            field.column(),
            after
        );
        Ok(rows)
    }

    async fn stations(&self) -> Result<Vec<Station>, Error> {
        let query = format!(
            "SELECT id, station, name,
                    CAST(latitude AS REAL) AS latitude,
                    CAST(longitude AS REAL) AS longitude,
                    CAST(elevation AS REAL) AS elevation
             FROM {}
             ORDER BY id ASC",
            STATION_TABLE
        );

        let mut conn = self.connection().await?;
        let stations = sqlx::query_as::<_, Station>(&query)
            .fetch_all(&mut *conn)
            .await?;
        Ok(stations)
    }

    async fn temperature_summary(&self, range: DateRange) -> Result<TemperatureSummary, Error> {
        let query = format!(
            "SELECT CAST(MIN(tobs) AS REAL) AS tmin,
                    CAST(AVG(tobs) AS REAL) AS tavg,
                    CAST(MAX(tobs) AS REAL) AS tmax
             FROM {} WHERE {}",
            MEASUREMENT_TABLE,
            range.predicate()
        );

        let mut statement = sqlx::query_as::<_, TemperatureSummary>(&query);
        for bound in range.bounds() {
            statement = statement.bind(bound);
        }

        let mut conn = self.connection().await?;
        Ok(statement.fetch_one(&mut *conn).await?)
    }
}
