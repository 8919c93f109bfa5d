use crate::{
    db::{self, ClimateAccess, ClimateData},
    index_handler, precipitation, routes, start_end_hint, start_end_summary, start_hint,
    start_summary, stations, tobs,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub climate_db: Arc<dyn ClimateData>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::climate_routes::precipitation,
        routes::climate::climate_routes::stations,
        routes::climate::climate_routes::tobs,
        routes::climate::climate_routes::start_summary,
        routes::climate::climate_routes::start_end_summary,
    ),
    components(
        schemas(
                db::Station,
                db::TemperatureSummary,
                routes::climate::ErrorBody
            )
    ),
    tags(
        (name = "climate api", description = "a read-only RESTful api over station precipitation and temperature observations")
    )
)]
struct ApiDoc;

pub async fn build_app_state(database: String, max_connections: u32) -> Result<AppState, anyhow::Error> {
    let climate_db = ClimateAccess::new(&database, max_connections)
        .await
        .map_err(|e| anyhow!("error opening climate database: {}", e))?;

    climate_db
        .verify_schema()
        .await
        .map_err(|e| anyhow!("error verifying climate database: {}", e))?;

    Ok(AppState {
        climate_db: Arc::new(climate_db),
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        // Static hint paths take priority over the date captures below
        .route("/api/v1.0/yyyy-mm-dd", get(start_hint))
        .route("/api/v1.0/yyyy-mm-dd/yyyy-mm-dd", get(start_end_hint))
        .route("/api/v1.0/{start}", get(start_summary))
        .route("/api/v1.0/{start}/{end}", get(start_end_summary))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
