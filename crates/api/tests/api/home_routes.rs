use crate::helpers::{spawn_app, MockClimateAccess};
use axum::http::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn index_lists_available_routes() {
    let test_app = spawn_app(Arc::new(MockClimateAccess::new())).await;
    let (status, body) = test_app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to Climate App API"));
    for route in [
        "/api/v1.0/precipitation",
        "/api/v1.0/stations",
        "/api/v1.0/tobs",
        "/api/v1.0/yyyy-mm-dd",
        "/api/v1.0/yyyy-mm-dd/yyyy-mm-dd",
    ] {
        assert!(body.contains(route), "missing {route}");
    }
}

#[tokio::test]
async fn hint_paths_are_not_parsed_as_dates() {
    // No expectations: any store call would panic the mock
    let test_app = spawn_app(Arc::new(MockClimateAccess::new())).await;

    let (status, body) = test_app.get("/api/v1.0/yyyy-mm-dd").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Input a start date in place of yyyy-mm-dd"));
    assert!(body.ends_with("greater than or equal to the start date."));

    let (status, body) = test_app.get("/api/v1.0/yyyy-mm-dd/yyyy-mm-dd").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Input a start date/an end date"));
    assert!(body.ends_with("between the start and end dates."));
}

#[tokio::test]
async fn docs_are_served() {
    let test_app = spawn_app(Arc::new(MockClimateAccess::new())).await;
    let (status, body) = test_app.get("/docs").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/v1.0/precipitation"));
}
