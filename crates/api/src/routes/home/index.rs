use axum::response::Html;

use crate::templates::home_page;

pub const START_HINT: &str = "Input a start date in place of yyyy-mm-dd on the URL to calculate TMIN, TAVG, and TMAX ... \
     for dates greater than or equal to the start date.";

pub const START_END_HINT: &str = "Input a start date/an end date in place of yyyy-mm-dd/yyyy-mm-dd on the URL to calculate TMIN, TAVG, and TMAX ... \
     for dates between the start and end dates.";

/// Handler for the route index (GET /)
pub async fn index_handler() -> Html<String> {
    Html(home_page().into_string())
}

/// Usage hint for the start-date summary (GET /api/v1.0/yyyy-mm-dd)
pub async fn start_hint() -> &'static str {
    START_HINT
}

/// Usage hint for the range summary (GET /api/v1.0/yyyy-mm-dd/yyyy-mm-dd)
pub async fn start_end_hint() -> &'static str {
    START_END_HINT
}
