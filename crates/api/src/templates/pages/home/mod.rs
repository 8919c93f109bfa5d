use maud::{html, Markup};

/// Paths listed on the index page, in display order
pub const API_ROUTES: &[&str] = &[
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/yyyy-mm-dd",
    "/api/v1.0/yyyy-mm-dd/yyyy-mm-dd",
];

pub fn home_page() -> Markup {
    html! {
        "Welcome to Climate App API" br;
        "------------------------------------" br; br;
        "Available API Routes:" br; br;
        @for (idx, route) in API_ROUTES.iter().enumerate() {
            (route)
            @if idx + 1 < API_ROUTES.len() {
                br;
            }
        }
    }
}
