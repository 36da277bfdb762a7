//! UI serving routes
//!
//! Serves the embedded HTML/JS UI. All page routes share one shell;
//! `app.js` renders Dashboard, Explore, the artist profile, and the chat
//! panel from the JSON API based on the request path.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const APP_JS: &str = include_str!("../ui/app.js");
const STYLE_CSS: &str = include_str!("../ui/style.css");

/// GET /
///
/// The original app lands on Dashboard; keep that entry point.
pub async fn redirect_to_dashboard() -> Redirect {
    Redirect::to("/Dashboard")
}

/// GET /Dashboard
pub async fn serve_dashboard() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /Explore
pub async fn serve_explore() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /ArtistProfile/:id
pub async fn serve_artist_profile() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// GET /static/style.css
pub async fn serve_style_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], STYLE_CSS).into_response()
}
