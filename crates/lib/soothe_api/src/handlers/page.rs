//! Landing page and its script, embedded at compile time.

use axum::http::header;
use axum::response::{Html, IntoResponse};

pub const SCRIPT_PATH: &str = "/static/script.js";

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const SCRIPT_JS: &str = include_str!("../../assets/script.js");

/// `GET /`: the chat page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /static/script.js`: the chat client.
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
