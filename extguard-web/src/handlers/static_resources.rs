use axum::{
    http::header,
    response::IntoResponse,
};

const MAIN_JS: &str = include_str!("../../static/main.js");
const FLOW_TEST_JS: &str = include_str!("../../static/flow_test.js");

const JAVASCRIPT: &str = "application/javascript; charset=utf-8";

/// GET /static/main.js
pub async fn main_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, JAVASCRIPT)], MAIN_JS)
}

/// GET /static/flow_test.js
pub async fn flow_test_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, JAVASCRIPT)], FLOW_TEST_JS)
}
