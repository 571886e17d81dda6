use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Router,
};
use crate::{handlers, openapi, AppState};

/// 创建应用路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // 页面
        .route("/", get(handlers::main_page))
        .route("/flowtest", get(handlers::flow_test_page))
        .route("/static/main.js", get(handlers::main_js))
        .route("/static/flow_test.js", get(handlers::flow_test_js))
        // 扩展名API
        .route(
            "/api/extensions",
            get(handlers::list_extensions).post(handlers::add_extension),
        )
        // 静态段优先于 :name 匹配，名为check/label的扩展名在这里删除
        .route(
            "/api/extensions/check",
            get(handlers::list_check_extensions).delete(remove_check_named),
        )
        .route(
            "/api/extensions/label",
            get(handlers::list_label_extensions).delete(remove_label_named),
        )
        .route("/api/extensions/exists/:name", get(handlers::check_extension_exists))
        .route("/api/extensions/:name", delete(handlers::remove_extension))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn remove_check_named(State(state): State<AppState>) -> impl IntoResponse {
    handlers::remove_extension_by_name(&state, "check").await
}

async fn remove_label_named(State(state): State<AppState>) -> impl IntoResponse {
    handlers::remove_extension_by_name(&state, "label").await
}

/// 健康检查端点
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
