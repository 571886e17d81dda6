use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use extguard_domain::{Extension, ExtensionType};
use extguard_service::ServiceError;
use crate::AppState;
use serde::Serialize;
use serde_json::json;
use tera::Context;
use tracing::{error, info};

/// 固定扩展名复选框
#[derive(Debug, Serialize)]
struct FixedExtensionView {
    name: String,
    checked: bool,
}

fn render_page(state: &AppState, template_name: &str, context: &Context) -> Response {
    match state.page_renderer.render(template_name, context) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = ?e, "Failed to render {}", template_name);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// 首页
/// GET /
pub async fn main_page(State(state): State<AppState>) -> Response {
    info!("Rendering main page");
    render_page(&state, "main.html", &Context::new())
}

/// 扩展名管理页面
/// GET /flowtest
/// 加载失败时以空列表渲染
pub async fn flow_test_page(State(state): State<AppState>) -> Response {
    info!("Rendering extension management page");

    let service = &state.extension_service;
    let loaded = async {
        let check_extensions = service.list_by_type(ExtensionType::Check).await?;
        let label_extensions = service.list_by_type(ExtensionType::Label).await?;
        Ok::<_, ServiceError>((check_extensions, label_extensions))
    }
    .await;

    let (check_extensions, label_extensions): (Vec<Extension>, Vec<Extension>) = match loaded {
        Ok(lists) => {
            info!(
                "Extensions loaded - check: {}, label: {}",
                lists.0.len(),
                lists.1.len()
            );
            lists
        }
        Err(e) => {
            error!(error = ?e, "Failed to load extensions for management page");
            (Vec::new(), Vec::new())
        }
    };

    let policy = &state.policy;
    let fixed_extensions: Vec<FixedExtensionView> = policy
        .fixed_extensions
        .iter()
        .map(|name| FixedExtensionView {
            name: name.clone(),
            checked: check_extensions.iter().any(|e| e.name.eq_ignore_ascii_case(name)),
        })
        .collect();

    // 内嵌在<script>中，转义 < 以免提前闭合标签
    let server_data = json!({
        "checkExtensions": check_extensions,
        "labelExtensions": label_extensions,
        "labelExtensionCount": label_extensions.len(),
        "labelLimit": policy.label_limit,
        "fixedExtensions": policy.fixed_extensions,
    })
    .to_string()
    .replace('<', "\\u003c");

    let mut context = Context::new();
    context.insert("fixed_extensions", &fixed_extensions);
    context.insert("check_extensions", &check_extensions);
    context.insert("label_extensions", &label_extensions);
    context.insert("label_extension_count", &label_extensions.len());
    context.insert("label_limit", &policy.label_limit);
    context.insert("server_data", &server_data);

    render_page(&state, "flow_test.html", &context)
}
