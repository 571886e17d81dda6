use crate::handlers::extensions::{self, AddExtensionRequest, ExtensionListResponse};
use axum::Json;
use extguard_domain::{Extension, ExtensionType};
use utoipa::OpenApi;

/// OpenAPI文档配置
#[derive(OpenApi)]
#[openapi(
    paths(
        extensions::list_extensions,
        extensions::list_check_extensions,
        extensions::list_label_extensions,
        extensions::add_extension,
        extensions::remove_extension,
        extensions::check_extension_exists,
    ),
    components(schemas(Extension, ExtensionType, AddExtensionRequest, ExtensionListResponse)),
    tags(
        (name = "extensions", description = "文件扩展名屏蔽设置"),
    ),
    info(
        title = "extguard API",
        description = "文件扩展名屏蔽注册表",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
