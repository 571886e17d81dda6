use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use extguard_domain::{is_valid_extension_name, Extension, ExtensionType};
use extguard_service::ServiceError;
use crate::AppState;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// 新增扩展名请求
/// 字段都是可选的，缺失时按校验规则返回400
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AddExtensionRequest {
    pub name: Option<String>,

    /// check 或 label
    #[serde(rename = "type")]
    pub kind: Option<String>,

    #[serde(rename = "regId")]
    pub reg_id: Option<String>,
}

/// 请求校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter an extension name.")]
    MissingName,

    #[error("Please select a valid extension type.")]
    InvalidType,

    #[error("Only letters and digits are allowed (1-20 characters, no spaces).")]
    InvalidName,
}

impl AddExtensionRequest {
    /// 依次检查：名称非空、类型合法、名称语法
    pub fn validate(&self) -> Result<(&str, ExtensionType), ValidationError> {
        let name = match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ValidationError::MissingName),
        };

        let kind = self
            .kind
            .as_deref()
            .and_then(|kind| kind.parse::<ExtensionType>().ok())
            .ok_or(ValidationError::InvalidType)?;

        if !is_valid_extension_name(name) {
            return Err(ValidationError::InvalidName);
        }

        Ok((name, kind))
    }
}

/// 全部扩展名响应
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtensionListResponse {
    #[serde(rename = "checkExtensions")]
    pub check_extensions: Vec<Extension>,
    #[serde(rename = "labelExtensions")]
    pub label_extensions: Vec<Extension>,
    pub success: bool,
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({"success": false, "message": message.into()})),
    )
        .into_response()
}

/// 列出全部扩展名
/// GET /api/extensions
#[utoipa::path(
    get,
    path = "/api/extensions",
    tag = "extensions",
    responses(
        (status = 200, description = "CHECK和LABEL两类扩展名", body = ExtensionListResponse),
        (status = 500, description = "查询失败"),
    )
)]
pub async fn list_extensions(State(state): State<AppState>) -> Response {
    let service = &state.extension_service;
    let result = async {
        let check_extensions = service.list_by_type(ExtensionType::Check).await?;
        let label_extensions = service.list_by_type(ExtensionType::Label).await?;
        Ok::<_, ServiceError>(ExtensionListResponse {
            check_extensions,
            label_extensions,
            success: true,
        })
    }
    .await;

    match result {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            error!(error = ?e, "Failed to list extensions");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while loading extensions.",
            )
        }
    }
}

async fn list_by_type(state: &AppState, kind: ExtensionType) -> Response {
    match state.extension_service.list_by_type(kind).await {
        Ok(extensions) => Json(extensions).into_response(),
        Err(e) => {
            error!(error = ?e, "Failed to list {} extensions", kind);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// 列出固定扩展名
/// GET /api/extensions/check
#[utoipa::path(
    get,
    path = "/api/extensions/check",
    tag = "extensions",
    responses(
        (status = 200, body = [Extension]),
        (status = 500, description = "查询失败，无响应体"),
    )
)]
pub async fn list_check_extensions(State(state): State<AppState>) -> Response {
    list_by_type(&state, ExtensionType::Check).await
}

/// 列出自定义扩展名
/// GET /api/extensions/label
#[utoipa::path(
    get,
    path = "/api/extensions/label",
    tag = "extensions",
    responses(
        (status = 200, body = [Extension]),
        (status = 500, description = "查询失败，无响应体"),
    )
)]
pub async fn list_label_extensions(State(state): State<AppState>) -> Response {
    list_by_type(&state, ExtensionType::Label).await
}

/// 新增扩展名
/// POST /api/extensions
#[utoipa::path(
    post,
    path = "/api/extensions",
    tag = "extensions",
    request_body = AddExtensionRequest,
    responses(
        (status = 200, description = "新增成功，返回extension"),
        (status = 400, description = "校验失败、重复或超出上限"),
        (status = 500, description = "未预期的错误"),
    )
)]
pub async fn add_extension(
    State(state): State<AppState>,
    payload: Result<Json<AddExtensionRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected extension request body: {}", rejection);
            return failure(StatusCode::BAD_REQUEST, "Invalid request body.");
        }
    };

    let (name, kind) = match request.validate() {
        Ok(valid) => valid,
        Err(e) => return failure(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state
        .extension_service
        .add(name, kind, request.reg_id.as_deref())
        .await
    {
        Ok(extension) => Json(json!({
            "success": true,
            "message": "Extension added successfully.",
            "extension": extension,
        }))
        .into_response(),
        Err(e @ (ServiceError::DuplicateName(_) | ServiceError::LimitExceeded(_))) => {
            warn!("Failed to add extension: {}", e);
            failure(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            error!(error = ?e, "Unexpected error while adding extension");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while adding the extension.",
            )
        }
    }
}

/// 按名称删除扩展名，静态路由也复用
pub async fn remove_extension_by_name(state: &AppState, name: &str) -> Response {
    match state.extension_service.remove(name).await {
        Ok(deleted) if deleted > 0 => Json(json!({
            "success": true,
            "message": "Extension deleted successfully.",
        }))
        .into_response(),
        Ok(_) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!(error = ?e, "Failed to delete extension {}", name);
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while deleting the extension.",
            )
        }
    }
}

/// 删除扩展名
/// DELETE /api/extensions/{name}
#[utoipa::path(
    delete,
    path = "/api/extensions/{name}",
    tag = "extensions",
    params(("name" = String, Path, description = "扩展名")),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "扩展名不存在"),
        (status = 500, description = "删除失败"),
    )
)]
pub async fn remove_extension(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    remove_extension_by_name(&state, &name).await
}

/// 检查扩展名是否存在
/// GET /api/extensions/exists/{name}
#[utoipa::path(
    get,
    path = "/api/extensions/exists/{name}",
    tag = "extensions",
    params(("name" = String, Path, description = "扩展名，忽略大小写")),
    responses(
        (status = 200, description = "{exists: bool}"),
        (status = 500, description = "{exists: false, error}"),
    )
)]
pub async fn check_extension_exists(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    match state.extension_service.exists(&name).await {
        Ok(exists) => Json(json!({"exists": exists})).into_response(),
        Err(e) => {
            error!(error = ?e, "Failed to check extension {}", name);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"exists": false, "error": "An error occurred while checking."})),
            )
                .into_response()
        }
    }
}
