use axum::Router;
use extguard_domain::RegistryPolicy;
use extguard_infra::{DatabaseManager, SeaOrmExtensionRepository};
use extguard_service::{DefaultExtensionService, ExtensionService};
use extguard_web::{AppState, PageRenderer};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::Result;

/// 创建应用路由
pub fn create_app(state: AppState) -> Router {
    extguard_web::create_router(state).layer(
        ServiceBuilder::new()
            // 最先添加的层在最外层
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}

/// 初始化应用状态
pub fn init_app_state(db_manager: &DatabaseManager, policy: RegistryPolicy) -> Result<AppState> {
    let extension_service: Arc<dyn ExtensionService> = Arc::new(DefaultExtensionService::new(
        db_manager.connection(),
        SeaOrmExtensionRepository::new(),
        policy.clone(),
    ));

    let page_renderer = Arc::new(PageRenderer::new()?);

    Ok(AppState::new(extension_service, Arc::new(policy), page_renderer))
}
