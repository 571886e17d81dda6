use crate::templates::PageRenderer;
use extguard_domain::RegistryPolicy;
use extguard_service::ExtensionService;
use std::sync::Arc;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub extension_service: Arc<dyn ExtensionService>,
    /// 固定扩展名和上限，页面渲染时读取
    pub policy: Arc<RegistryPolicy>,
    pub page_renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(
        extension_service: Arc<dyn ExtensionService>,
        policy: Arc<RegistryPolicy>,
        page_renderer: Arc<PageRenderer>,
    ) -> Self {
        Self {
            extension_service,
            policy,
            page_renderer,
        }
    }
}
