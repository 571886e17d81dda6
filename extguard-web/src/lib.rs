pub mod app_state;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod templates;

pub use app_state::AppState;
pub use handlers::*;
pub use router::create_router;
pub use templates::PageRenderer;
