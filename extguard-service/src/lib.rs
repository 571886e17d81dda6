pub mod extension_service;

pub use extension_service::{DefaultExtensionService, ExtensionService, ServiceError};
