pub mod database;

pub use database::{DatabaseManager, ExtensionRepository, SeaOrmExtensionRepository, StoreError};
