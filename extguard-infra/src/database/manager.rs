use crate::database::ext;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::sync::Arc;
use tracing::info;

/// DatabaseManager 管理关系数据库连接
#[derive(Clone)]
pub struct DatabaseManager {
    db: Arc<DatabaseConnection>,
}

impl DatabaseManager {
    /// 按连接选项建立连接池
    pub async fn new(options: ConnectOptions) -> Result<Self, DbErr> {
        let db = Database::connect(options).await?;
        Ok(Self { db: Arc::new(db) })
    }

    /// 内存SQLite数据库，已建好ext表
    /// 用于测试和本地试用
    pub async fn in_memory() -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        // 每个连接都是独立的内存库，只能保留一个
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let manager = Self::new(options).await?;
        manager.ensure_schema().await?;
        Ok(manager)
    }

    /// 获取数据库连接
    pub fn connection(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }

    /// 按实体定义创建ext表（已存在则跳过）
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut statement = schema.create_table_from_entity(ext::Entity);
        statement.if_not_exists();

        self.db.execute(backend.build(&statement)).await?;
        info!("Table ext is ready ({:?})", backend);
        Ok(())
    }
}
