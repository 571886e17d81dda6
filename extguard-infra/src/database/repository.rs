use crate::database::ext::{self, Entity as ExtEntity, Model as ExtModel};
use async_trait::async_trait;
use extguard_domain::{Extension, ExtensionType, NewExtension};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use thiserror::Error;

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unique constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Invalid row in ext table: {0}")]
    InvalidRow(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    fn from_insert(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::ConstraintViolation(detail),
            _ => StoreError::Database(err),
        }
    }
}

impl TryFrom<ExtModel> for Extension {
    type Error = StoreError;

    fn try_from(model: ExtModel) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse::<ExtensionType>()
            .map_err(|e| StoreError::InvalidRow(format!("idx {}: {}", model.idx, e)))?;

        Ok(Extension {
            idx: model.idx,
            kind,
            name: model.name,
            registered_by: model.reg_id,
            registered_at: model.reg_date,
            modified_by: model.mod_id,
            modified_at: model.mod_date,
        })
    }
}

/// ExtensionRepository trait 定义ext表的数据访问操作
/// 每个方法都接受一个连接参数，既可以是连接池也可以是事务
#[async_trait]
pub trait ExtensionRepository: Send + Sync {
    /// 插入记录，返回带有分配ID的实体
    async fn insert<C: ConnectionTrait>(&self, conn: &C, record: NewExtension) -> Result<Extension, StoreError>;
    async fn select_by_type<C: ConnectionTrait>(&self, conn: &C, kind: ExtensionType) -> Result<Vec<Extension>, StoreError>;
    async fn select_by_name<C: ConnectionTrait>(&self, conn: &C, name: &str) -> Result<Option<Extension>, StoreError>;
    async fn count_by_type<C: ConnectionTrait>(&self, conn: &C, kind: ExtensionType) -> Result<u64, StoreError>;
    /// 返回删除的行数（0或1）
    async fn delete_by_name<C: ConnectionTrait>(&self, conn: &C, name: &str) -> Result<u64, StoreError>;
    async fn exists_by_name<C: ConnectionTrait>(&self, conn: &C, name: &str) -> Result<bool, StoreError>;
}

/// SeaOrmExtensionRepository 使用Sea-ORM实现的Repository
#[derive(Debug, Clone, Copy, Default)]
pub struct SeaOrmExtensionRepository;

impl SeaOrmExtensionRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExtensionRepository for SeaOrmExtensionRepository {
    async fn insert<C: ConnectionTrait>(&self, conn: &C, record: NewExtension) -> Result<Extension, StoreError> {
        let active_model = ext::ActiveModel {
            kind: Set(record.kind.as_str().to_string()),
            name: Set(record.name),
            reg_id: Set(Some(record.registered_by)),
            reg_date: Set(record.registered_at),
            ..Default::default()
        };

        let model = active_model
            .insert(conn)
            .await
            .map_err(StoreError::from_insert)?;

        Extension::try_from(model)
    }

    async fn select_by_type<C: ConnectionTrait>(&self, conn: &C, kind: ExtensionType) -> Result<Vec<Extension>, StoreError> {
        ExtEntity::find()
            .filter(ext::Column::Kind.eq(kind.as_str()))
            .order_by_asc(ext::Column::Idx)
            .all(conn)
            .await?
            .into_iter()
            .map(Extension::try_from)
            .collect()
    }

    async fn select_by_name<C: ConnectionTrait>(&self, conn: &C, name: &str) -> Result<Option<Extension>, StoreError> {
        ExtEntity::find()
            .filter(ext::Column::Name.eq(name))
            .one(conn)
            .await?
            .map(Extension::try_from)
            .transpose()
    }

    async fn count_by_type<C: ConnectionTrait>(&self, conn: &C, kind: ExtensionType) -> Result<u64, StoreError> {
        let count = ExtEntity::find()
            .filter(ext::Column::Kind.eq(kind.as_str()))
            .count(conn)
            .await?;
        Ok(count)
    }

    async fn delete_by_name<C: ConnectionTrait>(&self, conn: &C, name: &str) -> Result<u64, StoreError> {
        let result = ExtEntity::delete_many()
            .filter(ext::Column::Name.eq(name))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn exists_by_name<C: ConnectionTrait>(&self, conn: &C, name: &str) -> Result<bool, StoreError> {
        let count = ExtEntity::find()
            .filter(ext::Column::Name.eq(name))
            .count(conn)
            .await?;
        Ok(count > 0)
    }
}
