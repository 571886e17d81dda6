use async_trait::async_trait;
use chrono::Utc;
use extguard_domain::{
    normalize_extension_name, Extension, ExtensionType, NewExtension, RegistryPolicy,
    DEFAULT_REGISTRANT,
};
use extguard_infra::{ExtensionRepository, StoreError};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// 扩展名服务错误
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Extension already exists: {0}")]
    DuplicateName(String),

    #[error("You can add at most {0} extensions.")]
    LimitExceeded(usize),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        ServiceError::Store(StoreError::Database(err))
    }
}

/// 扩展名服务trait
/// 名称语法由调用方预先校验，服务只负责唯一性和数量上限
#[async_trait]
pub trait ExtensionService: Send + Sync {
    async fn list_by_type(&self, kind: ExtensionType) -> Result<Vec<Extension>, ServiceError>;

    /// 名称转为小写后再查询
    async fn exists(&self, name: &str) -> Result<bool, ServiceError>;

    /// 新增扩展名，registered_by 为空时记为 system
    async fn add(&self, name: &str, kind: ExtensionType, registered_by: Option<&str>) -> Result<Extension, ServiceError>;

    /// 按名称删除，返回删除的行数
    async fn remove(&self, name: &str) -> Result<u64, ServiceError>;
}

pub struct DefaultExtensionService<R: ExtensionRepository> {
    db: Arc<DatabaseConnection>,
    repository: R,
    policy: RegistryPolicy,
}

impl<R: ExtensionRepository> DefaultExtensionService<R> {
    pub fn new(db: Arc<DatabaseConnection>, repository: R, policy: RegistryPolicy) -> Self {
        Self { db, repository, policy }
    }
}

#[async_trait]
impl<R: ExtensionRepository> ExtensionService for DefaultExtensionService<R> {
    async fn list_by_type(&self, kind: ExtensionType) -> Result<Vec<Extension>, ServiceError> {
        info!("Listing {} extensions", kind);
        Ok(self.repository.select_by_type(&*self.db, kind).await?)
    }

    async fn exists(&self, name: &str) -> Result<bool, ServiceError> {
        let name = normalize_extension_name(name);
        Ok(self.repository.exists_by_name(&*self.db, &name).await?)
    }

    async fn add(&self, name: &str, kind: ExtensionType, registered_by: Option<&str>) -> Result<Extension, ServiceError> {
        let name = normalize_extension_name(name);
        let registered_by = registered_by
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(DEFAULT_REGISTRANT);
        info!("Adding extension - name: {}, type: {}, regId: {}", name, kind, registered_by);

        // 事务未提交时被丢弃即回滚
        let txn = self.db.begin().await?;

        if self.repository.exists_by_name(&txn, &name).await? {
            warn!("Extension already exists: {}", name);
            return Err(ServiceError::DuplicateName(name));
        }

        if kind == ExtensionType::Label {
            let count = self.repository.count_by_type(&txn, ExtensionType::Label).await?;
            if count >= self.policy.label_limit as u64 {
                warn!("Label extension limit reached ({})", self.policy.label_limit);
                return Err(ServiceError::LimitExceeded(self.policy.label_limit));
            }
        }

        let record = NewExtension {
            kind,
            name: name.clone(),
            registered_by: registered_by.to_string(),
            registered_at: Utc::now(),
        };

        let extension = match self.repository.insert(&txn, record).await {
            Ok(extension) => extension,
            // 并发插入抢先一步
            Err(StoreError::ConstraintViolation(detail)) => {
                warn!("Extension {} rejected by unique constraint: {}", name, detail);
                return Err(ServiceError::DuplicateName(name));
            }
            Err(e) => return Err(e.into()),
        };

        txn.commit().await?;

        info!("Extension added - idx: {}, name: {}", extension.idx, extension.name);
        Ok(extension)
    }

    async fn remove(&self, name: &str) -> Result<u64, ServiceError> {
        let name = normalize_extension_name(name);
        info!("Removing extension - name: {}", name);

        let txn = self.db.begin().await?;
        let deleted = self.repository.delete_by_name(&txn, &name).await?;
        txn.commit().await?;

        if deleted > 0 {
            info!("Extension removed - name: {}", name);
        } else {
            warn!("Extension to remove not found - name: {}", name);
        }
        Ok(deleted)
    }
}
