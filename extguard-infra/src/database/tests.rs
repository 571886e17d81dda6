use crate::database::{DatabaseManager, ExtensionRepository, SeaOrmExtensionRepository, StoreError};
use chrono::Utc;
use extguard_domain::{ExtensionType, NewExtension};
use sea_orm::TransactionTrait;

fn new_extension(name: &str, kind: ExtensionType) -> NewExtension {
    NewExtension {
        kind,
        name: name.to_string(),
        registered_by: "system".to_string(),
        registered_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_insert_assigns_idx() {
    let manager = DatabaseManager::in_memory().await.unwrap();
    let db = manager.connection();
    let repository = SeaOrmExtensionRepository::new();

    let first = repository.insert(&*db, new_extension("pdf", ExtensionType::Label)).await.unwrap();
    let second = repository.insert(&*db, new_extension("exe", ExtensionType::Check)).await.unwrap();

    assert_ne!(first.idx, second.idx);
    assert_eq!(first.name, "pdf");
    assert_eq!(first.kind, ExtensionType::Label);
    assert_eq!(first.registered_by.as_deref(), Some("system"));
    assert!(first.modified_by.is_none());
    assert!(first.modified_at.is_none());
}

#[tokio::test]
async fn test_insert_duplicate_name_violates_constraint() {
    let manager = DatabaseManager::in_memory().await.unwrap();
    let db = manager.connection();
    let repository = SeaOrmExtensionRepository::new();

    repository.insert(&*db, new_extension("pdf", ExtensionType::Label)).await.unwrap();
    // 类型不同也不允许同名
    let result = repository.insert(&*db, new_extension("pdf", ExtensionType::Check)).await;

    assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));
}

#[tokio::test]
async fn test_select_by_type_and_count() {
    let manager = DatabaseManager::in_memory().await.unwrap();
    let db = manager.connection();
    let repository = SeaOrmExtensionRepository::new();

    for name in ["bat", "exe"] {
        repository.insert(&*db, new_extension(name, ExtensionType::Check)).await.unwrap();
    }
    for name in ["pdf", "zip", "hwp"] {
        repository.insert(&*db, new_extension(name, ExtensionType::Label)).await.unwrap();
    }

    let checks = repository.select_by_type(&*db, ExtensionType::Check).await.unwrap();
    let labels = repository.select_by_type(&*db, ExtensionType::Label).await.unwrap();

    assert_eq!(checks.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(), vec!["bat", "exe"]);
    assert_eq!(labels.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(), vec!["pdf", "zip", "hwp"]);
    assert_eq!(repository.count_by_type(&*db, ExtensionType::Label).await.unwrap(), 3);
    assert_eq!(repository.count_by_type(&*db, ExtensionType::Check).await.unwrap(), 2);
}

#[tokio::test]
async fn test_select_exists_and_delete_by_name() {
    let manager = DatabaseManager::in_memory().await.unwrap();
    let db = manager.connection();
    let repository = SeaOrmExtensionRepository::new();

    repository.insert(&*db, new_extension("pdf", ExtensionType::Label)).await.unwrap();

    let found = repository.select_by_name(&*db, "pdf").await.unwrap();
    assert_eq!(found.map(|e| e.name), Some("pdf".to_string()));
    assert!(repository.select_by_name(&*db, "zip").await.unwrap().is_none());
    assert!(repository.exists_by_name(&*db, "pdf").await.unwrap());

    assert_eq!(repository.delete_by_name(&*db, "pdf").await.unwrap(), 1);
    assert_eq!(repository.delete_by_name(&*db, "pdf").await.unwrap(), 0);
    assert!(!repository.exists_by_name(&*db, "pdf").await.unwrap());
}

#[tokio::test]
async fn test_uncommitted_transaction_rolls_back() {
    let manager = DatabaseManager::in_memory().await.unwrap();
    let db = manager.connection();
    let repository = SeaOrmExtensionRepository::new();

    {
        let txn = db.begin().await.unwrap();
        repository.insert(&txn, new_extension("pdf", ExtensionType::Label)).await.unwrap();
        // 未提交即丢弃
    }

    assert!(!repository.exists_by_name(&*db, "pdf").await.unwrap());
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let manager = DatabaseManager::in_memory().await.unwrap();
    manager.ensure_schema().await.unwrap();
}
