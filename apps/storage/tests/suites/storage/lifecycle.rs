use db_infra::build_pool;
use hbnb_storage::{DbConfig, DbKind, DbStorage, ModelClass, RuntimeEnv};
use sea_orm::ConnectionTrait;

use crate::support::factory::{self, loaded_file_storage};

#[tokio::test]
async fn test_committed_work_survives_a_new_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hbnb.sqlite");

    let mut writer = loaded_file_storage(&path, RuntimeEnv::Prod).await;
    let key = writer.new(factory::state()).await.unwrap();
    writer.save().await.unwrap();
    writer.dispose().await.unwrap();

    let mut reader = loaded_file_storage(&path, RuntimeEnv::Prod).await;
    assert_eq!(reader.kind(), DbKind::SqliteFile);
    assert_eq!(reader.env(), RuntimeEnv::Prod);
    assert!(reader.all(None).await.unwrap().contains_key(&key));
    reader.dispose().await.unwrap();
}

#[tokio::test]
async fn test_uncommitted_work_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hbnb.sqlite");

    let mut writer = loaded_file_storage(&path, RuntimeEnv::Prod).await;
    writer.new(factory::state()).await.unwrap();
    writer.dispose().await.unwrap();

    let mut reader = loaded_file_storage(&path, RuntimeEnv::Prod).await;
    assert_eq!(reader.count(None).await.unwrap(), 0);
    reader.dispose().await.unwrap();
}

#[tokio::test]
async fn test_test_environment_starts_from_empty_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hbnb.sqlite");

    let mut prod = loaded_file_storage(&path, RuntimeEnv::Prod).await;
    prod.new(factory::state()).await.unwrap();
    prod.new(factory::amenity()).await.unwrap();
    prod.save().await.unwrap();
    prod.dispose().await.unwrap();

    let mut test = loaded_file_storage(&path, RuntimeEnv::Test).await;
    assert_eq!(test.env(), RuntimeEnv::Test);
    assert_eq!(test.count(None).await.unwrap(), 0);
    test.dispose().await.unwrap();
}

#[tokio::test]
async fn test_reload_recreates_table_dropped_out_of_band() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hbnb.sqlite");

    let mut storage = loaded_file_storage(&path, RuntimeEnv::Prod).await;
    let kept = storage.new(factory::state()).await.unwrap();
    storage.save().await.unwrap();
    storage.dispose().await.unwrap();

    let raw = build_pool(&DbConfig::sqlite_file(&path, RuntimeEnv::Prod))
        .await
        .unwrap();
    raw.execute_unprepared("DROP TABLE place_amenity").await.unwrap();
    raw.execute_unprepared("DROP TABLE amenities").await.unwrap();
    raw.close().await.unwrap();

    let mut storage = loaded_file_storage(&path, RuntimeEnv::Prod).await;
    assert!(storage
        .all(Some(ModelClass::Amenity))
        .await
        .unwrap()
        .is_empty());
    assert!(storage.all(None).await.unwrap().contains_key(&kept));
    storage.new(factory::amenity()).await.unwrap();
    storage.save().await.unwrap();
    assert_eq!(storage.count(Some(ModelClass::Amenity)).await.unwrap(), 1);
    storage.dispose().await.unwrap();
}

#[tokio::test]
async fn test_test_environment_drops_tables_unknown_to_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hbnb.sqlite");

    // Tables and a row written without any migration ledger.
    let raw = build_pool(&DbConfig::sqlite_file(&path, RuntimeEnv::Prod))
        .await
        .unwrap();
    migration::create_tables(&raw).await.unwrap();
    raw.execute_unprepared(
        "INSERT INTO states (id, created_at, updated_at, name) \
         VALUES ('legacy-1', '2017-03-25 19:42:40', '2017-03-25 19:42:40', 'Ghost')",
    )
    .await
    .unwrap();
    raw.close().await.unwrap();

    let mut storage = loaded_file_storage(&path, RuntimeEnv::Test).await;
    assert_eq!(storage.count(Some(ModelClass::State)).await.unwrap(), 0);
    storage.dispose().await.unwrap();
}

#[tokio::test]
async fn test_connect_alone_opens_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = DbConfig::sqlite_file(dir.path().join("hbnb.sqlite"), RuntimeEnv::Prod);

    let storage = DbStorage::connect(&config).await.unwrap();
    assert!(!storage.is_loaded());
    storage.dispose().await.unwrap();
}

#[tokio::test]
async fn test_from_env_rejects_incomplete_mysql_settings() {
    // No HBNB_* variables are set in the test process, so the default MySQL
    // backend is missing its user.
    if std::env::var_os("HBNB_MYSQL_USER").is_some() || std::env::var_os("HBNB_STORAGE_DB").is_some()
    {
        return;
    }

    let err = DbStorage::from_env().await.err().unwrap();
    assert_eq!(err.code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("HBNB_MYSQL_USER"));
}

#[tokio::test]
async fn test_memory_storage_reports_its_kind() {
    let storage = DbStorage::connect(&DbConfig::sqlite_memory(RuntimeEnv::Test))
        .await
        .unwrap();
    assert_eq!(storage.kind(), DbKind::SqliteMemory);
    storage.dispose().await.unwrap();
}
