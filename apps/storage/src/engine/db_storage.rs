use std::collections::BTreeMap;

use db_infra::config::db::{DbConfig, DbKind, RuntimeEnv};
use db_infra::{build_pool, drop_schema, ensure_schema};
use sea_orm::DatabaseConnection;
use tracing::{debug, info, trace, warn};

use super::session::Session;
use crate::adapters::records_sea;
use crate::entities::amenities;
use crate::error::StorageError;
use crate::models::{ModelClass, Record};

/// Relational storage for every model class.
///
/// Owns the engine (a connection pool) and at most one session. Nothing but
/// `reload` works until `reload` has bound the first session.
pub struct DbStorage {
    engine: DatabaseConnection,
    kind: DbKind,
    env: RuntimeEnv,
    session: Option<Session>,
}

impl DbStorage {
    /// Open the engine described by `config`.
    ///
    /// In the test environment every managed table is dropped before
    /// returning, including tables the migration ledger does not know about.
    pub async fn connect(config: &DbConfig) -> Result<Self, StorageError> {
        let engine = build_pool(config).await?;

        if config.env == RuntimeEnv::Test {
            info!(db_kind = %config.kind, "storage=reset reason=test_env");
            drop_schema(&engine, config.kind).await?;
        }

        Ok(Self {
            engine,
            kind: config.kind,
            env: config.env,
            session: None,
        })
    }

    /// `connect` with settings read from the `HBNB_*` environment variables.
    pub async fn from_env() -> Result<Self, StorageError> {
        let config = DbConfig::from_env()?;
        Self::connect(&config).await
    }

    pub fn env(&self) -> RuntimeEnv {
        self.env
    }

    pub fn kind(&self) -> DbKind {
        self.kind
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    /// Every stored record of `cls`, or of all classes when `None`, keyed by
    /// `"<ClassName>.<id>"`.
    pub async fn all(
        &mut self,
        cls: Option<ModelClass>,
    ) -> Result<BTreeMap<String, Record>, StorageError> {
        let classes: &[ModelClass] = match &cls {
            Some(c) => std::slice::from_ref(c),
            None => &ModelClass::ALL,
        };

        let txn = self.session()?.active().await?;
        let mut objects = BTreeMap::new();
        for &class in classes {
            trace!(table = class.table_name(), "storage=query");
            for record in records_sea::find_all(txn, class).await? {
                objects.insert(record.key(), record);
            }
        }

        debug!(class = ?cls, found = objects.len(), "storage=all");
        Ok(objects)
    }

    /// `all` with the class given by name (`"State"`, `"City"`, ...).
    pub async fn all_by_name(
        &mut self,
        cls: Option<&str>,
    ) -> Result<BTreeMap<String, Record>, StorageError> {
        let cls = cls.map(str::parse::<ModelClass>).transpose()?;
        self.all(cls).await
    }

    /// Stage `obj` in the session. A record whose id is already stored is
    /// overwritten. Returns the record's key.
    pub async fn new(&mut self, obj: impl Into<Record>) -> Result<String, StorageError> {
        let record = obj.into();
        let txn = self.session()?.active().await?;
        records_sea::upsert(txn, &record).await?;

        let key = record.key();
        debug!(key = %key, "storage=new");
        Ok(key)
    }

    /// Commit everything staged in the session.
    pub async fn save(&mut self) -> Result<(), StorageError> {
        self.session()?.commit().await?;
        debug!("storage=save");
        Ok(())
    }

    /// Stage removal of `obj`. `None` does nothing, loaded or not.
    pub async fn delete(&mut self, obj: Option<&Record>) -> Result<(), StorageError> {
        let Some(record) = obj else {
            return Ok(());
        };

        let txn = self.session()?.active().await?;
        let removed = records_sea::delete(txn, record).await?;
        if removed == 0 {
            debug!(key = %record.key(), "storage=delete missing=true");
        } else {
            debug!(key = %record.key(), "storage=delete");
        }
        Ok(())
    }

    /// Create any missing tables, then bind a new session. Uncommitted work in
    /// the previous session is discarded.
    pub async fn reload(&mut self) -> Result<(), StorageError> {
        if let Some(mut previous) = self.session.take() {
            if previous.is_open() {
                warn!("storage=reload discarding=uncommitted_work");
            }
            previous.close().await?;
        }

        ensure_schema(&self.engine, self.kind).await?;
        self.session = Some(Session::bind(self.engine.clone()));

        info!(db_kind = %self.kind, env = ?self.env, "storage=reload");
        Ok(())
    }

    /// Close the session, discarding uncommitted work. The next operation
    /// opens a fresh transaction.
    pub async fn close(&mut self) -> Result<(), StorageError> {
        self.session()?.close().await?;
        debug!("storage=close");
        Ok(())
    }

    /// One record by class and id.
    pub async fn get(
        &mut self,
        cls: ModelClass,
        id: &str,
    ) -> Result<Option<Record>, StorageError> {
        let txn = self.session()?.active().await?;
        Ok(records_sea::find_by_id(txn, cls, id).await?)
    }

    /// Number of stored records of `cls`, or of every class when `None`.
    pub async fn count(&mut self, cls: Option<ModelClass>) -> Result<u64, StorageError> {
        let txn = self.session()?.active().await?;
        let mut total = 0;
        match cls {
            Some(class) => total += records_sea::count(txn, class).await?,
            None => {
                for class in ModelClass::ALL {
                    total += records_sea::count(txn, class).await?;
                }
            }
        }
        Ok(total)
    }

    /// Stage a link between a place and an amenity.
    pub async fn link_amenity(
        &mut self,
        place_id: &str,
        amenity_id: &str,
    ) -> Result<(), StorageError> {
        let txn = self.session()?.active().await?;
        records_sea::link_amenity(txn, place_id, amenity_id).await?;
        debug!(place_id, amenity_id, "storage=link_amenity");
        Ok(())
    }

    /// Stage removal of a place/amenity link. Returns whether a link existed.
    pub async fn unlink_amenity(
        &mut self,
        place_id: &str,
        amenity_id: &str,
    ) -> Result<bool, StorageError> {
        let txn = self.session()?.active().await?;
        let removed = records_sea::unlink_amenity(txn, place_id, amenity_id).await?;
        Ok(removed > 0)
    }

    /// Amenities linked to `place_id`.
    pub async fn place_amenities(
        &mut self,
        place_id: &str,
    ) -> Result<Vec<amenities::Model>, StorageError> {
        let txn = self.session()?.active().await?;
        Ok(records_sea::find_place_amenities(txn, place_id).await?)
    }

    /// Roll back any open work and close the engine's connections.
    pub async fn dispose(mut self) -> Result<(), StorageError> {
        if let Some(mut session) = self.session.take() {
            session.close().await?;
        }
        self.engine.close().await?;
        Ok(())
    }

    fn session(&mut self) -> Result<&mut Session, StorageError> {
        self.session.as_mut().ok_or(StorageError::NotLoaded)
    }
}
