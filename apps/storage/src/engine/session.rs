use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::debug;

use crate::error::StorageError;

/// Unit of work bound to the engine: at most one open transaction.
///
/// The transaction starts on first use. `commit` and `close` both end it; the
/// next operation starts a fresh one.
pub struct Session {
    conn: DatabaseConnection,
    txn: Option<DatabaseTransaction>,
}

impl Session {
    pub fn bind(conn: DatabaseConnection) -> Self {
        Self { conn, txn: None }
    }

    /// The open transaction, beginning one if none is open.
    pub async fn active(&mut self) -> Result<&DatabaseTransaction, StorageError> {
        let txn = match self.txn.take() {
            Some(txn) => txn,
            None => {
                debug!("session=begin");
                self.conn.begin().await?
            }
        };
        Ok(self.txn.insert(txn))
    }

    pub fn is_open(&self) -> bool {
        self.txn.is_some()
    }

    /// Commit staged work. Nothing to do when no transaction is open.
    pub async fn commit(&mut self) -> Result<(), StorageError> {
        if let Some(txn) = self.txn.take() {
            txn.commit().await?;
            debug!("session=commit");
        }
        Ok(())
    }

    /// Discard staged work.
    pub async fn close(&mut self) -> Result<(), StorageError> {
        if let Some(txn) = self.txn.take() {
            txn.rollback().await?;
            debug!("session=rollback");
        }
        Ok(())
    }
}
