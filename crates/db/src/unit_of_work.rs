//! # Unit of work
//!
//! Groups dependent writes behind a single transaction: callers take the
//! connection, run their inserts in order, then either [`UnitOfWork::commit`]
//! or [`UnitOfWork::rollback`]. A unit of work that is dropped without being
//! committed is rolled back by the underlying transaction.

use eyre::{Result, WrapErr};
use sqlx::{PgConnection, Pool, Postgres, Transaction};
use tracing::{debug, warn};

pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    /// Opens a transaction on a pooled connection
    pub async fn begin(pool: &Pool<Postgres>) -> Result<Self> {
        let tx = pool.begin().await.wrap_err("Failed to begin transaction")?;
        debug!("Unit of work started");
        Ok(Self { tx })
    }

    /// Connection bound to the open transaction
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await.wrap_err("Failed to commit transaction")?;
        debug!("Unit of work committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        self.tx.rollback().await.wrap_err("Failed to roll back transaction")?;
        debug!("Unit of work rolled back");
        Ok(())
    }

    /// Commits when `outcome` is `Ok`, otherwise rolls back and returns the
    /// original error
    ///
    /// A rollback failure is logged but never replaces the error that caused it.
    pub async fn finish<T>(self, outcome: Result<T>) -> Result<T> {
        match outcome {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.rollback().await {
                    warn!("{:#}", rollback_err);
                }
                Err(err)
            }
        }
    }
}
