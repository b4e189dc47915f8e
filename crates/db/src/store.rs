//! # Class store
//!
//! The storage seam used by the HTTP layer. [`PgClassStore`] runs the
//! searches and registrations against PostgreSQL; [`MockClassStore`] is
//! generated for handler tests.

use async_trait::async_trait;
use eyre::Result;
use mockall::automock;
use sqlx::{PgConnection, Pool, Postgres};
use tracing::info;
use tutorhub_core::models::class::{ClassFilters, TutorRegistration};
use uuid::Uuid;

use crate::{
    models::DbClassListing,
    repositories::{class, class_schedule, user},
    unit_of_work::UnitOfWork,
};

/// Identifiers produced by a successful registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredTutor {
    pub user_id: Uuid,
    pub class_id: Uuid,
    pub slot_count: usize,
}

#[automock]
#[async_trait]
pub trait ClassStore: Send + Sync {
    /// Classes matching the subject with a slot covering the weekday and time
    async fn list_classes(&self, filters: &ClassFilters) -> Result<Vec<DbClassListing>>;

    /// Persists user, class and schedule slots atomically
    async fn register_tutor(&self, registration: &TutorRegistration) -> Result<RegisteredTutor>;
}

#[derive(Clone)]
pub struct PgClassStore {
    pool: Pool<Postgres>,
}

impl PgClassStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}

#[async_trait]
impl ClassStore for PgClassStore {
    async fn list_classes(&self, filters: &ClassFilters) -> Result<Vec<DbClassListing>> {
        class::list_classes(&self.pool, filters).await
    }

    async fn register_tutor(&self, registration: &TutorRegistration) -> Result<RegisteredTutor> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let outcome = write_registration(uow.conn(), registration).await;
        let registered = uow.finish(outcome).await?;

        info!(
            "Registered tutor: user_id={}, class_id={}, slots={}",
            registered.user_id, registered.class_id, registered.slot_count
        );
        Ok(registered)
    }
}

/// User, then class, then slots; each insert needs the id of the previous one
async fn write_registration(
    conn: &mut PgConnection,
    registration: &TutorRegistration,
) -> Result<RegisteredTutor> {
    let user = user::create_user(conn, &registration.profile).await?;
    let class = class::create_class(conn, &registration.subject, registration.cost, user.id).await?;
    let slots = class_schedule::create_class_schedule(conn, class.id, &registration.schedule).await?;

    Ok(RegisteredTutor {
        user_id: user.id,
        class_id: class.id,
        slot_count: slots.len(),
    })
}
