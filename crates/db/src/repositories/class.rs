use crate::models::{DbClass, DbClassListing};
use chrono::Utc;
use eyre::{Result, WrapErr};
use sqlx::{PgConnection, Pool, Postgres};
use tutorhub_core::models::class::ClassFilters;
use uuid::Uuid;

pub async fn create_class(
    conn: &mut PgConnection,
    subject: &str,
    cost: f64,
    user_id: Uuid,
) -> Result<DbClass> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating class: id={}, subject={}, cost={}, user_id={}",
        id, subject, cost, user_id
    );

    let class = sqlx::query_as::<_, DbClass>(
        r#"
        INSERT INTO classes (id, subject, cost, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, subject, cost, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(subject)
    .bind(cost)
    .bind(user_id)
    .bind(now)
    .fetch_one(&mut *conn)
    .await
    .wrap_err("Failed to insert class")?;

    Ok(class)
}

/// Finds classes of `filters.subject` with a slot covering the given weekday and minute
///
/// A slot covers a minute when `from <= minute < to`. The subject comparison
/// is exact and case-sensitive. Rows come back in storage order.
pub async fn list_classes(
    pool: &Pool<Postgres>,
    filters: &ClassFilters,
) -> Result<Vec<DbClassListing>> {
    tracing::debug!(
        "Listing classes: subject={}, week_day={}, time={}",
        filters.subject, filters.week_day, filters.time
    );

    let classes = sqlx::query_as::<_, DbClassListing>(
        r#"
        SELECT classes.id, classes.subject, classes.cost, classes.user_id,
               users.name, users.avatar, users.whatsapp, users.bio
        FROM classes
        JOIN users ON classes.user_id = users.id
        WHERE classes.subject = $1
          AND EXISTS (
            SELECT 1
            FROM class_schedule
            WHERE class_schedule.class_id = classes.id
              AND class_schedule.week_day = $2
              AND class_schedule."from" <= $3
              AND class_schedule."to" > $3
          )
        "#,
    )
    .bind(&filters.subject)
    .bind(filters.week_day)
    .bind(filters.time)
    .fetch_all(pool)
    .await
    .wrap_err("Failed to list classes")?;

    Ok(classes)
}
