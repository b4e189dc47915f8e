use crate::models::DbUser;
use chrono::Utc;
use eyre::{Result, WrapErr};
use sqlx::PgConnection;
use tutorhub_core::models::user::TutorProfile;
use uuid::Uuid;

pub async fn create_user(conn: &mut PgConnection, profile: &TutorProfile) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating user: id={}, name={}", id, profile.name);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, name, avatar, whatsapp, bio, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, avatar, whatsapp, bio, created_at
        "#,
    )
    .bind(id)
    .bind(&profile.name)
    .bind(&profile.avatar)
    .bind(&profile.whatsapp)
    .bind(&profile.bio)
    .bind(now)
    .fetch_one(&mut *conn)
    .await
    .wrap_err("Failed to insert user")?;

    Ok(user)
}
