use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutorhub_core::models::class::ClassListing;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClass {
    pub id: Uuid,
    pub subject: String,
    pub cost: f64,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClassSchedule {
    pub id: Uuid,
    pub week_day: i32,
    pub from: i32,
    pub to: i32,
    pub class_id: Uuid,
}

/// A class row joined with the owning user's profile columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbClassListing {
    pub id: Uuid,
    pub subject: String,
    pub cost: f64,
    pub user_id: Uuid,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}

impl From<DbClassListing> for ClassListing {
    fn from(row: DbClassListing) -> Self {
        ClassListing {
            id: row.id,
            subject: row.subject,
            cost: row.cost,
            user_id: row.user_id,
            name: row.name,
            avatar: row.avatar,
            whatsapp: row.whatsapp,
            bio: row.bio,
        }
    }
}
