use eyre::{Result, WrapErr};
use sqlx::{Pool, Postgres};
use tracing::info;

const SCHEMA: &[&str] = &[
    // Tutors
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name VARCHAR(255) NOT NULL,
        avatar TEXT NOT NULL,
        whatsapp VARCHAR(64) NOT NULL,
        bio TEXT NOT NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    );
    "#,
    // Class offerings
    r#"
    CREATE TABLE IF NOT EXISTS classes (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        subject VARCHAR(255) NOT NULL,
        cost DOUBLE PRECISION NOT NULL,
        user_id UUID NOT NULL REFERENCES users(id) ON UPDATE CASCADE ON DELETE CASCADE,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    );
    "#,
    // Weekly availability, minutes since midnight with an exclusive upper bound
    r#"
    CREATE TABLE IF NOT EXISTS class_schedule (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        week_day INTEGER NOT NULL,
        "from" INTEGER NOT NULL,
        "to" INTEGER NOT NULL,
        class_id UUID NOT NULL REFERENCES classes(id) ON UPDATE CASCADE ON DELETE CASCADE,
        CONSTRAINT valid_week_day CHECK (week_day BETWEEN 0 AND 6),
        CONSTRAINT valid_time_range CHECK ("from" < "to")
    );
    "#,
    "CREATE INDEX IF NOT EXISTS idx_classes_subject ON classes(subject);",
    "CREATE INDEX IF NOT EXISTS idx_classes_user_id ON classes(user_id);",
    "CREATE INDEX IF NOT EXISTS idx_class_schedule_class_id_week_day ON class_schedule(class_id, week_day);",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for statement in SCHEMA {
        sqlx::query(*statement)
            .execute(pool)
            .await
            .wrap_err("Failed to apply schema statement")?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
