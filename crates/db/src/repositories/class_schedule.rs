use crate::models::DbClassSchedule;
use eyre::{Result, WrapErr};
use sqlx::PgConnection;
use tutorhub_core::models::schedule::WeeklySlot;
use uuid::Uuid;

pub async fn create_class_schedule(
    conn: &mut PgConnection,
    class_id: Uuid,
    slots: &[WeeklySlot],
) -> Result<Vec<DbClassSchedule>> {
    let mut created = Vec::with_capacity(slots.len());

    for slot in slots {
        let row = sqlx::query_as::<_, DbClassSchedule>(
            r#"
            INSERT INTO class_schedule (id, week_day, "from", "to", class_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, week_day, "from", "to", class_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(slot.week_day)
        .bind(slot.from)
        .bind(slot.to)
        .bind(class_id)
        .fetch_one(&mut *conn)
        .await
        .wrap_err_with(|| {
            format!(
                "Failed to insert schedule slot week_day={} from={} to={}",
                slot.week_day, slot.from, slot.to
            )
        })?;

        created.push(row);
    }

    Ok(created)
}
