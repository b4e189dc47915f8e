use serde::{Deserialize, Serialize};

use crate::{
    errors::{TutorError, TutorResult},
    time::hour_to_minutes,
};

/// Highest valid weekday index; days run from 0 (Sunday) to 6 (Saturday).
pub const MAX_WEEK_DAY: i32 = 6;

/// One availability window as submitted by a tutor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItemRequest {
    pub week_day: i32,
    pub from: String,
    pub to: String,
}

/// A normalized availability window ready to be stored
///
/// `from` is inclusive and `to` exclusive, both in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub week_day: i32,
    pub from: i32,
    pub to: i32,
}

impl ScheduleItemRequest {
    /// Validates the item and converts its times to minute offsets
    pub fn into_slot(self) -> TutorResult<WeeklySlot> {
        let week_day = check_week_day(self.week_day)?;
        let from = hour_to_minutes(&self.from)?;
        let to = hour_to_minutes(&self.to)?;

        if from >= to {
            return Err(TutorError::validation(format!(
                "Schedule item starting at {} must end after it starts, got {}",
                self.from, self.to
            )));
        }

        Ok(WeeklySlot { week_day, from, to })
    }
}

pub fn check_week_day(week_day: i32) -> TutorResult<i32> {
    if (0..=MAX_WEEK_DAY).contains(&week_day) {
        Ok(week_day)
    } else {
        Err(TutorError::validation(format!(
            "Invalid week_day {}: expected a value between 0 and {}",
            week_day, MAX_WEEK_DAY
        )))
    }
}
