use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{TutorError, TutorResult},
    models::{
        schedule::{ScheduleItemRequest, WeeklySlot, check_week_day},
        user::TutorProfile,
    },
    time::hour_to_minutes,
};

pub const MISSING_FILTERS: &str = "Missing filters";

/// Raw query string of `GET /classes`
///
/// Every field is optional at this level so that absent filters surface as a
/// single "Missing filters" validation error rather than an extractor failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListClassesQuery {
    pub subject: Option<String>,
    pub week_day: Option<String>,
    pub time: Option<String>,
}

/// Normalized search filters handed to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFilters {
    pub subject: String,
    pub week_day: i32,
    /// Minutes since midnight
    pub time: i32,
}

impl ListClassesQuery {
    /// Checks that all three filters are present and normalizes them
    ///
    /// # Errors
    ///
    /// * `TutorError::Validation("Missing filters")` if any filter is absent or blank
    /// * `TutorError::Validation` if `week_day` is not an integer in 0..=6 or
    ///   `time` is not a valid `HH:MM`
    pub fn into_filters(self) -> TutorResult<ClassFilters> {
        let (subject, week_day, time) = match (
            non_empty(self.subject),
            non_empty(self.week_day),
            non_empty(self.time),
        ) {
            (Some(subject), Some(week_day), Some(time)) => (subject, week_day, time),
            _ => return Err(TutorError::validation(MISSING_FILTERS)),
        };

        let week_day = week_day.trim().parse::<i32>().map_err(|_| {
            TutorError::validation(format!("Invalid week_day '{}': expected an integer", week_day))
        })?;
        let week_day = check_week_day(week_day)?;
        let time = hour_to_minutes(&time)?;

        Ok(ClassFilters {
            subject,
            week_day,
            time,
        })
    }
}

/// Blank values count as absent, the same rule registration fields follow
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Body of `POST /classes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
    pub subject: String,
    pub cost: f64,
    pub schedule: Vec<ScheduleItemRequest>,
}

/// A validated registration: profile, offering and its availability
#[derive(Debug, Clone, PartialEq)]
pub struct TutorRegistration {
    pub profile: TutorProfile,
    pub subject: String,
    pub cost: f64,
    pub schedule: Vec<WeeklySlot>,
}

impl CreateClassRequest {
    /// Validates the request and converts every schedule item to minutes
    ///
    /// Nothing is written anywhere; a failure here means no transaction is
    /// ever opened for the request.
    pub fn into_registration(self) -> TutorResult<TutorRegistration> {
        require_present("name", &self.name)?;
        require_present("whatsapp", &self.whatsapp)?;
        require_present("subject", &self.subject)?;

        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(TutorError::validation(format!(
                "Invalid cost {}: expected a non-negative number",
                self.cost
            )));
        }

        if self.schedule.is_empty() {
            return Err(TutorError::validation(
                "At least one schedule item must be provided",
            ));
        }

        let schedule = self
            .schedule
            .into_iter()
            .map(ScheduleItemRequest::into_slot)
            .collect::<TutorResult<Vec<_>>>()?;

        Ok(TutorRegistration {
            profile: TutorProfile {
                name: self.name,
                avatar: self.avatar,
                whatsapp: self.whatsapp,
                bio: self.bio,
            },
            subject: self.subject,
            cost: self.cost,
            schedule,
        })
    }
}

fn require_present(field: &str, value: &str) -> TutorResult<()> {
    if value.trim().is_empty() {
        Err(TutorError::validation(format!("Missing required field '{}'", field)))
    } else {
        Ok(())
    }
}

/// One search result: a class offering joined with its tutor's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassListing {
    pub id: Uuid,
    pub subject: String,
    pub cost: f64,
    pub user_id: Uuid,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}
