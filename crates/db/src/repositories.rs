pub mod class;
pub mod class_schedule;
pub mod user;
