//! # TutorHub Core
//!
//! Domain types shared by the storage and HTTP layers: request schemas and
//! their validation, the normalized values handed to storage, time-of-day
//! conversion and the error taxonomy.

pub mod errors;
pub mod models;
pub mod time;
