use serde::{Deserialize, Serialize};

/// Public profile of a tutor, stored once at registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorProfile {
    pub name: String,
    /// URL of the tutor's picture
    pub avatar: String,
    /// Contact phone number
    pub whatsapp: String,
    pub bio: String,
}
