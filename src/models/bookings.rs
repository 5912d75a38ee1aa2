use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub guest_name: String,
    pub email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub add_ons: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct BookingInput {
    pub room_id: String,
    #[validate(length(min = 1, message = "Guest name is required"))]
    pub guest_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1, message = "At least one adult is required"))]
    pub adults: u32,
    #[serde(default)]
    #[validate(range(max = 10, message = "At most 10 children per booking"))]
    pub children: u32,
    #[serde(default)]
    pub add_ons: Vec<String>,
}
