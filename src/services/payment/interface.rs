use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentError {
    Declined(String),
    InternalServerError,
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentError::Declined(reason) => write!(f, "Payment declined: {}", reason),
            PaymentError::InternalServerError => write!(f, "Payment provider unavailable"),
        }
    }
}

impl std::error::Error for PaymentError {}

#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub reference: String,
    pub email: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub reference: String,
    pub amount: f64,
    pub processed_at: DateTime<Utc>,
}

/// Settles the grand total of a booking before it is recorded.
pub trait PaymentOperations {
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}
