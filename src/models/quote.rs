use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct NightlyPrice {
    pub date: NaiveDate,
    pub price: f64,
}

/// Nightly breakdown of a stay, before add-ons.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StayPriceResult {
    /// Whole days between check-in and check-out; zero or negative when the
    /// dates are not in order, in which case the breakdown is empty.
    pub nights: i64,
    pub breakdown: Vec<NightlyPrice>,
    pub total: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QuoteInput {
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub add_ons: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AddOnCharge {
    pub id: String,
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StayQuote {
    pub room_id: String,
    pub nights: i64,
    pub breakdown: Vec<NightlyPrice>,
    pub stay_total: f64,
    pub add_ons: Vec<AddOnCharge>,
    pub add_on_total: f64,
    pub grand_total: f64,
}
