use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::room::RoomType;

/// Per-date, per-room-type override of a room's default nightly rate.
///
/// `min_stay`, `stop_sell` and `available_rooms` are carried for the admin
/// rate table but are not consulted when pricing a stay.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RateRule {
    pub date: NaiveDate,
    pub room_type: RoomType,
    pub base_rate: f64,
    pub extra_adult: f64,
    pub extra_child: f64,
    pub min_stay: u32,
    pub stop_sell: bool,
    pub available_rooms: u32,
}

impl RateRule {
    pub fn matches(&self, date: NaiveDate, room_type: RoomType) -> bool {
        self.date == date && self.room_type == room_type
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct EffectiveRate {
    pub nightly_base: f64,
    pub extra_adult_surcharge: f64,
    pub extra_child_surcharge: f64,
}
