use chrono::NaiveDate;
use serde::Serialize;

use crate::models::bookings::{Booking, BookingStatus};
use crate::models::room::Room;

pub const RECENT_BOOKINGS: usize = 5;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub total_bookings: usize,
    pub upcoming_arrivals: usize,
    pub room_types: usize,
    pub room_inventory: u32,
    pub recent_bookings: Vec<Booking>,
}

pub struct DashboardService;

impl DashboardService {
    /// `bookings` are expected newest first, as the store keeps them.
    pub fn summarize(bookings: &[Booking], rooms: &[Room], today: NaiveDate) -> DashboardStats {
        DashboardStats {
            total_revenue: bookings.iter().map(|b| b.total_amount).sum(),
            total_bookings: bookings.len(),
            upcoming_arrivals: bookings
                .iter()
                .filter(|b| b.status != BookingStatus::Cancelled && b.check_in >= today)
                .count(),
            room_types: rooms.len(),
            room_inventory: rooms.iter().map(|r| r.total_rooms).sum(),
            recent_bookings: bookings.iter().take(RECENT_BOOKINGS).cloned().collect(),
        }
    }
}
