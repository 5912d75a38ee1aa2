pub mod addon;
pub mod bookings;
pub mod content;
pub mod experience;
pub mod quote;
pub mod rate;
pub mod room;
