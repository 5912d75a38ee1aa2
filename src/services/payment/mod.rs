pub mod interface;
pub mod simulated;

/// Gateway the server registers as `web::Data` and routes bookings through.
pub type PaymentProvider = simulated::SimulatedProvider;
