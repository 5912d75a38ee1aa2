pub mod add_ons;
pub mod admin;
pub mod bookings;
pub mod content;
pub mod experiences;
pub mod health;
pub mod quote;
pub mod rates;
pub mod rooms;

use actix_web::web;

use crate::services::payment::PaymentProvider;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Storefront and back-office routes. Expects `Data<Arc<Store>>`,
/// `Data<AddOnCatalog>`, `Data<ExperienceCatalog>` and `Data<PaymentProvider>`
/// to be registered.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            .route("/rooms", web::get().to(rooms::get_rooms))
            .route("/rooms/{id}", web::get().to(rooms::get_room_by_id))
            .route("/add-ons", web::get().to(add_ons::get_add_ons))
            .route("/experiences", web::get().to(experiences::get_experiences))
            .route("/content", web::get().to(content::get_content))
            .route("/quote", web::post().to(quote::get_quote))
            .route("/bookings", web::post().to(bookings::create_booking::<PaymentProvider>))
            .configure(admin::config),
    );
}
