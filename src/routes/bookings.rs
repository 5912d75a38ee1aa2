use actix_web::{web, HttpResponse, Responder};
use log::error;
use std::sync::Arc;

use crate::db::store::Store;
use crate::models::addon::AddOnCatalog;
use crate::models::bookings::BookingInput;
use crate::routes::ErrorResponse;
use crate::services::booking_service::{BookingError, BookingService};
use crate::services::payment::interface::PaymentOperations;

/// Registered per gateway, e.g. `create_booking::<PaymentProvider>`.
pub async fn create_booking<P: PaymentOperations + 'static>(
    store: web::Data<Arc<Store>>,
    catalog: web::Data<AddOnCatalog>,
    payments: web::Data<P>,
    input: web::Json<BookingInput>,
) -> impl Responder {
    let service = BookingService::new(&store, &catalog, payments.get_ref());

    match service.create_booking(input.into_inner()).await {
        Ok(booking) => HttpResponse::Created().json(booking),
        Err(BookingError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
        Err(
            err @ (BookingError::InvalidStayDates
            | BookingError::OccupancyExceeded { .. }
            | BookingError::UnknownAddOn(_)),
        ) => HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string())),
        Err(err @ BookingError::RoomNotFound(_)) => {
            HttpResponse::NotFound().json(ErrorResponse::new(err.to_string()))
        }
        Err(err @ BookingError::Payment(_)) => {
            HttpResponse::PaymentRequired().json(ErrorResponse::new(err.to_string()))
        }
        Err(BookingError::Store(err)) => {
            error!("Failed to record booking: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to add booking"))
        }
    }
}

pub async fn get_all_bookings(store: web::Data<Arc<Store>>) -> impl Responder {
    match store.bookings() {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(err) => {
            error!("Error fetching bookings: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch bookings"))
        }
    }
}
