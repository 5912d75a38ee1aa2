use actix_web::{web, HttpResponse, Responder};
use log::error;
use std::sync::Arc;

use crate::db::store::Store;
use crate::models::addon::AddOnCatalog;
use crate::models::quote::QuoteInput;
use crate::routes::ErrorResponse;
use crate::services::pricing_service::PricingService;

/// Prices a prospective stay. Dates out of order give an empty breakdown
/// rather than an error so the booking form can re-quote while it is edited.
pub async fn get_quote(
    store: web::Data<Arc<Store>>,
    catalog: web::Data<AddOnCatalog>,
    input: web::Json<QuoteInput>,
) -> impl Responder {
    let input = input.into_inner();

    let room = match store.room(&input.room_id) {
        Ok(Some(room)) => room,
        Ok(None) => return HttpResponse::NotFound().json(ErrorResponse::new("Room not found")),
        Err(err) => {
            error!("Failed to read room {}: {}", input.room_id, err);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch room"));
        }
    };

    let add_ons = match catalog.select(input.add_ons.as_slice()) {
        Ok(add_ons) => add_ons,
        Err(id) => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new(format!("Unknown add-on: {}", id)))
        }
    };

    let rates = match store.rates() {
        Ok(rates) => rates,
        Err(err) => {
            error!("Failed to read rate table: {}", err);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch rates"));
        }
    };

    let quote = PricingService::quote(
        &room,
        input.check_in,
        input.check_out,
        input.adults,
        input.children,
        &rates,
        &add_ons,
    );

    HttpResponse::Ok().json(quote)
}
