use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::error;
use std::sync::Arc;

use crate::db::store::Store;
use crate::routes::ErrorResponse;
use crate::services::dashboard_service::DashboardService;

pub async fn get_dashboard(store: web::Data<Arc<Store>>) -> impl Responder {
    match store.snapshot() {
        Ok(snapshot) => {
            let today = Utc::now().date_naive();
            HttpResponse::Ok().json(DashboardService::summarize(
                &snapshot.bookings,
                &snapshot.rooms,
                today,
            ))
        }
        Err(err) => {
            error!("Failed to build dashboard: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to build dashboard"))
        }
    }
}
