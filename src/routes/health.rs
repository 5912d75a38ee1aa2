use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Serialize;
use std::env;
use std::sync::Arc;

use crate::db::store::Store;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    store: StoreStatus,
}

#[derive(Serialize)]
struct StoreStatus {
    status: String,
    details: Option<String>,
    rooms: usize,
    rates: usize,
    bookings: usize,
}

pub async fn health_check(store: web::Data<Arc<Store>>) -> impl Responder {
    let store_status = match store.snapshot() {
        Ok(snapshot) => StoreStatus {
            status: "ok".to_string(),
            details: None,
            rooms: snapshot.rooms.len(),
            rates: snapshot.rates.len(),
            bookings: snapshot.bookings.len(),
        },
        Err(e) => {
            error!("Store health check failed: {}", e);
            StoreStatus {
                status: "error".to_string(),
                details: Some(e.to_string()),
                rooms: 0,
                rates: 0,
                bookings: 0,
            }
        }
    };

    let health = HealthStatus {
        status: if store_status.status == "ok" {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store_status,
    };

    HttpResponse::Ok().json(health)
}
