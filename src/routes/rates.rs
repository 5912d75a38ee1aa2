use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use std::sync::Arc;

use crate::db::store::{blocking, Store};
use crate::models::rate::RateRule;
use crate::routes::ErrorResponse;
use crate::services::rate_import_service::RateImportService;

pub async fn get_rates(store: web::Data<Arc<Store>>) -> impl Responder {
    match store.rates() {
        Ok(rates) => HttpResponse::Ok().json(rates),
        Err(err) => {
            error!("Failed to read rate table: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch rates"))
        }
    }
}

pub async fn update_rates(
    store: web::Data<Arc<Store>>,
    input: web::Json<Vec<RateRule>>,
) -> impl Responder {
    let rules = input.into_inner();
    let count = rules.len();

    match blocking(&store, move |store| store.update_rates(rules)).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "updated": count })),
        Err(err) => {
            error!("Failed to update rates: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to update rates"))
        }
    }
}

/// Accepts the seasonal rate CSV as the raw request body.
pub async fn import_rates(store: web::Data<Arc<Store>>, body: String) -> impl Responder {
    let import = RateImportService::parse(&body);

    if import.rules.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "No valid rate rows found",
            "skipped": import.skipped,
        }));
    }

    let imported = import.rules.len();
    let rules = import.rules;
    match blocking(&store, move |store| store.update_rates(rules)).await {
        Ok(()) => {
            info!(
                "Imported {} rate rules ({} lines skipped)",
                imported,
                import.skipped.len()
            );
            HttpResponse::Ok().json(json!({
                "imported": imported,
                "skipped": import.skipped,
            }))
        }
        Err(err) => {
            error!("Failed to store imported rates: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to import rates"))
        }
    }
}
