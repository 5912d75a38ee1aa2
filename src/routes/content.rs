use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use std::sync::Arc;

use crate::db::store::{blocking, Store};
use crate::models::content::CmsUpdate;
use crate::routes::ErrorResponse;

pub async fn get_content(store: web::Data<Arc<Store>>) -> impl Responder {
    match store.cms() {
        Ok(content) => HttpResponse::Ok().json(content),
        Err(err) => {
            error!("Failed to read site content: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch content"))
        }
    }
}

pub async fn update_content(
    store: web::Data<Arc<Store>>,
    input: web::Json<CmsUpdate>,
) -> impl Responder {
    let update = input.into_inner();
    match blocking(&store, move |store| store.update_cms(update)).await {
        Ok(content) => {
            info!("Site content updated");
            HttpResponse::Ok().json(content)
        }
        Err(err) => {
            error!("Failed to update site content: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to update content"))
        }
    }
}
