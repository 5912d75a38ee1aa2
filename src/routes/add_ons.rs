use actix_web::{web, HttpResponse, Responder};

use crate::models::addon::AddOnCatalog;

pub async fn get_add_ons(catalog: web::Data<AddOnCatalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.all())
}
