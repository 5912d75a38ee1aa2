use actix_web::{web, HttpResponse, Responder};

use crate::models::experience::ExperienceCatalog;

pub async fn get_experiences(catalog: web::Data<ExperienceCatalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.all())
}
