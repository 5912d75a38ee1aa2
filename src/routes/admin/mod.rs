pub mod dashboard;

use actix_web::web;

use crate::routes::{bookings, content, rates, rooms};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/dashboard", web::get().to(dashboard::get_dashboard))
            .route("/rooms", web::post().to(rooms::add_room))
            .route("/rooms/{id}", web::delete().to(rooms::delete_room))
            .route("/rates", web::get().to(rates::get_rates))
            .route("/rates", web::put().to(rates::update_rates))
            .route("/rates/import", web::post().to(rates::import_rates))
            .route("/bookings", web::get().to(bookings::get_all_bookings))
            .route("/content", web::patch().to(content::update_content)),
    );
}
