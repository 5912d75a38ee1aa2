use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::db::store::{blocking, Store};
use crate::models::room::RoomInput;
use crate::routes::ErrorResponse;

pub async fn get_rooms(store: web::Data<Arc<Store>>) -> impl Responder {
    match store.rooms() {
        Ok(rooms) => HttpResponse::Ok().json(rooms),
        Err(err) => {
            error!("Failed to read rooms: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch rooms"))
        }
    }
}

pub async fn get_room_by_id(
    store: web::Data<Arc<Store>>,
    path: web::Path<(String,)>,
) -> impl Responder {
    let room_id = path.into_inner().0;

    match store.room(&room_id) {
        Ok(Some(room)) => HttpResponse::Ok().json(room),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::new("Room not found")),
        Err(err) => {
            error!("Failed to read room {}: {}", room_id, err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch room"))
        }
    }
}

pub async fn add_room(
    store: web::Data<Arc<Store>>,
    input: web::Json<RoomInput>,
) -> impl Responder {
    let input = input.into_inner();
    if let Err(errors) = input.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    let room = input.into_room(Uuid::new_v4().to_string());

    let stored = room.clone();
    match blocking(&store, move |store| store.add_room(stored)).await {
        Ok(()) => {
            info!("Added room {} ({})", room.id, room.name);
            HttpResponse::Created().json(room)
        }
        Err(err) => {
            error!("Failed to add room: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to add room"))
        }
    }
}

pub async fn delete_room(
    store: web::Data<Arc<Store>>,
    path: web::Path<(String,)>,
) -> impl Responder {
    let room_id = path.into_inner().0;

    let id = room_id.clone();
    match blocking(&store, move |store| store.delete_room(&id)).await {
        Ok(true) => {
            info!("Removed room {}", room_id);
            HttpResponse::NoContent().finish()
        }
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse::new("Room not found")),
        Err(err) => {
            error!("Failed to remove room {}: {}", room_id, err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to remove room"))
        }
    }
}
