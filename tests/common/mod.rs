#![allow(dead_code)]

use actix_web::{middleware::Logger, web, App};
use actix_cors::Cors;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

use ruka_api::db::store::{Store, StoreSnapshot};
use ruka_api::models::addon::AddOnCatalog;
use ruka_api::models::experience::ExperienceCatalog;
use ruka_api::routes;
use ruka_api::services::payment::PaymentProvider;

pub struct TestApp {
    pub store: Arc<Store>,
    pub catalog: AddOnCatalog,
    pub experiences: ExperienceCatalog,
    pub payments: PaymentProvider,
}

impl TestApp {
    /// Seed rooms and content, no rates or bookings, instant payments.
    pub fn new() -> Self {
        Self::with_snapshot(StoreSnapshot::default())
    }

    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        Self::with_store(Store::in_memory(snapshot))
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            store: Arc::new(store),
            catalog: AddOnCatalog::default(),
            experiences: ExperienceCatalog::default(),
            payments: PaymentProvider::new(Duration::ZERO),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.store.clone()))
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(self.experiences.clone()))
            .app_data(web::Data::new(self.payments.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub const RATE_HEADER: &str =
    "Room Type,Date,Base Rate,Extra Adult,Extra Child,Min Stay,Stop Sell,Available Rooms";
