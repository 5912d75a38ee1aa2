use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use ruka_api::config::AppConfig;
use ruka_api::db::store::Store;
use ruka_api::models::addon::AddOnCatalog;
use ruka_api::routes;
use ruka_api::models::experience::ExperienceCatalog;
use ruka_api::services::payment::PaymentProvider;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!("Opening store in {}", config.data_dir.display());

    let store = match Store::open(&config.data_dir) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            error!("Failed to open store: {}", err);
            return Err(std::io::Error::other(err.to_string()));
        }
    };

    let store = web::Data::new(store);
    let catalog = web::Data::new(AddOnCatalog::default());
    let experiences = web::Data::new(ExperienceCatalog::default());
    let payments = web::Data::new(PaymentProvider::new(config.payment_delay));

    info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(catalog.clone())
            .app_data(experiences.clone())
            .app_data(payments.clone())
            .configure(routes::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
