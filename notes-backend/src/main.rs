use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod controllers;
mod store;

use config::Config;
use store::NoteStore;

pub struct AppState {
    pub config: Config,
    pub store: NoteStore,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::parse();

    log::info!("notes-backend v{}", env!("CARGO_PKG_VERSION"));

    let store = NoteStore::open(config.storage_dir.clone())?;
    log::info!("Storage directory: {}", store.storage_dir().display());

    let host = config.host.clone();
    let port = config.port;

    let state = web::Data::new(AppState { config, store });

    log::info!("Server running at http://{}:{}/", host, port);
    log::info!("Interactive API docs at http://{}:{}/docs/", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
            .configure(controllers::upload::config)
            .service(web::redirect("/docs", "/docs/"))
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", controllers::docs::ApiDoc::openapi()),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
