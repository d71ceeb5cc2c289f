//! Primered Web Server
//!
//! Serveur HTTP de conception d'amorces PCR adossé à Primer3

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use primered_core::{init_logging, Primer3Designer, PrimerDesignService};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

mod config;
mod error;
mod models;
mod routes;

use config::{AppConfig, CorsConfig};
use models::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Charger la configuration
    let config = match AppConfig::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Erreur de chargement de la configuration: {}. Utilisation des valeurs par défaut.", e);
            AppConfig::default()
        }
    };

    init_logging(&config.logging.level, &config.logging.format);

    let designer = Arc::new(Primer3Designer::new(config.primer3.engine_config()));
    let service = PrimerDesignService::new(designer)
        .with_settings(config.primer3.engine_settings());

    let app_state = web::Data::new(AppState { service });

    tracing::info!(
        engine = %config.primer3.executable.display(),
        "🧬 Démarrage du serveur Primered sur http://{}:{}",
        config.server.host,
        config.server.port
    );

    let cors_config = config.cors.clone();
    let json_limit = config.server.json_limit;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_config))
            .app_data(app_state.clone())
            .app_data(routes::json_config(json_limit))
            .configure(routes::configure)
    })
    .workers(config.server.workers)
    .bind((config.server.host.clone(), config.server.port))?
    .run()
    .await
}

/// Construit le middleware CORS à partir de la liste d'origines
fn build_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.max_age);

    // Les cookies ne sont autorisés qu'avec une liste explicite
    if config.allows_any_origin() {
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
        .supports_credentials()
}
