use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};

mod api;
mod config;
mod errors;
mod models;
mod services;

use models::{credentials::Credentials, network_config::ToolchainConfig};
use services::{
    diagnostics::{check_registry, RegistryWarning},
    export::write_toolchain_json,
    network_config::build_toolchain_config,
};

/// Read-only state shared by every worker.
pub struct AppState {
    pub toolchain: ToolchainConfig,
    pub warnings: Vec<RegistryWarning>,
}

impl AppState {
    pub fn new(credentials: &Credentials) -> Self {
        let toolchain = build_toolchain_config(credentials);
        let warnings = check_registry(&toolchain.registry, credentials);
        Self {
            toolchain,
            warnings,
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env().map_err(|e| {
        error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let state = AppState::new(&Credentials::from_env());
    info!(
        "loaded {} networks, solidity {}",
        state.toolchain.registry.len(),
        state.toolchain.solidity
    );
    if state.toolchain.registry.is_empty() {
        warn!("registry has no networks");
    }
    for warning in &state.warnings {
        warn!("{}", warning);
    }

    if let Some(path) = &config.export_path {
        write_toolchain_json(&state.toolchain, path)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    let state = web::Data::new(state);
    let origins = config.allowed_origins.clone();

    info!("listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT]);
        App::new()
            .app_data(state.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
