use actix_web::{get, web, HttpResponse};

use crate::{
    errors::CustomError,
    models::{
        api_response::success_response,
        network_view::{ConfigSummary, NetworkView},
    },
    services::{
        diagnostics::RegistryWarning,
        network_config::{get_network_by_name, get_network_config},
    },
    AppState,
};

#[get("/config")]
async fn get_config(state: web::Data<AppState>) -> HttpResponse {
    let config = &state.toolchain;
    success_response(ConfigSummary {
        solidity: config.solidity.clone(),
        default_network: config.default_network.clone(),
        networks: config.registry.names().map(str::to_string).collect(),
    })
}

#[get("/networks")]
async fn list_networks(state: web::Data<AppState>) -> HttpResponse {
    let networks: Vec<NetworkView> = state
        .toolchain
        .registry
        .iter()
        .map(NetworkView::from)
        .collect();
    success_response(networks)
}

#[get("/networks/{name}")]
async fn get_network(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let network = get_network_by_name(&state.toolchain.registry, &name)?;
    Ok(success_response(NetworkView::from(network)))
}

#[get("/chains/{chain_id}")]
async fn get_chain(
    state: web::Data<AppState>,
    chain_id: web::Path<u64>,
) -> Result<HttpResponse, CustomError> {
    let network = get_network_config(&state.toolchain.registry, chain_id.into_inner())?;
    Ok(success_response(NetworkView::from(network)))
}

#[get("/diagnostics")]
async fn get_diagnostics(state: web::Data<AppState>) -> HttpResponse {
    let warnings: &[RegistryWarning] = &state.warnings;
    success_response(warnings)
}
