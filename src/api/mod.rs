use actix_web::web;

use crate::errors::CustomError;

mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| CustomError::InvalidPath(err.to_string()).into());

    cfg.service(
        web::scope("/api/v1")
            .app_data(path_config)
            .service(handlers::get_config)
            .service(handlers::list_networks)
            .service(handlers::get_network)
            .service(handlers::get_chain)
            .service(handlers::get_diagnostics),
    );
}
