use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Network not found: {0}")]
    NetworkNotFound(String),

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

// Custom Error type
#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::NetworkNotFound(_) => StatusCode::NOT_FOUND,
            CustomError::UnsupportedChain(_) => StatusCode::BAD_REQUEST,
            CustomError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            CustomError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::ExportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let api_error = ApiError {
            code: status.as_u16(),
            message: self.to_string(),
        };

        HttpResponse::build(status).json(ApiResponse {
            status: "FAILURE".to_string(),
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        })
    }
}
