pub mod api_response;
pub mod credentials;
pub mod network_config;
pub mod network_view;
