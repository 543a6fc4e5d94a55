pub mod diagnostics;
pub mod export;
pub mod network_config;
