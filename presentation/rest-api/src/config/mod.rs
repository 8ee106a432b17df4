pub mod app_config;
pub mod cors_config;
pub mod ocrsdk_config;
pub mod polling_config;
pub mod server_config;
