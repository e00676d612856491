pub mod config;
pub mod config_data;
pub mod constants;
