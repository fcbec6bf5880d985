pub mod app_config;
pub mod provisioning_settings;
