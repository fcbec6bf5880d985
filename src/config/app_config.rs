use std::time::Duration;

use crate::config::provisioning_settings::ProvisioningSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_admin_database: String,
    pub client_databases_enabled: bool,
    pub client_databases_allow_random_host: bool,
    pub database_host_connect_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_admin_database: std::env::var("POSTGRES_ADMIN_DATABASE")
                .unwrap_or_else(|_| "postgres".to_string()),
            client_databases_enabled: read_flag("CLIENT_DATABASES_ENABLED", true),
            client_databases_allow_random_host: read_flag(
                "CLIENT_DATABASES_ALLOW_RANDOM_HOST",
                false,
            ),
            database_host_connect_timeout_secs: std::env::var(
                "DATABASE_HOST_CONNECT_TIMEOUT_SECS",
            )
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5),
        }
    }

    pub fn admin_database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_admin_database
        )
    }

    pub fn provisioning_settings(&self) -> ProvisioningSettings {
        ProvisioningSettings {
            databases_enabled: self.client_databases_enabled,
            allow_random_host: self.client_databases_allow_random_host,
        }
    }

    pub fn database_host_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.database_host_connect_timeout_secs)
    }
}

fn read_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}
