use std::fmt;

use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

/// Administrative login for a database host.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct DatabaseHostConnection {
    address: String,
    port: u16,
    username: String,
    password: String,
}

impl DatabaseHostConnection {
    pub fn new(
        address: String,
        port: u16,
        username: String,
        password: String,
    ) -> Result<Self, ProvisionerDomainError> {
        let address = address.trim().to_string();
        let username = username.trim().to_string();

        if address.is_empty() || address.len() > 255 {
            return Err(ProvisionerDomainError::InvalidDatabaseHost(
                "address must be 1..255 characters".to_string(),
            ));
        }
        if port == 0 {
            return Err(ProvisionerDomainError::InvalidDatabaseHost(
                "port must be greater than zero".to_string(),
            ));
        }
        if username.is_empty() {
            return Err(ProvisionerDomainError::InvalidDatabaseHost(
                "username is required".to_string(),
            ));
        }

        Ok(Self {
            address,
            port,
            username,
            password,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// `user@address:port`, safe to log.
    pub fn target(&self) -> String {
        format!("{}@{}:{}", self.username, self.address, self.port)
    }
}

impl fmt::Debug for DatabaseHostConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseHostConnection")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
