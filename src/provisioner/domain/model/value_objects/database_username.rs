use lazy_static::lazy_static;
use rand::{Rng, distributions::Alphanumeric};
use regex::Regex;

use crate::provisioner::domain::model::{
    enums::provisioner_domain_error::ProvisionerDomainError, value_objects::server_id::ServerId,
};

pub const USERNAME_RANDOM_SUFFIX_LENGTH: usize = 10;

lazy_static! {
    static ref DATABASE_USERNAME_REGEX: Regex =
        Regex::new(r"^u[0-9]+_[A-Za-z0-9]{10}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatabaseUsername(String);

impl DatabaseUsername {
    /// `u{server_id}_` followed by ten random alphanumeric characters.
    pub fn generate(server_id: &ServerId) -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(USERNAME_RANDOM_SUFFIX_LENGTH)
            .map(char::from)
            .collect();

        Self(format!("u{}_{suffix}", server_id.value()))
    }

    pub fn new(value: String) -> Result<Self, ProvisionerDomainError> {
        let trimmed = value.trim();

        if !DATABASE_USERNAME_REGEX.is_match(trimmed) {
            return Err(ProvisionerDomainError::InvalidDatabaseUsername);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
