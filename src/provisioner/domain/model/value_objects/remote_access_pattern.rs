use lazy_static::lazy_static;
use regex::Regex;

use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

pub const ANY_REMOTE: &str = "%";

lazy_static! {
    static ref REMOTE_PATTERN_REGEX: Regex = Regex::new(r"^[0-9%./]{1,31}$").expect("valid regex");
}

/// Host pattern a generated user may connect from, e.g. `%` or `10.0.%`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemoteAccessPattern(String);

impl RemoteAccessPattern {
    pub fn new(value: Option<String>) -> Result<Self, ProvisionerDomainError> {
        let trimmed = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ANY_REMOTE.to_string());

        if !REMOTE_PATTERN_REGEX.is_match(&trimmed) {
            return Err(ProvisionerDomainError::InvalidRemotePattern);
        }

        Ok(Self(trimmed))
    }

    pub fn any() -> Self {
        Self(ANY_REMOTE.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
