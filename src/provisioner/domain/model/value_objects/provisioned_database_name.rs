use lazy_static::lazy_static;
use regex::Regex;

use crate::provisioner::domain::model::{
    enums::provisioner_domain_error::ProvisionerDomainError, value_objects::server_id::ServerId,
};

/// Longest physical database name handed to a host, prefix included.
pub const MAX_DATABASE_NAME_LENGTH: usize = 48;

const LABEL_SEPARATOR: char = '_';

lazy_static! {
    static ref DATABASE_NAME_REGEX: Regex =
        Regex::new(r"^s[0-9]+_[a-z0-9_]+$").expect("valid regex");
    static ref LABEL_REGEX: Regex = Regex::new(r"^[a-z0-9_]+$").expect("valid regex");
}

/// Physical database name, always shaped `s{server_id}_{label}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ProvisionedDatabaseName(String);

impl ProvisionedDatabaseName {
    /// Builds the name for `server_id` from a free-form label.
    ///
    /// The label is lower-cased, every run of characters outside `[a-z0-9]`
    /// collapses into one `_`, and the result is cut so the whole name fits in
    /// [`MAX_DATABASE_NAME_LENGTH`]. The `s{server_id}_` prefix is never cut.
    pub fn generate_unique(
        label: &str,
        server_id: &ServerId,
    ) -> Result<Self, ProvisionerDomainError> {
        let prefix = Self::prefix_for(server_id);
        let budget = MAX_DATABASE_NAME_LENGTH.saturating_sub(prefix.len());

        let normalized = normalize_label(label);
        let truncated = normalized[..normalized.len().min(budget)].trim_end_matches(LABEL_SEPARATOR);

        if truncated.is_empty() {
            return Err(ProvisionerDomainError::InvalidDatabaseName {
                expected_prefix: prefix,
            });
        }

        Ok(Self(format!("{prefix}{truncated}")))
    }

    /// Validates a caller-supplied name against the owning server. The name is
    /// taken as given: no trimming and no case folding.
    pub fn for_server(
        value: Option<&str>,
        server_id: &ServerId,
    ) -> Result<Self, ProvisionerDomainError> {
        let prefix = Self::prefix_for(server_id);
        let invalid = || ProvisionerDomainError::InvalidDatabaseName {
            expected_prefix: prefix.clone(),
        };

        let value = value.unwrap_or_default();
        let label = value.strip_prefix(prefix.as_str()).ok_or_else(invalid)?;

        if value.len() > MAX_DATABASE_NAME_LENGTH || !LABEL_REGEX.is_match(label) {
            return Err(invalid());
        }

        Ok(Self(value.to_string()))
    }

    /// Rehydrates a name read back from the metadata store.
    pub fn new(value: String) -> Result<Self, ProvisionerDomainError> {
        if value.len() > MAX_DATABASE_NAME_LENGTH || !DATABASE_NAME_REGEX.is_match(&value) {
            return Err(ProvisionerDomainError::InvalidDatabaseName {
                expected_prefix: "s{server_id}_".to_string(),
            });
        }

        Ok(Self(value))
    }

    pub fn prefix_for(server_id: &ServerId) -> String {
        format!("s{}_", server_id.value())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

fn normalize_label(label: &str) -> String {
    let mut normalized = String::with_capacity(label.len());

    for character in label.chars() {
        let character = character.to_ascii_lowercase();
        if character.is_ascii_alphanumeric() {
            normalized.push(character);
        } else if !normalized.is_empty() && !normalized.ends_with(LABEL_SEPARATOR) {
            normalized.push(LABEL_SEPARATOR);
        }
    }

    normalized.trim_end_matches(LABEL_SEPARATOR).to_string()
}
