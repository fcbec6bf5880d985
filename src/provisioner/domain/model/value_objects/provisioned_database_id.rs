use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

/// Identity assigned by the metadata store when a record is inserted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ProvisionedDatabaseId(i64);

impl ProvisionedDatabaseId {
    pub fn new(value: i64) -> Result<Self, ProvisionerDomainError> {
        if value <= 0 {
            return Err(ProvisionerDomainError::InvalidIdentifier(format!(
                "database id must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
