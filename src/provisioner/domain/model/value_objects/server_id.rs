use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ServerId(i64);

impl ServerId {
    pub fn new(value: i64) -> Result<Self, ProvisionerDomainError> {
        if value <= 0 {
            return Err(ProvisionerDomainError::InvalidIdentifier(format!(
                "server id must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
