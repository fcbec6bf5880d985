use std::fmt;

/// Lifecycle step recorded in the provisioning audit trail.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ProvisioningAuditEventName {
    ProvisionStarted,
    ProvisionSucceeded,
    ProvisionFailed,
    DeleteStarted,
    DeleteSucceeded,
    DeleteFailed,
    PasswordRotationSucceeded,
    PasswordRotationFailed,
}

impl ProvisioningAuditEventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProvisionStarted => "database_provision_started",
            Self::ProvisionSucceeded => "database_provision_succeeded",
            Self::ProvisionFailed => "database_provision_failed",
            Self::DeleteStarted => "database_delete_started",
            Self::DeleteSucceeded => "database_delete_succeeded",
            Self::DeleteFailed => "database_delete_failed",
            Self::PasswordRotationSucceeded => "database_password_rotation_succeeded",
            Self::PasswordRotationFailed => "database_password_rotation_failed",
        }
    }
}

impl fmt::Display for ProvisioningAuditEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
