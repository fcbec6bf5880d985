/// Switches the provisioning services read at construction time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProvisioningSettings {
    /// Gates client-initiated database creation as a whole.
    pub databases_enabled: bool,
    /// Lets deployment fall back to any host when none is linked to the server's node.
    pub allow_random_host: bool,
}

impl Default for ProvisioningSettings {
    fn default() -> Self {
        Self {
            databases_enabled: true,
            allow_random_host: false,
        }
    }
}
