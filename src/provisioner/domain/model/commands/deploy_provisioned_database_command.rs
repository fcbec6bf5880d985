#[derive(Clone, Debug)]
pub struct DeployProvisionedDatabaseCommand {
    label: String,
    remote: Option<String>,
}

impl DeployProvisionedDatabaseCommand {
    pub fn new(label: String, remote: Option<String>) -> Self {
        Self { label, remote }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn remote(&self) -> Option<&str> {
        self.remote.as_deref()
    }
}
