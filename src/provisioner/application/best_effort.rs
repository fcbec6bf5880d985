use std::future::Future;

use tracing::warn;

use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

/// Awaits a step whose failure must not change the caller's outcome. The error
/// is logged and then dropped.
pub async fn best_effort<F>(operation: &'static str, step: F)
where
    F: Future<Output = Result<(), ProvisionerDomainError>>,
{
    if let Err(error) = step.await {
        warn!(operation, %error, "best-effort step failed");
    }
}
