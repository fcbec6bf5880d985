pub mod provisioner_domain_error;
pub mod provisioning_audit_event_name;
