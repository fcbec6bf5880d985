use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionerDomainError {
    #[error("client database creation is not enabled")]
    FeatureDisabled,

    #[error("server has reached its database limit of {0}")]
    DatabaseLimitReached(u32),

    #[error("database name must be prefixed with \"{expected_prefix}\" followed by [a-z0-9_], at most 48 characters")]
    InvalidDatabaseName { expected_prefix: String },

    #[error("database username is invalid; expected u<server id>_ followed by 10 alphanumeric characters")]
    InvalidDatabaseUsername,

    #[error("remote access pattern is invalid; use [0-9%./] and length 1..31")]
    InvalidRemotePattern,

    #[error("connection limit {0} is out of range; use 1..=2147483647")]
    InvalidConnectionLimit(u32),

    #[error("database host is invalid: {0}")]
    InvalidDatabaseHost(String),

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("a database with that name already exists for this server")]
    DuplicateDatabaseName,

    #[error("database not found")]
    DatabaseNotFound,

    #[error("database host not found")]
    DatabaseHostNotFound,

    #[error("server not found")]
    ServerNotFound,

    #[error("no database host is available for this server's node")]
    NoSuitableDatabaseHost,

    #[error("database host still has databases assigned to it")]
    DatabaseHostHasDatabases,

    #[error("remote provisioning error: {0}")]
    RemoteProvisioningError(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
