use crate::provisioner::domain::model::{
    entities::provisioned_database::ProvisionedDatabase,
    value_objects::database_password::DatabasePassword,
};

/// A database record together with the password that was just assigned to its
/// user. The password is not persisted by the provisioner.
#[derive(Clone, Debug)]
pub struct IssuedDatabaseCredentials {
    pub database: ProvisionedDatabase,
    pub password: DatabasePassword,
}
