use std::fmt;

use rand::Rng;

pub const DATABASE_PASSWORD_LENGTH: usize = 24;

// Printable ASCII without quotes, backslash or backtick so the value can be
// embedded in an administrative statement literal.
const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,-./:;<=>?@[]^_{|}~";

/// Generated secret for a database user. Only ever handed back to the caller
/// that created or rotated it.
#[derive(Clone, Eq, PartialEq)]
pub struct DatabasePassword(String);

impl DatabasePassword {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let value = (0..DATABASE_PASSWORD_LENGTH)
            .map(|_| char::from(PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())]))
            .collect();

        Self(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DatabasePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DatabasePassword(***)")
    }
}
