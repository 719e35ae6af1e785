use std::fmt;

use super::DomainError;

/// A validated service identifier as typed by the user, e.g. `Product`.
///
/// Invariant: non-empty and a valid TypeScript identifier. Enforced at
/// construction, so path segments derived from it never contain separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidServiceName {
            name: name.clone(),
            reason: reason.into(),
        };

        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(invalid("name cannot be empty"));
        };
        if first.is_numeric() {
            return Err(invalid("name cannot start with a digit"));
        }
        if !std::iter::once(first).chain(chars).all(is_identifier_char) {
            return Err(invalid(
                "name may only contain letters, digits, '_' and '$'",
            ));
        }

        Ok(Self(name))
    }

    /// The name exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for the folder and file name.
    pub fn folder_name(&self) -> String {
        self.0.to_lowercase()
    }

    /// Class identifier: the name exactly as given plus `Service`
    /// (`userProfile` -> `userProfileService`).
    pub fn class_name(&self) -> String {
        format!("{}Service", self.0)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Recognised options for the service command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Inject `HttpClient` and add CRUD method stubs.
    pub http: bool,
}
