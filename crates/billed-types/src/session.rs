use serde::{Deserialize, Serialize};

/// Role stored with the logged-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UserType {
    #[default]
    Employee,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Employee => "Employee",
            UserType::Admin => "Admin",
        }
    }
}

/// The logged-in session, persisted under the `"user"` key as JSON.
///
/// Written at login (outside this system), read on every navigation.
/// Parsing happens in exactly one place (`billed-app`'s session loader) so
/// malformed stored JSON has a single typed failure path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl Session {
    pub fn employee(email: impl Into<String>) -> Self {
        Session {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }
}
