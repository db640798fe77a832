//! User identity: credentials, profile, and role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;
use crate::events::{Event, EventSink};

/// The role an identity was provisioned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Teacher => write!(f, "teacher"),
            Role::Student => write!(f, "student"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The credential-and-profile record underlying both roles.
///
/// Global username uniqueness is the concern of an external user directory;
/// an `Identity` never checks itself against other identities. Credentials
/// are compared by plain equality.
///
/// Note: Custom Debug impl masks the password to prevent accidental
/// exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct Identity {
    username: String,
    password: String,
    name: String,
    email: String,
    role: Role,
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("username", &self.username)
            .field("password", &"***")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}

impl Identity {
    pub fn new(username: &str, password: &str, name: &str, email: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        }
    }

    /// Re-provision the identity in place, overwriting every field.
    ///
    /// This is the only operation that touches username or role.
    pub fn register(&mut self, username: &str, password: &str, role: Role, name: &str, email: &str) {
        self.username = username.to_string();
        self.password = password.to_string();
        self.role = role;
        self.name = name.to_string();
        self.email = email.to_string();
    }

    /// Plain equality check of the supplied credentials.
    pub fn login(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// End a session. No state changes; the only effect is the event.
    pub fn logout(&self, sink: &dyn EventSink) {
        sink.on_event(&Event::LoggedOut {
            username: self.username.clone(),
        });
    }

    /// Overwrite the display fields. Username and password are untouched.
    pub fn update_profile(&mut self, name: &str, email: &str) {
        self.name = name.to_string();
        self.email = email.to_string();
    }

    /// Replace the password if `old` matches the current one.
    pub fn change_password(&mut self, old: &str, new: &str) -> Result<(), IdentityError> {
        if self.password != old {
            return Err(IdentityError::PasswordMismatch);
        }
        self.password = new.to_string();
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
