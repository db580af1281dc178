use std::fmt;

use uuid::Uuid;

use crate::domain::user::models::UserUuid;

/// Label reported for a code outside a status enumeration.
pub const UNKNOWN_STATUS_LABEL: &str = "UNKNOWN";

/// Outcome of a login attempt.
///
/// Codes are stable and part of the public response contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LoginStatus {
    Success = 0,
    Failure = 1,
    InvalidCredentials = 2,
    UserNotFound = 3,
}

impl LoginStatus {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn label(self) -> &'static str {
        match self {
            LoginStatus::Success => "SUCCESS",
            LoginStatus::Failure => "FAILURE",
            LoginStatus::InvalidCredentials => "INVALID_CREDENTIALS",
            LoginStatus::UserNotFound => "USER_NOT_FOUND",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(LoginStatus::Success),
            1 => Some(LoginStatus::Failure),
            2 => Some(LoginStatus::InvalidCredentials),
            3 => Some(LoginStatus::UserNotFound),
            _ => None,
        }
    }

    /// Label for a raw code; `"UNKNOWN"` when the code has no status.
    pub fn label_for_code(code: i32) -> &'static str {
        Self::from_code(code).map_or(UNKNOWN_STATUS_LABEL, Self::label)
    }
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a registration attempt.
///
/// Codes are stable and part of the public response contract.
/// `InvalidCredentials` is reserved and never produced by registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum RegisterStatus {
    Success = 0,
    Failure = 1,
    UserAlreadyExist = 2,
    InvalidEmail = 3,
    InvalidName = 4,
    InvalidPassword = 5,
    InvalidCredentials = 6,
}

impl RegisterStatus {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn label(self) -> &'static str {
        match self {
            RegisterStatus::Success => "SUCCESS",
            RegisterStatus::Failure => "FAILURE",
            RegisterStatus::UserAlreadyExist => "USER_ALREADY_EXIST",
            RegisterStatus::InvalidEmail => "INVALID_EMAIL",
            RegisterStatus::InvalidName => "INVALID_NAME",
            RegisterStatus::InvalidPassword => "INVALID_PASSWORD",
            RegisterStatus::InvalidCredentials => "INVALID_CREDENTIALS",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(RegisterStatus::Success),
            1 => Some(RegisterStatus::Failure),
            2 => Some(RegisterStatus::UserAlreadyExist),
            3 => Some(RegisterStatus::InvalidEmail),
            4 => Some(RegisterStatus::InvalidName),
            5 => Some(RegisterStatus::InvalidPassword),
            6 => Some(RegisterStatus::InvalidCredentials),
            _ => None,
        }
    }

    /// Label for a raw code; `"UNKNOWN"` when the code has no status.
    pub fn label_for_code(code: i32) -> &'static str {
        Self::from_code(code).map_or(UNKNOWN_STATUS_LABEL, Self::label)
    }
}

impl fmt::Display for RegisterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Credentials submitted to login or registration.
///
/// Login reads `email` and `password` only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserCredentials {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Copy with leading and trailing whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a login attempt that reached a decision.
///
/// `token` is present exactly when `status` is `Success`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub status: LoginStatus,
    pub token: Option<String>,
}

impl LoginOutcome {
    pub fn success(token: String) -> Self {
        Self {
            status: LoginStatus::Success,
            token: Some(token),
        }
    }

    pub fn rejected(status: LoginStatus) -> Self {
        Self {
            status,
            token: None,
        }
    }
}

/// Identity carried by a verified session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_uuid: UserUuid,
    pub token_id: Uuid,
    /// Expiry as a Unix timestamp (seconds)
    pub expires_at: i64,
}
