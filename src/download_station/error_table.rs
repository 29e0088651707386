//! Download Station error codes and their messages.

use std::collections::HashMap;

/// API method a request targeted, selecting which error table applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    /// `SYNO.API.Auth` login
    Login,
    /// `SYNO.DownloadStation.Task` create
    Create,
}

impl ApiMethod {
    /// Resolve a `method` form value; anything unrecognised falls back to `Login`
    pub fn from_method(method: Option<&str>) -> Self {
        match method {
            Some("create") => ApiMethod::Create,
            _ => ApiMethod::Login,
        }
    }

    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMethod::Login => "login",
            ApiMethod::Create => "create",
        }
    }
}

/// Codes shared by every API
const GENERIC_ERRORS: &[(i64, &str)] = &[
    (100, "Unknown error"),
    (101, "Invalid parameter"),
    (102, "The requested API does not exist"),
    (103, "The requested method does not exist"),
    (104, "The requested version does not support the functionality"),
    (105, "The logged in session does not have permission"),
    (106, "Session timeout"),
    (107, "Session interrupted by duplicate login"),
];

const CREATE_ERRORS: &[(i64, &str)] = &[
    (400, "File upload failed"),
    (401, "Max number of tasks reached"),
    (402, "Destination denied"),
    (403, "Destination does not exist"),
    (404, "Invalid task id"),
    (405, "Invalid task action"),
    (406, "No default destination"),
    (407, "Set destination failed"),
    (408, "File does not exist"),
];

const LOGIN_ERRORS: &[(i64, &str)] = &[
    (400, "No such account or incorrect password"),
    (401, "Account disabled"),
    (402, "Permission denied"),
    (403, "2-step verification code required"),
    (404, "Failed to authenticate 2-step verification code"),
];

/// Immutable `(method, code) -> message` lookup
#[derive(Clone, Debug)]
pub struct ErrorTable {
    messages: HashMap<(ApiMethod, i64), &'static str>,
}

impl ErrorTable {
    /// Overlay each method-specific table on the generic codes
    pub fn new() -> Self {
        let mut messages = HashMap::new();
        for (method, specific) in [
            (ApiMethod::Create, CREATE_ERRORS),
            (ApiMethod::Login, LOGIN_ERRORS),
        ] {
            for &(code, message) in GENERIC_ERRORS.iter().chain(specific) {
                messages.insert((method, code), message);
            }
        }
        Self { messages }
    }

    /// Message for a code, if the table knows it
    pub fn lookup(&self, method: ApiMethod, code: i64) -> Option<&'static str> {
        self.messages.get(&(method, code)).copied()
    }

    /// Human-readable description that always mentions unmapped codes
    pub fn describe(&self, method: ApiMethod, code: Option<i64>) -> String {
        match code {
            Some(code) => match self.lookup(method, code) {
                Some(message) => message.to_string(),
                None => format!("Unknown error code {}", code),
            },
            None => "No error code in response".to_string(),
        }
    }
}

impl Default for ErrorTable {
    fn default() -> Self {
        Self::new()
    }
}
