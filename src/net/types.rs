//! Wire types for the `/api/v1` backend.
//!
//! Every endpoint wraps its payload in a `{code, message, data}` envelope
//! where `code == 0` signals success. The envelope is decoded here into one
//! result type per endpoint, so callers match on explicit variants instead of
//! probing untyped fields.
//!
//! ERROR HANDLING
//! ==============
//! A non-zero `code` is an application-level rejection carried as data
//! (`Rejected`), not an `Err`. `ApiError` covers the transport and decode
//! failures underneath it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::Value;

/// Envelope code signalling success.
pub const CODE_OK: i64 = 0;

/// Raw response envelope shared by every auth endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// A non-success envelope: the backend's code plus its human-readable
/// message, if it sent one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub code: i64,
    pub message: Option<String>,
}

/// Transport or decode failure beneath the envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Result of `POST /api/v1/auth/login`.
#[derive(Debug)]
pub enum LoginResponse {
    /// Credentials accepted; the full credential set for the new session.
    Granted {
        access_token: String,
        refresh_token: String,
        user: Value,
    },
    Rejected(Rejection),
}

/// Result of `POST /api/v1/auth/register`.
#[derive(Debug)]
pub enum RegisterResponse {
    Created,
    Rejected(Rejection),
}

/// Result of `GET /api/v1/auth/me`.
#[derive(Debug)]
pub enum MeResponse {
    Profile(Value),
    Rejected(Rejection),
}

impl Envelope {
    fn rejection(self) -> Rejection {
        Rejection {
            code: self.code,
            message: self.message,
        }
    }

    fn data_str(&self, field: &str) -> Result<String, ApiError> {
        self.data
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| ApiError::Malformed(format!("missing `{field}` in login data")))
    }
}

/// Decode a login envelope into its typed result.
///
/// # Errors
///
/// Returns `ApiError::Malformed` if a success envelope is missing any of the
/// credential fields.
pub fn decode_login(envelope: Envelope) -> Result<LoginResponse, ApiError> {
    if envelope.code != CODE_OK {
        return Ok(LoginResponse::Rejected(envelope.rejection()));
    }
    let access_token = envelope.data_str("access_token")?;
    let refresh_token = envelope.data_str("refresh_token")?;
    let user = envelope
        .data
        .get("user")
        .cloned()
        .ok_or_else(|| ApiError::Malformed("missing `user` in login data".to_owned()))?;
    Ok(LoginResponse::Granted {
        access_token,
        refresh_token,
        user,
    })
}

/// Decode a register envelope into its typed result.
pub fn decode_register(envelope: Envelope) -> RegisterResponse {
    if envelope.code == CODE_OK {
        RegisterResponse::Created
    } else {
        RegisterResponse::Rejected(envelope.rejection())
    }
}

/// Decode a current-user envelope into its typed result.
pub fn decode_me(envelope: Envelope) -> MeResponse {
    if envelope.code == CODE_OK {
        MeResponse::Profile(envelope.data)
    } else {
        MeResponse::Rejected(envelope.rejection())
    }
}
