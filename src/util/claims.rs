//! Bearer-token claim decoding.
//!
//! DESIGN
//! ======
//! The backend issues JWTs; the client only reads the payload segment to
//! learn who it is talking as. Signatures are NOT verified here; the
//! backend remains the source of truth on token validity, and every
//! authenticated request is re-checked server-side.
//!
//! Role designators arrive either as a single string or as an array
//! depending on the backend build; both shapes normalize to a list at
//! this boundary so nothing downstream has to care.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};

/// Minimal identity facts decoded from a session token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account email, or empty if the token carries none.
    pub email: String,
    /// Role designators, normalized to a list.
    pub roles: Vec<String>,
}

/// Failure to read a structurally invalid token.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("token is not a three-segment JWT")]
    Shape,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not a claims object: {0}")]
    Payload(String),
}

/// Payload fields as they appear on the wire, before normalization.
#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    roles: Option<RoleField>,
}

/// Accepts `"EMPLOYEE"` and `["EMPLOYEE", "ADMIN"]` alike.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoleField {
    One(String),
    Many(Vec<String>),
}

impl RoleField {
    fn into_list(self) -> Vec<String> {
        let list = match self {
            Self::One(role) => vec![role],
            Self::Many(roles) => roles,
        };
        list.into_iter().filter(|role| !role.trim().is_empty()).collect()
    }
}

/// Decode the claims carried by a bearer token.
///
/// Deterministic and side-effect free: the same token always yields the
/// same claims. Callers treat any error as an unauthenticated session
/// and clear the credential store.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token is not a well-formed encoded
/// payload (wrong segment count, bad base64url, or non-claims JSON).
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(DecodeError::Shape);
    };

    let bytes = Base64UrlUnpadded::decode_vec(payload).map_err(|_| DecodeError::Encoding)?;
    let raw: RawClaims = serde_json::from_slice(&bytes).map_err(|e| DecodeError::Payload(e.to_string()))?;

    Ok(Claims {
        email: raw.email.unwrap_or_default(),
        roles: raw.roles.map_or_else(Vec::new, RoleField::into_list),
    })
}
