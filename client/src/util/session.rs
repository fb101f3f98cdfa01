//! Session token decoding.
//!
//! Reads the identity claims out of a JWT-shaped bearer token
//! (`header.payload.signature`). The signature is NOT verified and the `exp`
//! claim is NOT enforced: the remote API authenticates every request, the
//! client only needs to know who it is rendering for.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::{Role, UserIdentity};

/// Why a token could not be turned into a [`UserIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("token is not a header.payload.signature string")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Base64(String),
    #[error("token payload is not a JSON object: {0}")]
    Json(String),
    #[error("token payload is missing claim `{0}`")]
    MissingClaim(&'static str),
    #[error("token carries unknown role `{0}`")]
    UnknownRole(String),
}

#[derive(Deserialize)]
struct RawClaims {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    peran: Option<String>,
    #[serde(default)]
    exp: Option<serde_json::Value>,
}

/// Whole seconds from a NumericDate; fractions are truncated and anything
/// non-numeric is ignored.
#[allow(clippy::cast_possible_truncation)]
fn numeric_date(value: &serde_json::Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
}

/// Decode a bearer token into the identity it describes.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token is not three dot-separated segments,
/// the payload is not base64url JSON, `user_id`/`peran` are missing or empty,
/// or `peran` is not one of the known roles.
pub fn decode(token: &str) -> Result<UserIdentity, DecodeError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(DecodeError::Malformed);
    };
    if payload.is_empty() {
        return Err(DecodeError::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    let claims: RawClaims =
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))?;

    let identifier = claims
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or(DecodeError::MissingClaim("user_id"))?;
    let raw_role = claims
        .peran
        .filter(|r| !r.is_empty())
        .ok_or(DecodeError::MissingClaim("peran"))?;
    let role = Role::from_wire(&raw_role).ok_or(DecodeError::UnknownRole(raw_role))?;

    Ok(UserIdentity { identifier, role, expires_at: claims.exp.as_ref().and_then(numeric_date) })
}

/// Build an unsigned token around `claims`. Test fixture only.
#[cfg(test)]
pub(crate) fn unsigned_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}
