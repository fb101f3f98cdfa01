//! Shared DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the remote API's JSON (`nama_lengkap`, `nama_kelas`,
//! `peran`, ...) so serde round-trips stay lossless; Rust-side names are only
//! introduced where the client derives its own records (`UserIdentity`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access level carried in the `peran` claim of a session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Superadmin,
}

impl Role {
    /// Parse the wire spelling of a role. Anything outside the closed set is `None`.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            "superadmin" => Some(Self::Superadmin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Superadmin => "superadmin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity derived from the current session token.
///
/// Never stored on its own: it is recomputed from the token on every
/// initialization and login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserIdentity {
    /// Opaque subject id (`user_id` claim).
    pub identifier: String,
    pub role: Role,
    /// Unix seconds from the `exp` claim, if present. Informational only.
    pub expires_at: Option<i64>,
}

/// Teacher account as listed by `GET /api/admin/teachers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub nama_lengkap: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Class record as listed by `GET /api/classes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    #[serde(default)]
    pub guru_id: Option<String>,
    pub nama_kelas: String,
    #[serde(default)]
    pub deskripsi: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /api/admin/teachers`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTeacher {
    pub nama_lengkap: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/classes`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewClass {
    pub nama_kelas: String,
    pub deskripsi: String,
}

/// Body for `POST /api/auth/register`. Self-registration always creates students.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Registration {
    pub nama_lengkap: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub peran: Role,
}

/// Body for `POST /api/auth/login`. `identifier` is an email or a username.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub identifier: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `{ "message": ... }` body used for errors and for create/delete acknowledgements.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "userID")]
    pub user_id: Option<String>,
}
