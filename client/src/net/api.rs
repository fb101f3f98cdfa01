//! REST API helpers for the SAGE backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`]; pages
//! only issue requests from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The backend answers errors with `{ "message": ... }`. That message becomes
//! the `Display` of [`ApiError::Status`]; when it is missing the per-endpoint
//! fallback text is used instead, so pages can render any error directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::types::{
    ApiMessage, Class, LoginCredentials, LoginResponse, NewClass, NewTeacher, Registration, Teacher,
};
use crate::util::session::DecodeError;

pub const HELLO_PATH: &str = "/api/hello";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const TEACHERS_PATH: &str = "/api/admin/teachers";
pub const CLASSES_PATH: &str = "/api/classes";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Tidak ada token otentikasi.")]
    MissingToken,
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Body(String),
    #[error("token tidak valid: {0}")]
    Session(#[from] DecodeError),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The backend rejected our token; the caller should sign in again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Delete,
}

pub(crate) fn teacher_path(teacher_id: &str) -> String {
    format!("{TEACHERS_PATH}/{teacher_id}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    token.filter(|t| !t.is_empty()).ok_or(ApiError::MissingToken)
}

/// Turn a non-2xx response into an error, preferring the server's message.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_error(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Status { status, message }
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Body(e.to_string()))
}

/// The class list endpoint answers `null` when a teacher has no classes.
pub(crate) fn parse_class_list(body: &str) -> Result<Vec<Class>, ApiError> {
    parse_body::<Option<Vec<Class>>>(body).map(Option::unwrap_or_default)
}

/// Issue one request and return the raw success body.
async fn send(
    config: &ApiConfig,
    verb: Verb,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
    fallback: &str,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = config.endpoint(path);
        let mut builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Delete => Request::delete(&url),
        };
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer(token));
        }
        let resp = match body {
            Some(json) => builder
                .json(&json)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        let ok = resp.ok();
        let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if !ok {
            log::warn!("{verb:?} {path} failed with {status}");
            return Err(status_error(status, &text, fallback));
        }
        Ok(text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, verb, path, token, body, fallback);
        Err(ApiError::Unavailable)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Body(e.to_string()))
}

/// Greeting from `GET /api/hello`, used by the landing page.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-OK status, or a body
/// without a `message`.
pub async fn fetch_hello(config: &ApiConfig) -> Result<String, ApiError> {
    let text = send(config, Verb::Get, HELLO_PATH, None, None, "Network response was not ok").await?;
    parse_body::<ApiMessage>(&text)?
        .message
        .ok_or_else(|| ApiError::Body("missing message".to_owned()))
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with the server's message on rejected credentials.
pub async fn login(config: &ApiConfig, identifier: &str, password: &str) -> Result<String, ApiError> {
    let body = to_json(&LoginCredentials { identifier: identifier.to_owned(), password: password.to_owned() })?;
    let text = send(config, Verb::Post, LOGIN_PATH, None, Some(body), "Login gagal.").await?;
    Ok(parse_body::<LoginResponse>(&text)?.token)
}

/// Create a student account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] on validation or conflict failures.
pub async fn register(config: &ApiConfig, registration: &Registration) -> Result<ApiMessage, ApiError> {
    let body = to_json(registration)?;
    let text = send(config, Verb::Post, REGISTER_PATH, None, Some(body), "Gagal untuk mendaftar.").await?;
    parse_body(&text)
}

/// List teacher accounts via `GET /api/admin/teachers` (superadmin only).
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] without sending anything when `token` is absent.
pub async fn fetch_teachers(config: &ApiConfig, token: Option<&str>) -> Result<Vec<Teacher>, ApiError> {
    let token = require_token(token)?;
    let text = send(config, Verb::Get, TEACHERS_PATH, Some(token), None, "Gagal mengambil daftar guru.").await?;
    parse_body(&text)
}

/// Create a teacher account via `POST /api/admin/teachers`.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] or the server's rejection.
pub async fn create_teacher(
    config: &ApiConfig,
    token: Option<&str>,
    teacher: &NewTeacher,
) -> Result<ApiMessage, ApiError> {
    let token = require_token(token)?;
    let body = to_json(teacher)?;
    let text = send(config, Verb::Post, TEACHERS_PATH, Some(token), Some(body), "Gagal menambah guru.").await?;
    parse_body(&text)
}

/// Delete a teacher account via `DELETE /api/admin/teachers/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] or the server's rejection (e.g. 404).
pub async fn delete_teacher(
    config: &ApiConfig,
    token: Option<&str>,
    teacher_id: &str,
) -> Result<ApiMessage, ApiError> {
    let token = require_token(token)?;
    let path = teacher_path(teacher_id);
    let text = send(config, Verb::Delete, &path, Some(token), None, "Gagal menghapus guru.").await?;
    parse_body(&text)
}

/// List the caller's classes via `GET /api/classes`.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] or the server's rejection.
pub async fn fetch_classes(config: &ApiConfig, token: Option<&str>) -> Result<Vec<Class>, ApiError> {
    let token = require_token(token)?;
    let text = send(config, Verb::Get, CLASSES_PATH, Some(token), None, "Gagal mengambil data kelas.").await?;
    parse_class_list(&text)
}

/// Create a class via `POST /api/classes`.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] or the server's rejection.
pub async fn create_class(config: &ApiConfig, token: Option<&str>, class: &NewClass) -> Result<ApiMessage, ApiError> {
    let token = require_token(token)?;
    let body = to_json(class)?;
    let text = send(config, Verb::Post, CLASSES_PATH, Some(token), Some(body), "Gagal membuat kelas.").await?;
    parse_body(&text)
}
