//! REST API helpers for communicating with the HR backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning sentinel values since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Login and registration distinguish a credential rejection (4xx) from
//! transport trouble so the UI can word the toast; everything else
//! degrades to `Option`/`bool` sentinels instead of panics, and profile
//! absence is an expected, recoverable state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::bearer;
use super::types::{DepartmentOption, RegistrationPayload, RoleOption, Team, UserProfile};
#[cfg(feature = "hydrate")]
use super::types::{TokenResponse, parse_user_count};

/// Failure modes of the session endpoints.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend declined the credentials (4xx). No retry will help.
    #[error("credentials rejected: {0}")]
    Rejected(u16),
    /// Transport-level failure or a non-4xx error status.
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but was not the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("STAFFBOARD_API_URL").unwrap_or("/api")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{}/auth/login", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> String {
    format!("{}/users/create", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint() -> String {
    format!("{}/users/getUsers", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn user_count_endpoint() -> String {
    format!("{}/users/count", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn teams_list_endpoint() -> String {
    format!("{}/teams/list", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn teams_create_endpoint() -> String {
    format!("{}/teams/create", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn team_endpoint(id: Uuid) -> String {
    format!("{}/teams/{id}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn roles_endpoint() -> String {
    format!("{}/roles/list", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn departments_endpoint() -> String {
    format!("{}/departments/list", api_base())
}

/// Map a non-2xx auth status to the matching error.
#[cfg(any(test, feature = "hydrate"))]
fn classify_auth_status(status: u16) -> ApiError {
    if (400..500).contains(&status) {
        ApiError::Rejected(status)
    } else {
        ApiError::Network(format!("unexpected status {status}"))
    }
}

/// Attach the current bearer token, when one is installed.
#[cfg(feature = "hydrate")]
fn with_bearer(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match bearer::header_value() {
        Some(value) => request.header("Authorization", &value),
        None => request,
    }
}

/// Exchange credentials for a session token via `POST /auth/login`.
///
/// # Errors
///
/// [`ApiError::Rejected`] on a 4xx (invalid credentials),
/// [`ApiError::Network`] on transport failure, [`ApiError::Malformed`]
/// when the body lacks a token.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_auth_status(resp.status()));
        }
        let body: TokenResponse = resp.json().await.map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /users/create`; same contract as login.
///
/// # Errors
///
/// See [`login`]; a duplicate email surfaces as [`ApiError::Rejected`].
pub async fn register(payload: &RegistrationPayload) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&register_endpoint())
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_auth_status(resp.status()));
        }
        let body: TokenResponse = resp.json().await.map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the authenticated user's profile from `GET /users/getUsers`.
///
/// Returns `None` without a network call when no bearer token is
/// installed, and `None` on any failure; the session stays valid.
pub async fn fetch_profile() -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let header = bearer::header_value()?;
        let resp = gloo_net::http::Request::get(&profile_endpoint())
            .header("Authorization", &header)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bearer::header_value();
        None
    }
}

/// Fetch all teams from `GET /teams/list`.
pub async fn fetch_teams() -> Option<Vec<Team>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&teams_list_endpoint()))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Team>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create a team via `POST /teams/create`, returning the stored row.
pub async fn create_team(name: &str) -> Option<Team> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        let resp = with_bearer(gloo_net::http::Request::post(&teams_create_endpoint()))
            .json(&payload)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Team>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Rename a team via `PUT /teams/{uuid}`.
pub async fn update_team(id: Uuid, name: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        let Ok(request) = with_bearer(gloo_net::http::Request::put(&team_endpoint(id))).json(&payload) else {
            return false;
        };
        match request.send().await {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, name);
        false
    }
}

/// Delete a team via `DELETE /teams/{uuid}`.
pub async fn delete_team(id: Uuid) -> bool {
    #[cfg(feature = "hydrate")]
    {
        match with_bearer(gloo_net::http::Request::delete(&team_endpoint(id))).send().await {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Fetch the aggregate headcount from `GET /users/count`.
pub async fn fetch_user_count() -> Option<u64> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&user_count_endpoint()))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: serde_json::Value = resp.json().await.ok()?;
        parse_user_count(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch selectable roles from `GET /roles/list`.
pub async fn fetch_roles() -> Option<Vec<RoleOption>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&roles_endpoint()).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<RoleOption>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch selectable departments from `GET /departments/list`.
pub async fn fetch_departments() -> Option<Vec<DepartmentOption>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&departments_endpoint()).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<DepartmentOption>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
