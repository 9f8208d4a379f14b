//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips
//! stay lossless; the same types serve as the durable-storage format for
//! the persisted profile and employee drafts.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a successful login/registration response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer credential issued by the backend.
    pub token: String,
}

/// Full user record fetched from the backend after authentication.
///
/// Richer than token claims; may legitimately be absent for an
/// authenticated session when the fetch failed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Registration payload for `POST /users/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub lang_key: String,
    pub mobile_number: String,
    pub date_of_birth: String,
    pub department_uuid: String,
    pub role_uuid: String,
}

/// A team as returned by `GET /teams/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Current members; empty for freshly created teams.
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// A member entry inside a team roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// An employee row on the employees page.
///
/// The backend has no employee-list endpoint yet; rows are drafted in
/// the browser and persisted to local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Employee {
    /// Display name for tables and team rosters.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// A selectable role option from `GET /roles/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    pub uuid: String,
    pub name: String,
}

/// A selectable department option from `GET /departments/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentOption {
    pub uuid: String,
    pub name: String,
}

/// Read the aggregate headcount out of a `GET /users/count` body.
///
/// The endpoint has shipped both as a bare number and as a
/// `{ "count": n }` object; accept either.
#[must_use]
pub fn parse_user_count(body: &serde_json::Value) -> Option<u64> {
    match body {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::Object(map) => map.get("count").and_then(serde_json::Value::as_u64),
        _ => None,
    }
}
