//! User management models.
//!
//! [`Role`] is the closed set of roles this system understands. Roles are
//! stored as metadata on the provider side; here they only exist to gate
//! routes and to validate role assignments.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validator::validate_user_id;

/// The roles accepted by the role gate and the role-assignment endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parse a role name, returning `None` for anything outside the set.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// DTO for assigning a role to a user.
///
/// The identifier must be a UUID and the role must be non-empty; the
/// handler additionally rejects roles outside the [`Role`] set before any
/// provider call is made.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleRequest {
    #[validate(custom(function = validate_user_id))]
    pub user_id: String,
    #[validate(length(min = 1, message = "role cannot be empty."))]
    pub role: String,
}
