//! Wire types shared with the authentication API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Public identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Successful outcome of a signup or login exchange: the identity to adopt
/// plus the opaque token that authorizes later requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSuccess {
    pub user: User,
    pub access_token: String,
}

/// Success body returned by the signup/login endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub access_token: String,
}

impl From<AuthResponse> for AuthSuccess {
    fn from(resp: AuthResponse) -> Self {
        Self {
            user: User { id: resp.user_id, email: resp.email, name: resp.name },
            access_token: resp.access_token,
        }
    }
}
