//! Identity extraction.
//!
//! Sessions are owned by the upstream auth gateway, which forwards the
//! verified identity subject in `x-user-id` (and the email, when known, in
//! `x-user-email`). Every user-scoped handler takes an `AuthUser`; a request
//! without an identity is rejected before any handler logic runs.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_EMAIL_HEADER: &str = "x-user-email";

#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub user_id: String,
    pub email: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let user_id = header(USER_ID_HEADER).ok_or(AppError::Unauthorized)?;
        let email = header(USER_EMAIL_HEADER);

        Ok(AuthUser { user_id, email })
    }
}
