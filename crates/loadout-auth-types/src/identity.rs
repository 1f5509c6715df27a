//! Bearer credential resolution and the matching axum extractor.
//!
//! Development grade only: a credential is accepted when it carries the
//! `dev-` prefix followed by at least one character, and the credential
//! itself becomes the user id. There is no signature, expiry or revocation
//! check. A real validator must keep the `resolve_identity` signature.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::StatusCode;
use http::request::Parts;

/// Prefix every accepted development credential starts with.
pub const DEV_CREDENTIAL_PREFIX: &str = "dev-";

/// Errors returned by [`resolve_identity`] and the [`BearerIdentity`] extractor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("unauthenticated")]
    Unauthenticated,
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

/// Map a raw credential to the user id that owns it.
///
/// ```
/// use loadout_auth_types::identity::{AuthError, resolve_identity};
///
/// assert_eq!(resolve_identity("dev-alice").unwrap(), "dev-alice");
/// assert_eq!(resolve_identity("dev-"), Err(AuthError::Unauthenticated));
/// ```
pub fn resolve_identity(credential: &str) -> Result<String, AuthError> {
    match credential.strip_prefix(DEV_CREDENTIAL_PREFIX) {
        Some(rest) if !rest.is_empty() => Ok(credential.to_owned()),
        _ => Err(AuthError::Unauthenticated),
    }
}

/// Caller identity taken from `Authorization: Bearer <credential>`.
///
/// Rejects with 401 when the header is absent, is not a bearer credential,
/// or the credential does not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerIdentity {
    pub user_id: String,
}

impl<S> FromRequestParts<S> for BearerIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    // Resolve synchronously and hand back a 'static future; `async fn` here
    // trips E0195 against axum-core's `impl Future + Send` signature.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let resolved = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AuthError::Unauthenticated)
            .and_then(|Authorization(bearer)| resolve_identity(bearer.token()));

        if resolved.is_err() {
            tracing::debug!("rejected bearer credential");
        }

        async move {
            let user_id = resolved?;
            Ok(Self { user_id })
        }
    }
}
