//! HTTP Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::domain::entities::User;
use crate::{error::AppError, state::AppState};

/// The authenticated user, injected as a request extension for handlers
/// behind the auth middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authenticates requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// # Authentication Flow
///
/// 1. Extract credentials from the `Authorization` header
/// 2. Verify the password hash against the database
/// 3. Reject deactivated accounts
/// 4. Inject [`CurrentUser`] and continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Basic`) if the
/// header is missing or malformed, the user is unknown, or the password
/// is wrong. Returns `403 Forbidden` for deactivated accounts.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let user = st
        .auth_service
        .authenticate(&username, password.as_deref().unwrap_or(""))
        .await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
