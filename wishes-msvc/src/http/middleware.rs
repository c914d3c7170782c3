use crate::domain::token_model::AccessTokenPayload;
use crate::domain::token_model::Permission;
use crate::http::extractors::BearerToken;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware;
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::MethodRouter;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("access token is missing")]
    MissingToken,
    #[error("access token is invalid or expired")]
    InvalidOrExpired,
    #[error("access denied")]
    AccessDenied,
    #[error("token verifier is not configured")]
    Internal,
}

#[derive(Clone, Copy)]
pub(super) struct RequiredPermissions(&'static [Permission]);

/// Attaches verified claims to the request extensions.
pub(super) async fn verify_bearer_token(
    BearerToken(payload): BearerToken,
    mut request: Request<Body>,
    next: Next<Body>,
) -> Response {
    request.extensions_mut().insert(payload);
    next.run(request).await
}

/// Lets the request through when the claims hold any one of the required
/// permissions. Requests that never went through the verifier are denied.
pub(super) async fn permission_gate(
    State(RequiredPermissions(required)): State<RequiredPermissions>,
    request: Request<Body>,
    next: Next<Body>,
) -> Result<Response, AuthError> {
    let allowed = match request.extensions().get::<AccessTokenPayload>() {
        Some(payload) => payload.has_any_permission(required),
        None => false,
    };

    if !allowed {
        debug!(
            "denied {} {}: requires any of {:?}",
            request.method(),
            request.uri().path(),
            required
        );
        return Err(AuthError::AccessDenied);
    }

    Ok(next.run(request).await)
}

pub(super) fn gate(route: MethodRouter, required: &'static [Permission]) -> MethodRouter {
    route.route_layer(middleware::from_fn_with_state(
        RequiredPermissions(required),
        permission_gate,
    ))
}
