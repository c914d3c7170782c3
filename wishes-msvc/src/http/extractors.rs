use crate::domain::token_model::AccessTokenPayload;
use crate::http::middleware::AuthError;
use crate::providers::token::JwtTokenImpl;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::headers::authorization::Bearer;
use axum::headers::Authorization;
use axum::http::request::Parts;
use axum::Extension;
use axum::RequestPartsExt;
use axum::TypedHeader;
use log::debug;
use log::error;
use std::sync::Arc;

/// Claims of a bearer token whose signature and expiry checked out.
pub(super) struct BearerToken(pub AccessTokenPayload);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token_impl = parts
            .extract::<Extension<Arc<JwtTokenImpl>>>()
            .await
            .map_err(|rej| {
                error!("Expected to extract JwtTokenImpl: {}", rej);
                AuthError::Internal
            })?;

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AuthError::MissingToken)?;

        let payload = token_impl
            .validate_token::<AccessTokenPayload>(bearer.token())
            .map_err(|err| {
                debug!("rejected bearer token: {}", err);
                AuthError::InvalidOrExpired
            })?;

        Ok(BearerToken(payload))
    }
}
