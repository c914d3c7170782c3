use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use jwt_simple::prelude::Claims;
use jwt_simple::prelude::Duration;
use jwt_simple::prelude::HS256Key;
use jwt_simple::prelude::MACLike;
use jwt_simple::prelude::VerificationOptions;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone)]
pub struct JwtTokenImpl {
    key: HS256Key,
}

pub struct SignedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum TokenImplError {
    #[error(transparent)]
    JwtImplError(#[from] jwt_simple::Error),
    #[error("token without expiration date")]
    TokenWithoutExpirationDate,
    #[error("bad timestamp")]
    BadTimestamp,
}

impl JwtTokenImpl {
    pub fn new(secret: &str) -> Self {
        Self {
            key: HS256Key::from_bytes(secret.as_bytes()),
        }
    }
}

impl JwtTokenImpl {
    pub fn produce_token<T: Serialize + DeserializeOwned>(
        &self,
        expires_in: u64,
        extra_parameters: T,
    ) -> Result<SignedToken, TokenImplError> {
        let claims =
            Claims::with_custom_claims::<T>(extra_parameters, Duration::from_secs(expires_in));

        let expires_at = match claims.expires_at {
            Some(exp) => match Utc.timestamp_opt(exp.as_secs() as i64, 0).single() {
                Some(tmstp) => Ok(tmstp),
                None => Err(TokenImplError::BadTimestamp),
            },
            None => Err(TokenImplError::TokenWithoutExpirationDate),
        }?;

        let token = self.key.authenticate(claims)?;

        Ok(SignedToken { token, expires_at })
    }
}

impl JwtTokenImpl {
    /// Checks signature, structure and expiry with no clock tolerance.
    pub fn validate_token<T: Serialize + DeserializeOwned>(
        &self,
        raw_token: &str,
    ) -> Result<T, TokenImplError> {
        let claims = self.key.verify_token::<T>(
            raw_token,
            Some(VerificationOptions {
                time_tolerance: None,
                ..VerificationOptions::default()
            }),
        )?;

        Ok(claims.custom)
    }
}
