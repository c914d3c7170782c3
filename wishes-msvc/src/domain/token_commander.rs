use crate::domain::token_model::AccessTokenPayload;
use crate::domain::token_model::Account;
use crate::domain::token_model::CredentialsInput;
use crate::domain::token_model::TokenOutput;
use crate::providers::token::JwtTokenImpl;
use crate::providers::token::TokenImplError;
use log::info;
use log::warn;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenCommanderError {
    #[error(transparent)]
    TokenImplError(#[from] TokenImplError),
    #[error("bad credentials")]
    BadCredentials,
}

/// Exchanges a known username/password pair for a signed access token.
///
/// The account table is handed in at construction; nothing is hashed or
/// remembered between calls.
#[derive(Clone)]
pub struct TokenCommander {
    accounts: Arc<Vec<Account>>,
    token: Arc<JwtTokenImpl>,
    expires_in: u64,
}

impl TokenCommander {
    pub fn new(accounts: Vec<Account>, token: Arc<JwtTokenImpl>, expires_in: u64) -> Self {
        Self {
            accounts: Arc::new(accounts),
            token,
            expires_in,
        }
    }
}

impl TokenCommander {
    pub fn exchange_credentials_for_token(
        &self,
        input: CredentialsInput,
    ) -> Result<TokenOutput, TokenCommanderError> {
        let account = match self
            .accounts
            .iter()
            .find(|a| a.username == input.username && a.password == input.password)
        {
            Some(account) => Ok(account),
            None => {
                warn!("rejected credentials for username {}", input.username);
                Err(TokenCommanderError::BadCredentials)
            }
        }?;

        let payload = AccessTokenPayload::for_account(&account.username, account.role);

        let signed = self.token.produce_token(self.expires_in, payload)?;

        info!(
            "issued {:?} token for {} expiring at {}",
            account.role, account.username, signed.expires_at
        );

        Ok(TokenOutput {
            token: signed.token,
            expires_at: signed.expires_at,
        })
    }
}
