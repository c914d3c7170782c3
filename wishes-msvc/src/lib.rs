pub mod config;
pub mod domain;
pub mod http;
pub mod providers;

use crate::config::Config;
use crate::domain::token_commander::TokenCommander;
use crate::domain::wish_commander::WishCommander;
use crate::domain::wish_model::seed_wishes;
use crate::domain::wish_querier::WishQuerier;
use crate::http::wishes_route;
use crate::providers::state::MemStateImpl;
use crate::providers::token::JwtTokenImpl;
use axum::Router;
use std::sync::Arc;

/// Wires a fresh store, token issuer and routes from `config`.
pub fn build_app(config: &Config) -> Router {
    let state_impl = Arc::new(if config.seed_wishes {
        MemStateImpl::with_documents(seed_wishes())
    } else {
        MemStateImpl::new()
    });
    let token_impl = Arc::new(JwtTokenImpl::new(&config.jwt_secret));

    let token_commander = Arc::new(TokenCommander::new(
        config.accounts.clone(),
        token_impl.clone(),
        config.access_token_expires_in,
    ));
    let wish_querier = Arc::new(WishQuerier::new(state_impl.clone()));
    let wish_commander = Arc::new(WishCommander::new(state_impl));

    wishes_route(
        token_impl,
        token_commander,
        wish_querier,
        wish_commander,
        config.auth_enabled,
    )
}
