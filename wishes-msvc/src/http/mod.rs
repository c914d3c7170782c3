mod extractors;
mod into_responses;
mod middleware;

use crate::domain::token_commander::TokenCommander;
use crate::domain::token_commander::TokenCommanderError;
use crate::domain::token_model::CredentialsInput;
use crate::domain::token_model::Permission;
use crate::domain::token_model::TokenOutput;
use crate::domain::wish_commander::WishCommander;
use crate::domain::wish_commander::WishCommanderError;
use crate::domain::wish_model::CreateWishInput;
use crate::domain::wish_model::DeleteWishOutput;
use crate::domain::wish_model::ListWishesParams;
use crate::domain::wish_model::UpdateWishInput;
use crate::domain::wish_model::Wish;
use crate::domain::wish_model::WishPage;
use crate::domain::wish_querier::WishQuerier;
use crate::domain::wish_querier::WishQuerierError;
use crate::http::middleware::gate;
use crate::http::middleware::verify_bearer_token;
use crate::providers::token::JwtTokenImpl;
use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::Path;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::routing::MethodRouter;
use axum::Extension;
use axum::Json;
use axum::Router;
use log::debug;
use std::sync::Arc;

const READ: &[Permission] = &[Permission::Read];
const WRITE: &[Permission] = &[Permission::Write];
const DELETE: &[Permission] = &[Permission::Delete];

async fn hello() -> &'static str {
    "Hello, Backend!"
}

/// Unwraps a wish body. A request without a JSON content type reads as `{}`.
fn wish_body<T: Default>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, WishCommanderError> {
    match body {
        Ok(Json(input)) => Ok(input),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(WishCommanderError::InvalidInput(rejection.body_text())),
    }
}

async fn create_token(
    Extension(token_commander): Extension<Arc<TokenCommander>>,
    body: Result<Json<CredentialsInput>, JsonRejection>,
) -> Result<TokenOutput, TokenCommanderError> {
    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            debug!("unreadable credentials body: {}", rejection.body_text());
            return Err(TokenCommanderError::BadCredentials);
        }
    };

    token_commander.exchange_credentials_for_token(input)
}

async fn list_wishes(
    Extension(wish_querier): Extension<Arc<WishQuerier>>,
    params: Result<Query<ListWishesParams>, QueryRejection>,
) -> Result<WishPage, WishQuerierError> {
    let Query(params) =
        params.map_err(|rejection| WishQuerierError::InvalidQuery(rejection.body_text()))?;

    wish_querier.list_wishes(params.into()).await
}

async fn get_wish(
    Extension(wish_querier): Extension<Arc<WishQuerier>>,
    Path(id): Path<String>,
) -> Result<Wish, WishQuerierError> {
    wish_querier.get_wish_by_id(id).await
}

async fn create_wish(
    Extension(wish_commander): Extension<Arc<WishCommander>>,
    body: Result<Json<CreateWishInput>, JsonRejection>,
) -> Result<(StatusCode, Wish), WishCommanderError> {
    let wish = wish_commander.create_wish(wish_body(body)?).await?;

    Ok((StatusCode::CREATED, wish))
}

async fn update_wish(
    Extension(wish_commander): Extension<Arc<WishCommander>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateWishInput>, JsonRejection>,
) -> Result<Wish, WishCommanderError> {
    wish_commander.update_wish(id, wish_body(body)?).await
}

async fn delete_wish(
    Extension(wish_commander): Extension<Arc<WishCommander>>,
    Path(id): Path<String>,
) -> Result<DeleteWishOutput, WishCommanderError> {
    let id = wish_commander.delete_wish(id).await?;

    Ok(DeleteWishOutput {
        message: format!("Wish with id {} deleted", id),
    })
}

pub fn wishes_route(
    token_impl: Arc<JwtTokenImpl>,
    token_commander: Arc<TokenCommander>,
    wish_querier: Arc<WishQuerier>,
    wish_commander: Arc<WishCommander>,
    auth_enabled: bool,
) -> Router {
    let guard = |route: MethodRouter, required: &'static [Permission]| {
        if auth_enabled {
            gate(route, required)
        } else {
            route
        }
    };

    let mut wishes = Router::new()
        .route(
            "/api/wishes",
            guard(get(list_wishes), READ).merge(guard(post(create_wish), WRITE)),
        )
        .route(
            "/api/wishes/:id",
            guard(get(get_wish), READ)
                .merge(guard(put(update_wish), WRITE))
                .merge(guard(delete(delete_wish), DELETE)),
        );

    // Outer to the per-method gates, so claims are attached before any check.
    if auth_enabled {
        wishes = wishes.route_layer(axum::middleware::from_fn(verify_bearer_token));
    }

    Router::new()
        .route("/", get(hello))
        .route("/token", post(create_token))
        .route("/api/token", post(create_token))
        .merge(wishes)
        .layer(Extension(token_impl))
        .layer(Extension(token_commander))
        .layer(Extension(wish_querier))
        .layer(Extension(wish_commander))
}
