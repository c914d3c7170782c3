use crate::domain::token_commander::TokenCommanderError;
use crate::domain::token_model::TokenOutput;
use crate::domain::wish_commander::WishCommanderError;
use crate::domain::wish_model::DeleteWishOutput;
use crate::domain::wish_model::Wish;
use crate::domain::wish_model::WishPage;
use crate::domain::wish_querier::WishQuerierError;
use crate::http::middleware::AuthError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use log::error;
use serde_json::json;

fn message_response(status: StatusCode, message: &str) -> Response {
    let body = Json(json!({
        "message": message,
    }));

    (status, body).into_response()
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Access token is missing"),
            AuthError::InvalidOrExpired => {
                (StatusCode::FORBIDDEN, "Access token is invalid or expired")
            }
            AuthError::AccessDenied => {
                (StatusCode::FORBIDDEN, "Access denied: insufficient permissions")
            }
            AuthError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        message_response(status, message)
    }
}

impl IntoResponse for TokenCommanderError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            TokenCommanderError::BadCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            TokenCommanderError::TokenImplError(err) => {
                error!("could not issue token: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        message_response(status, message)
    }
}

impl IntoResponse for WishQuerierError {
    fn into_response(self) -> Response {
        match self {
            WishQuerierError::WishNotFound => {
                message_response(StatusCode::NOT_FOUND, "Wish not found")
            }
            WishQuerierError::InvalidPagination(_) | WishQuerierError::InvalidQuery(_) => {
                message_response(StatusCode::BAD_REQUEST, &self.to_string())
            }
        }
    }
}

impl IntoResponse for WishCommanderError {
    fn into_response(self) -> Response {
        match self {
            WishCommanderError::WishNotFound => {
                message_response(StatusCode::NOT_FOUND, "Wish not found")
            }
            WishCommanderError::MissingText => {
                message_response(StatusCode::BAD_REQUEST, "Wish text is required")
            }
            WishCommanderError::InvalidInput(_) => {
                message_response(StatusCode::BAD_REQUEST, &self.to_string())
            }
        }
    }
}

impl IntoResponse for Wish {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(json!(self))).into_response()
    }
}

impl IntoResponse for WishPage {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(json!(self))).into_response()
    }
}

impl IntoResponse for DeleteWishOutput {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(json!(self))).into_response()
    }
}

impl IntoResponse for TokenOutput {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(json!(self))).into_response()
    }
}
