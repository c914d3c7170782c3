use crate::utils::call;
use crate::utils::login;
use crate::utils::spawn_app;
use crate::utils::test_config;
use crate::utils::TEST_SECRET;
use jwt_simple::prelude::Claims;
use jwt_simple::prelude::Clock;
use jwt_simple::prelude::Duration;
use jwt_simple::prelude::HS256Key;
use jwt_simple::prelude::MACLike;
use serde_json::json;
use serde_json::Value;
use wishes_msvc::config::Config;

fn admin_claims() -> Value {
    json!({
        "username": "admin",
        "role": "ADMIN",
        "permissions": ["READ", "WRITE", "DELETE"],
    })
}

fn sign_with(secret: &str, expires_in_past: bool) -> String {
    let mut claims = Claims::with_custom_claims(admin_claims(), Duration::from_secs(60));
    if expires_in_past {
        let past = Clock::now_since_epoch() - Duration::from_secs(600);
        claims.issued_at = Some(past);
        claims.invalid_before = Some(past);
        claims.expires_at = Some(past + Duration::from_secs(60));
    }

    HS256Key::from_bytes(secret.as_bytes())
        .authenticate(claims)
        .expect("signing should succeed")
}

#[tokio::test]
async fn token_should_be_issued_for_known_accounts() {
    let base_url = spawn_app(test_config()).await;

    for path in ["/token", "/api/token"] {
        let (status, body) = call(
            "POST",
            format!("{}{}", base_url, path),
            None,
            Some(json!({"username": "admin", "password": "adminpass"})),
        )
        .await;

        assert_eq!(status, 200);
        assert!(body["token"].is_string());
        assert!(body["expires_at"].is_string());
    }
}

#[tokio::test]
async fn token_should_401_on_bad_credentials() {
    let base_url = spawn_app(test_config()).await;

    let (status, body) = call(
        "POST",
        format!("{}/token", base_url),
        None,
        Some(json!({"username": "admin", "password": "letmein"})),
    )
    .await;

    assert_eq!(status, 401);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn token_should_401_on_incomplete_credentials() {
    let base_url = spawn_app(test_config()).await;

    let (status, body) = call(
        "POST",
        format!("{}/token", base_url),
        None,
        Some(json!({"username": "admin"})),
    )
    .await;

    assert_eq!(status, 401);
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn wishes_should_401_without_token() {
    let base_url = spawn_app(test_config()).await;

    let (status, body) = call("GET", format!("{}/api/wishes", base_url), None, None).await;

    assert_eq!(status, 401);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn wishes_should_403_with_expired_token() {
    let base_url = spawn_app(test_config()).await;
    let token = sign_with(TEST_SECRET, true);

    let (status, _) = call("GET", format!("{}/api/wishes", base_url), Some(&token), None).await;

    assert_eq!(status, 403);
}

#[tokio::test]
async fn wishes_should_403_with_token_from_other_secret() {
    let base_url = spawn_app(test_config()).await;
    let token = sign_with("some-other-secret", false);

    let (status, _) = call("GET", format!("{}/api/wishes", base_url), Some(&token), None).await;

    assert_eq!(status, 403);
}

#[tokio::test]
async fn permissions_should_follow_role_table() {
    let base_url = spawn_app(test_config()).await;
    let visitor = login(&base_url, "visitor", "visitorpass").await;
    let writer = login(&base_url, "writer", "writerpass").await;
    let admin = login(&base_url, "admin", "adminpass").await;

    let (status, _) = call(
        "POST",
        format!("{}/api/wishes", base_url),
        Some(&visitor),
        Some(json!({"text": "Visitors cannot write"})),
    )
    .await;
    assert_eq!(status, 403);

    let (status, created) = call(
        "POST",
        format!("{}/api/wishes", base_url),
        Some(&writer),
        Some(json!({"text": "Writers can write"})),
    )
    .await;
    assert_eq!(status, 201);

    let wish_url = format!("{}/api/wishes/{}", base_url, created["id"]);

    let (status, _) = call("DELETE", wish_url.clone(), Some(&writer), None).await;
    assert_eq!(status, 403);

    let (status, body) = call("DELETE", wish_url.clone(), Some(&admin), None).await;
    assert_eq!(status, 200);
    assert!(body["message"].is_string());

    let (status, _) = call("GET", wish_url, Some(&visitor), None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn auth_disabled_should_serve_wishes_openly() {
    let base_url = spawn_app(Config {
        auth_enabled: false,
        ..test_config()
    })
    .await;

    let (status, body) = call("GET", format!("{}/api/wishes", base_url), None, None).await;

    assert_eq!(status, 200);
    assert_eq!(body["total"], 8);
}
