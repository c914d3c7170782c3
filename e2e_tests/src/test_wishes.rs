use crate::utils::call;
use crate::utils::login;
use crate::utils::spawn_app;
use crate::utils::test_config;
use futures::future::join_all;
use serde_json::json;
use std::collections::HashSet;

#[tokio::test]
async fn root_should_greet() {
    let base_url = spawn_app(test_config()).await;

    let res = hyper::Client::new()
        .get(base_url.parse().expect("valid url"))
        .await
        .expect("error in response");
    assert_eq!(res.status(), 200);

    let bytes = hyper::body::to_bytes(res.into_body())
        .await
        .expect("error reading body");
    assert_eq!(&bytes[..], b"Hello, Backend!");
}

#[tokio::test]
async fn list_should_search_and_paginate() {
    let base_url = spawn_app(test_config()).await;
    let token = login(&base_url, "visitor", "visitorpass").await;

    let (status, body) = call(
        "GET",
        format!("{}/api/wishes?searchTerm=TRIP", base_url),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["text"], "Trip to Japan");

    let (status, all) = call(
        "GET",
        format!("{}/api/wishes?limit=100", base_url),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);

    let (status, page) = call(
        "GET",
        format!("{}/api/wishes?limit=5&offset=2", base_url),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(page["limit"], 5);
    assert_eq!(page["offset"], 2);
    assert_eq!(page["total"], all["total"]);
    assert_eq!(
        page["data"].as_array().expect("data array")[..],
        all["data"].as_array().expect("data array")[2..7]
    );

    let (status, empty) = call(
        "GET",
        format!("{}/api/wishes?offset=500", base_url),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(empty["data"], json!([]));
}

#[tokio::test]
async fn list_should_default_bad_paging_and_400_on_negative() {
    let base_url = spawn_app(test_config()).await;
    let token = login(&base_url, "visitor", "visitorpass").await;

    let (status, body) = call(
        "GET",
        format!("{}/api/wishes?limit=lots&offset=none", base_url),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["offset"], 0);

    let (status, _) = call(
        "GET",
        format!("{}/api/wishes?offset=-2", base_url),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn create_should_400_without_text() {
    let base_url = spawn_app(test_config()).await;
    let token = login(&base_url, "writer", "writerpass").await;

    for body in [json!({}), json!({"text": ""}), json!({"liked": true})] {
        let (status, res) = call(
            "POST",
            format!("{}/api/wishes", base_url),
            Some(&token),
            Some(body),
        )
        .await;
        assert_eq!(status, 400);
        assert!(res["message"].is_string());
    }
}

#[tokio::test]
async fn update_should_merge_fields_and_keep_path_id() {
    let base_url = spawn_app(test_config()).await;
    let token = login(&base_url, "writer", "writerpass").await;

    let (status, created) = call(
        "POST",
        format!("{}/api/wishes", base_url),
        Some(&token),
        Some(json!({"text": "Learn to sail", "fulfilled": true})),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["liked"], false);
    assert_eq!(created["fulfilled"], true);

    let wish_url = format!("{}/api/wishes/{}", base_url, created["id"]);

    let (status, updated) = call(
        "PUT",
        wish_url.clone(),
        Some(&token),
        Some(json!({"id": 777, "liked": true})),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["text"], "Learn to sail");
    assert_eq!(updated["fulfilled"], true);
    assert_eq!(updated["liked"], true);

    let (status, fetched) = call("GET", wish_url, Some(&token), None).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, updated);

    let (status, _) = call(
        "PUT",
        format!("{}/api/wishes/424242", base_url),
        Some(&token),
        Some(json!({"liked": true})),
    )
    .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn delete_should_404_on_missing_wish() {
    let base_url = spawn_app(test_config()).await;
    let token = login(&base_url, "admin", "adminpass").await;

    let (status, _) = call(
        "DELETE",
        format!("{}/api/wishes/424242", base_url),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn concurrent_creates_should_get_unique_ids() {
    const OPERATIONS: usize = 50;

    let base_url = spawn_app(test_config()).await;
    let token = login(&base_url, "writer", "writerpass").await;

    let futures = (0..OPERATIONS).map(|i| {
        let url = format!("{}/api/wishes", base_url);
        let token = token.clone();
        async move {
            let (status, body) = call(
                "POST",
                url,
                Some(&token),
                Some(json!({ "text": format!("wish_{:0>4}", i) })),
            )
            .await;
            assert_eq!(status, 201);
            body["id"].as_u64().expect("expected numeric id")
        }
    });

    let ids: Vec<u64> = join_all(futures).await;
    let unique: HashSet<u64> = ids.iter().copied().collect();

    assert_eq!(unique.len(), OPERATIONS);
    assert!(ids.iter().all(|id| *id > 8));
}
