use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeDelta, Utc};
use serde_json::json;

use pricebook_core::Item;

use crate::common::{
    body_bytes, body_json, json_request, raw_request, send, setup_test_app, setup_test_app_with,
};

fn two_items() -> Vec<Item> {
    vec![Item::new("1", "A", 100), Item::new("2", "B", 200)]
}

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app_with(two_items());

    let response = send(&app.router, Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["items"], 2);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = setup_test_app();

    let response = send(
        &app.router,
        Request::get("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["paths"]["/items/{id}"].is_object());
    assert!(json["paths"]["/login"].is_object());
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_empty_collection() {
    let app = setup_test_app();

    let response = send(&app.router, Request::get("/items").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_then_list() {
    let app = setup_test_app();

    let item = json!({"id": "a", "name": "Widget", "price": 10});
    let response = send(&app.router, json_request("POST", "/items", item.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, item);

    let response = send(&app.router, Request::get("/items").body(Body::empty()).unwrap()).await;
    assert_eq!(body_json(response).await, json!([item]));
}

#[tokio::test]
async fn create_without_id_appends_empty_id() {
    let app = setup_test_app();

    let response = send(
        &app.router,
        json_request("POST", "/items", json!({"name": "Nameless", "price": 1})),
    )
    .await;
    assert_eq!(
        body_json(response).await,
        json!({"id": "", "name": "Nameless", "price": 1})
    );
    assert_eq!(app.state.items.list(), vec![Item::new("", "Nameless", 1)]);
}

#[tokio::test]
async fn create_with_malformed_body_appends_zero_item() {
    let app = setup_test_app();

    let response = send(&app.router, raw_request("POST", "/items", "{oops")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": "", "name": "", "price": 0})
    );
    assert_eq!(app.state.items.list(), vec![Item::default()]);
}

#[tokio::test]
async fn get_existing_and_missing_item() {
    let app = setup_test_app_with(two_items());

    let response = send(&app.router, Request::get("/items/2").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": "2", "name": "B", "price": 200})
    );

    let response = send(
        &app.router,
        Request::get("/items/missing").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": "", "name": "", "price": 0})
    );
}

#[tokio::test]
async fn update_moves_item_to_end_and_forces_id() {
    let app = setup_test_app_with(two_items());

    let response = send(
        &app.router,
        json_request("PUT", "/items/1", json!({"id": "other", "name": "C", "price": 300})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": "1", "name": "C", "price": 300})
    );

    let response = send(&app.router, Request::get("/items").body(Body::empty()).unwrap()).await;
    assert_eq!(
        body_json(response).await,
        json!([
            {"id": "2", "name": "B", "price": 200},
            {"id": "1", "name": "C", "price": 300},
        ])
    );
}

#[tokio::test]
async fn update_missing_returns_full_collection() {
    let app = setup_test_app_with(two_items());

    let response = send(
        &app.router,
        json_request("PUT", "/items/9", json!({"name": "Z", "price": 1})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {"id": "1", "name": "A", "price": 100},
            {"id": "2", "name": "B", "price": 200},
        ])
    );
    assert_eq!(app.state.items.list(), two_items());
}

#[tokio::test]
async fn delete_returns_remaining_items() {
    let app = setup_test_app_with(vec![
        Item::new("dup", "First", 1),
        Item::new("dup", "Second", 2),
    ]);

    let response = send(
        &app.router,
        Request::delete("/items/dup").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"id": "dup", "name": "Second", "price": 2}])
    );

    let response = send(
        &app.router,
        Request::delete("/items/missing").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(
        body_json(response).await,
        json!([{"id": "dup", "name": "Second", "price": 2}])
    );
}

#[tokio::test]
async fn concurrent_creates_are_all_kept() {
    const REQUESTS: usize = 50;
    let app = setup_test_app();

    let tasks: Vec<_> = (0..REQUESTS)
        .map(|i| {
            let router = app.router.clone();
            tokio::spawn(async move {
                let body = json!({"id": i.to_string(), "name": "bulk", "price": i});
                send(&router, json_request("POST", "/items", body)).await.status()
            })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    assert_eq!(app.state.items.len(), REQUESTS);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_with_valid_credentials_returns_token() {
    let app = setup_test_app();
    let before = Utc::now();

    let response = send(
        &app.router,
        json_request("POST", "/login", json!({"username": "user", "password": "password"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let token = String::from_utf8(body_bytes(response).await).unwrap();
    let claims = app.state.tokens.verify(&token).unwrap();
    let expires_at = claims.expires_at().unwrap();
    assert!(expires_at >= before + TimeDelta::seconds(299));
    assert!(expires_at <= Utc::now() + TimeDelta::seconds(301));
}

#[tokio::test]
async fn login_with_wrong_credentials_returns_empty_401() {
    let app = setup_test_app();

    for body in [
        json!({"username": "user", "password": "wrong"}),
        json!({"username": "USER", "password": "password"}),
        json!({}),
    ] {
        let response = send(&app.router, json_request("POST", "/login", body)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn login_with_malformed_body_returns_401() {
    let app = setup_test_app();

    let response = send(&app.router, raw_request("POST", "/login", "not json")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn item_routes_need_no_token() {
    let app = setup_test_app_with(two_items());

    let response = send(
        &app.router,
        Request::get("/items")
            .header("authorization", "Bearer garbage")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
