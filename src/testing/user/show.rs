use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use serde_json::Value;

use crate::testing::instance::token;
use crate::testing::setup;

#[actix_web::test]
async fn show() {
    let (service, db) = crate::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_test_user(&db, &hasher).await.unwrap();

    let request = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("Bearer {}", token(&db, &user).await.unwrap())))
        .insert_header(("Accept", "application/json"))
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = read_body_json(response).await;
    assert_eq!(body["message"], "Success");
    assert_eq!(body["data"]["id"], user.id.to_string());
    assert_eq!(body["data"]["email"], user.email);
    assert!(body["data"].get("password").is_none());
}

#[actix_web::test]
async fn show_without_token() {
    let (service, _db) = crate::service!();

    let request = TestRequest::get().uri("/api/users").to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(response).await;
    assert_eq!(body["message"], "Missing authorization header");
}
