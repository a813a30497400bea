//! Integration tests for `POST /api/users`

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use serde_json::{Value, json};
use user_service::entities::v1::users;
use user_service::requests::v1::user::UserStoreRequest;
use user_service::testing::setup;
use uuid::Uuid;

fn request(name: &str, email: &str, password: &str) -> UserStoreRequest {
    UserStoreRequest {
        id: None,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[actix_web::test]
async fn test_register_success() {
    let (service, db) = user_service::service!();

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(request("asa", "asa@gmail.com", "rahasia"))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Success" }));

    let user = users::Model::find_by_email(&db, "asa@gmail.com")
        .await
        .unwrap()
        .expect("User should be persisted");

    assert_eq!(user.name, "asa");
    assert_ne!(user.password, "rahasia", "Password must never be stored in plaintext");
    assert!(user.password.starts_with("$argon2id$"));
}

#[actix_web::test]
async fn test_register_with_client_supplied_id() {
    let (service, db) = user_service::service!();
    let id = Uuid::new_v4();

    let mut payload = request("asa", "asa@gmail.com", "rahasia");
    payload.id = Some(id.to_string());

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(&payload)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let user = users::Model::find_by_id(&db, id).await.unwrap();
    assert!(user.is_some(), "User should be stored under the supplied id");
}

#[actix_web::test]
async fn test_register_normalizes_email() {
    let (service, db) = user_service::service!();

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(request("asa", "  Asa@Gmail.COM ", "rahasia"))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let user = users::Model::find_by_email(&db, "asa@gmail.com").await.unwrap();
    assert!(user.is_some());
}

#[actix_web::test]
async fn test_register_duplicate_email() {
    let (service, db) = user_service::service!();
    let hasher = setup::password_hasher().unwrap();
    let existing = setup::create_test_user(&db, &hasher).await.unwrap();

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(request("other", &existing.email, "rahasia"))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Email already exists");
}

#[actix_web::test]
async fn test_register_duplicate_id() {
    let (service, db) = user_service::service!();
    let hasher = setup::password_hasher().unwrap();
    let existing = setup::create_test_user(&db, &hasher).await.unwrap();

    let mut payload = request("asa", "asa@gmail.com", "rahasia");
    payload.id = Some(existing.id.to_string());

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(&payload)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Id already exists");
}

#[actix_web::test]
async fn test_register_missing_fields() {
    let (service, _db) = user_service::service!();

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(json!({}))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Email field is required");
    assert_eq!(body["errors"]["name"][0], "Name field is required");
    assert_eq!(body["errors"]["email"][0], "Email field is required");
    assert_eq!(body["errors"]["password"][0], "Password field is required");
}

#[actix_web::test]
async fn test_register_invalid_fields() {
    let (service, _db) = user_service::service!();

    let mut payload = request("asa", "not-an-email", "abc");
    payload.id = Some("not-a-uuid".to_string());

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(&payload)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["errors"]["email"][0], "Email is invalid");
    assert_eq!(body["errors"]["id"][0], "Id must be a valid UUID");
    assert_eq!(
        body["errors"]["password"][0],
        "Password must be at least 6 characters long"
    );
    assert!(body["errors"].get("name").is_none());
}

#[actix_web::test]
async fn test_register_malformed_json() {
    let (service, _db) = user_service::service!();

    let req = TestRequest::post()
        .uri("/api/users")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"name\": \"asa\",")
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = read_body_json(resp).await;
    assert!(
        body["message"].as_str().unwrap().starts_with("Invalid JSON body"),
        "Unexpected message: {}",
        body["message"]
    );
    assert!(body.get("errors").is_none());
}

#[actix_web::test]
async fn test_register_wrong_content_type() {
    let (service, _db) = user_service::service!();

    let req = TestRequest::post()
        .uri("/api/users")
        .insert_header(("Content-Type", "text/plain"))
        .set_payload("name=asa")
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Content-Type must be application/json");
}
