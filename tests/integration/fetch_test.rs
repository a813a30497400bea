//! Integration tests for `GET /api/users`

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use chrono::Duration;
use serde_json::Value;
use user_service::entities::v1::tokens;
use user_service::helpers::now;
use user_service::responses::v1::user::UserResponse;
use user_service::security::token;
use user_service::testing::{instance, setup};
use uuid::Uuid;

#[actix_web::test]
async fn test_fetch_current_user() {
    let (service, db) = user_service::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_test_user(&db, &hasher).await.unwrap();
    let token = instance::token(&db, &user).await.unwrap();

    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: UserResponse = read_body_json(resp).await;
    assert_eq!(body.message, "Success");
    assert_eq!(body.data.id, user.id);
    assert_eq!(body.data.name, user.name);
    assert_eq!(body.data.email, user.email);
}

#[actix_web::test]
async fn test_fetch_never_exposes_password() {
    let (service, db) = user_service::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_test_user(&db, &hasher).await.unwrap();
    let token = instance::token(&db, &user).await.unwrap();

    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let body: Value = read_body_json(call_service(&service, req).await).await;

    assert!(body["data"].get("password").is_none());
    assert!(!body.to_string().contains(&user.password));
}

#[actix_web::test]
async fn test_fetch_without_token() {
    let (service, _db) = user_service::service!();

    let req = TestRequest::get().uri("/api/users").to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Missing authorization header");
}

#[actix_web::test]
async fn test_fetch_with_other_scheme() {
    let (service, _db) = user_service::service!();

    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", "Basic YXNhOnJhaGFzaWE="))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid authorization header");
}

#[actix_web::test]
async fn test_fetch_with_garbage_token() {
    let (service, _db) = user_service::service!();

    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", "Bearer salah"))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token");
}

#[actix_web::test]
async fn test_fetch_with_unknown_token() {
    let (service, _db) = user_service::service!();

    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("Bearer {}", token::encode(Uuid::new_v4()))))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token");
}

#[actix_web::test]
async fn test_fetch_with_expired_token() {
    let (service, db) = user_service::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_test_user(&db, &hasher).await.unwrap();

    let expired = tokens::Model {
        id: Uuid::new_v4(),
        user_id: user.id,
        expired_at: Some(now() - Duration::minutes(1)),
        created_at: now() - Duration::hours(2),
    }
    .store(&db)
    .await
    .unwrap();

    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("Bearer {}", token::encode(expired.id))))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Token expired");

    let found = tokens::Model::find_with_user(&db, expired.id).await.unwrap();
    assert!(found.is_none(), "Expired token should be deleted once rejected");

    // Presenting it again finds nothing
    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("Bearer {}", token::encode(expired.id))))
        .to_request();

    let body: Value = read_body_json(call_service(&service, req).await).await;
    assert_eq!(body["message"], "Invalid token");
}

#[actix_web::test]
async fn test_fetch_with_lowercase_scheme() {
    let (service, db) = user_service::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_test_user(&db, &hasher).await.unwrap();
    let token = instance::token(&db, &user).await.unwrap();

    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("bearer {}", token)))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_token_of_deleted_user_is_rejected() {
    use sea_orm::EntityTrait;
    use user_service::entities::v1::users;

    let (service, db) = user_service::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_test_user(&db, &hasher).await.unwrap();
    let token = instance::token(&db, &user).await.unwrap();

    users::Entity::delete_by_id(user.id).exec(&db).await.unwrap();

    let req = TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
