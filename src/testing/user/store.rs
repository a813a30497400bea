use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use sea_orm::EntityTrait;
use serde_json::Value;
use uuid::Uuid;

use crate::entities::v1::users;

const ID: &str = "0658b09c-6fbf-4eff-8aea-3243f837b09a";

fn register_body() -> String {
    format!(
        r#"{{"id": "{}", "password": "rahasia", "name": "asa", "email": "asa@gmail.com"}}"#,
        ID
    )
}

#[actix_web::test]
async fn store() {
    let (service, db) = crate::service!();
    let request = TestRequest::post()
        .uri("/api/users")
        .insert_header(("Content-Type", "application/json"))
        .insert_header(("Accept", "application/json"))
        .set_payload(register_body())
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = read_body_json(response).await;
    assert_eq!(body["message"], "Success");

    let model = users::Entity::find_by_id(Uuid::parse_str(ID).unwrap())
        .one(&db)
        .await
        .unwrap()
        .expect("user should be persisted");

    assert_eq!(model.name, "asa");
    assert_eq!(model.email, "asa@gmail.com");
    assert!(model.password.starts_with("$argon2id$"));
}

#[actix_web::test]
async fn store_duplicate_email() {
    let (service, _db) = crate::service!();

    let first = TestRequest::post()
        .uri("/api/users")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(register_body())
        .to_request();
    assert_eq!(call_service(&service, first).await.status(), StatusCode::CREATED);

    let second = TestRequest::post()
        .uri("/api/users")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"password": "rahasia", "name": "asa", "email": "ASA@gmail.com "}"#)
        .to_request();

    let response = call_service(&service, second).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = read_body_json(response).await;
    assert_eq!(body["message"], "Email already exists");
}
