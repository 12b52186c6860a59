#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use crate::state::session::{MemoryTokenStore, Session};
use chrono::NaiveDate;
use serde_json::json;

fn vacation_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "collaborator_id": 1,
        "start_date": "2025-01-10",
        "end_date": "2025-01-12",
        "vacation_type": "vacaciones",
        "status": "pendiente",
        "reason": "rest",
        "vacation_days": 3,
        "collaborator": { "name": name }
    })
}

fn payload() -> VacationPayload {
    VacationPayload {
        collaborator_id: 1,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
        vacation_type: VacationType::Vacation,
        status: VacationStatus::Pending,
        reason: "rest".into(),
    }
}

fn signed_in_client(server: &MockServer) -> ApiClient {
    let session = Session::new(MemoryTokenStore::with_token("tok-123"));
    ApiClient::new_with_base_url(server.url(""), session)
}

#[tokio::test]
async fn sign_in_posts_nested_credentials_and_stores_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/users/sign_in");
        then.status(200)
            .json_body(json!({ "status": { "code": 200, "token": "jwt-abc" } }));
    });
    let session = Session::in_memory();
    let api = ApiClient::new_with_base_url(server.url("/"), session.clone());

    let token = api.sign_in("a@b.com", "secret").await.unwrap();

    assert_eq!(token, "jwt-abc");
    assert_eq!(session.token().as_deref(), Some("jwt-abc"));
    let hits = server.hits(POST, "/users/sign_in");
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].body,
        Some(json!({ "user": { "email": "a@b.com", "password": "secret" } }))
    );
    assert!(hits[0].authorization.is_none());
}

#[tokio::test]
async fn sign_in_without_token_fails_and_keeps_session_empty() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/users/sign_in");
        then.status(200).json_body(json!({ "status": { "code": 200 } }));
    });
    let session = Session::in_memory();
    let api = ApiClient::new_with_base_url(server.url(""), session.clone());

    let err = api.sign_in("a@b.com", "secret").await.unwrap_err();
    assert_eq!(err.error, "Login failed");
    assert!(err.is_login_failed());
    assert!(!err.is_unauthorized());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn sign_in_surfaces_backend_error_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/users/sign_in");
        then.status(401)
            .json_body(json!({ "error": "Invalid Email or password." }));
    });
    let api = ApiClient::new_with_base_url(server.url(""), Session::in_memory());

    let err = api.sign_in("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(err.error, "Invalid Email or password.");
}

#[tokio::test]
async fn vacation_endpoints_send_bearer_token_and_expected_shapes() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/vacations");
        then.status(200).json_body(json!({
            "vacations": [vacation_json(1, "Ana"), vacation_json(2, "Luis")],
            "meta": { "total_count": 2 }
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/vacations");
        then.status(201).json_body(vacation_json(3, "Ana"));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/v1/vacations/3");
        then.status(200).json_body(vacation_json(3, "Ana"));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/vacations/3");
        then.status(204);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/collaborators");
        then.status(200)
            .json_body(json!([{ "id": 1, "name": "Ana" }, { "id": 2, "name": "Luis" }]));
    });
    let api = signed_in_client(&server);

    let list = api
        .list_vacations(&[("page".into(), "1".into()), ("per_page".into(), "10".into())])
        .await
        .unwrap();
    assert_eq!(list.vacations.len(), 2);
    assert_eq!(list.vacations[1].collaborator_name(), "Luis");

    api.create_vacation(payload()).await.unwrap();
    api.update_vacation(3, payload()).await.unwrap();
    api.delete_vacation(3).await.unwrap();
    let collaborators = api.list_collaborators().await.unwrap();
    assert_eq!(collaborators[0].name, "Ana");

    let received = server.received();
    assert_eq!(received.len(), 5);
    assert!(received
        .iter()
        .all(|request| request.authorization.as_deref() == Some("Bearer tok-123")));
    assert_eq!(received[0].query_value("per_page"), Some("10"));
    let create_body = received[1].body.clone().unwrap();
    assert_eq!(create_body["vacation"]["vacation_type"], json!("vacaciones"));
    assert!(create_body["vacation"].get("id").is_none());
}

#[tokio::test]
async fn authorized_request_without_token_never_reaches_backend() {
    let server = MockServer::start_async().await;
    let api = ApiClient::new_with_base_url(server.url(""), Session::in_memory());

    let err = api.list_collaborators().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/vacations");
        then.status(401)
            .json_body(json!({ "error": "Signature has expired" }));
    });
    let api = signed_in_client(&server);

    let err = api.list_vacations(&[]).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.error, "Signature has expired");
    assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn server_errors_map_to_api_errors() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/vacations/42");
        then.status(500).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/vacations");
        then.status(422)
            .json_body(json!({ "errors": { "end_date": ["must be after start"] } }));
    });
    let api = signed_in_client(&server);

    let err = api.delete_vacation(42).await.unwrap_err();
    assert_eq!(err.code, "HTTP_500");

    let err = api.create_vacation(payload()).await.unwrap_err();
    assert_eq!(err.code, "HTTP_422");
    assert!(err.details.is_some());
    assert!(api.session().is_authenticated());
}
