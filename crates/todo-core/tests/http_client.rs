//! HTTP client against a mock Todo backend.

use std::cell::RefCell;

use serde_json::json;
use todo_core::client::RemoteResource;
use todo_core::domain::{
    Credentials, Profile, Session, SignUpRequest, Todo, TodoInput, TodoStatus, User, UserInput,
    UserType,
};
use todo_core::{
    sign_out_remote, ApiClient, ApiError, AuthGate, KeyValueStorage, MemoryStorage, SessionStore,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials {
        email: "ann@example.com".into(),
        password: "secret1".into(),
    }
}

#[tokio::test]
async fn test_login_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "ann@example.com", "password": "secret1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "token": "tok-1",
                "user": {"_id": "u1", "name": "Ann", "email": "ann@example.com",
                         "username": "ann", "userType": "admin"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let session = api.login(&credentials()).await.expect("login failed");

    assert_eq!(session.token, "tok-1");
    assert_eq!(session.user.name, "Ann");
    assert!(session.is_admin());
}

#[tokio::test]
async fn test_login_rejected_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let err = api.login(&credentials()).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Server {
            status: 401,
            message: Some("Invalid credentials".into())
        }
    );
    assert_eq!(err.user_message("An error occurred"), "Invalid credentials");
}

#[tokio::test]
async fn test_login_without_token_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"user": {}}})))
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let err = api.login(&credentials()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_signup_success_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let request = SignUpRequest {
        name: "Ann".into(),
        username: "ann".into(),
        email: "ann@example.com".into(),
        password: "secret1".into(),
    };
    api.signup(&request).await.expect("signup failed");
}

#[tokio::test]
async fn test_signup_not_acknowledged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "message": "Email already exists"})),
        )
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let request = SignUpRequest {
        name: "Ann".into(),
        username: "ann".into(),
        email: "ann@example.com".into(),
        password: "secret1".into(),
    };
    let err = api.signup(&request).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Email already exists"));
}

#[tokio::test]
async fn test_signout_sends_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signout"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    api.signout("tok-1").await.expect("signout failed");
    assert_eq!(api.signout("  ").await, Err(ApiError::Auth));
}

fn signed_in_gate(storage: &MemoryStorage) -> RefCell<AuthGate<MemoryStorage>> {
    let mut gate = AuthGate::new(SessionStore::new(storage.clone()));
    gate.sign_in(Session::new("tok-1", Profile::default()));
    RefCell::new(gate)
}

#[tokio::test]
async fn test_failed_signout_still_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let gate = signed_in_gate(&storage);
    assert!(!storage.is_empty());

    let api = ApiClient::with_base_url(server.uri());
    let token = gate.borrow().token().map(str::to_string);
    let result = sign_out_remote(&api, token.as_deref(), || {
        gate.borrow_mut().sign_out();
    })
    .await;

    assert!(matches!(result, Err(ApiError::Server { status: 500, .. })));
    assert!(!gate.borrow().is_authenticated());
    assert!(storage.is_empty());
    assert_eq!(storage.get("userData"), None);
}

#[tokio::test]
async fn test_signout_without_token_skips_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let gate = signed_in_gate(&storage);
    let api = ApiClient::with_base_url(server.uri());

    let result = sign_out_remote(&api, None, || {
        gate.borrow_mut().sign_out();
    })
    .await;

    assert_eq!(result, Err(ApiError::Auth));
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_login_body_is_what_gets_stored() {
    let body = json!({
        "success": true,
        "message": "Login ok",
        "data": {
            "token": "tok-1",
            "user": {"id": "u1", "name": "Ann", "email": "ann@example.com",
                     "username": "ann", "userType": "user", "createdAt": "2024-05-01"}
        }
    });
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let session = api.login(&credentials()).await.expect("login failed");
    let storage = MemoryStorage::new();
    AuthGate::new(SessionStore::new(storage.clone())).sign_in(session);

    let stored: serde_json::Value =
        serde_json::from_str(&storage.get("userData").expect("nothing stored")).unwrap();
    assert_eq!(stored, body);
}

#[tokio::test]
async fn test_list_todos_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todo/list"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"_id": "t1", "title": "Buy milk", "description": "2% milk", "status": "active",
                 "user": {"_id": "u1", "name": "Ann", "email": "ann@example.com"}},
                {"_id": "t2", "title": "Ship", "description": "release", "status": "completed"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let todos = api.resource::<Todo>(Some("tok-1".into()));
    let items = todos.list().await.expect("list failed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "t1");
    assert_eq!(items[0].owner_name(), "Ann");
    assert_eq!(items[1].status, TodoStatus::Completed);
    assert!(items[1].owner.is_none());
}

#[tokio::test]
async fn test_list_missing_data_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let users = api.resource::<User>(Some("tok-1".into()));
    assert!(users.list().await.expect("list failed").is_empty());
}

#[tokio::test]
async fn test_missing_token_never_hits_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todo/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(0)
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let todos = api.resource::<Todo>(None);
    assert_eq!(todos.list().await, Err(ApiError::Auth));
    let input = TodoInput {
        title: "a".into(),
        description: "b".into(),
        status: TodoStatus::Active,
    };
    assert_eq!(todos.create(&input).await, Err(ApiError::Auth));
}

#[tokio::test]
async fn test_create_todo_posts_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todo/create"))
        .and(header("authorization", "Bearer tok-1"))
        .and(body_json(json!({"title": "Buy milk", "description": "2% milk", "status": "active"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let todos = api.resource::<Todo>(Some("tok-1".into()));
    let input = TodoInput {
        title: "Buy milk".into(),
        description: "2% milk".into(),
        status: TodoStatus::Active,
    };
    todos.create(&input).await.expect("create failed");
}

#[tokio::test]
async fn test_update_user_omits_password() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/user/update/u%201"))
        .and(body_json(json!({
            "name": "Ann", "email": "ann@example.com", "username": "ann", "userType": "user"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let users = api.resource::<User>(Some("tok-1".into()));
    let input = UserInput {
        name: "Ann".into(),
        email: "ann@example.com".into(),
        username: "ann".into(),
        user_type: UserType::User,
        password: None,
    };
    users.update("u 1", &input).await.expect("update failed");
}

#[tokio::test]
async fn test_delete_error_field_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todo/delete/t9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Todo not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let todos = api.resource::<Todo>(Some("tok-1".into()));
    let err = todos.delete("t9").await.unwrap_err();

    assert_eq!(err.server_message(), Some("Todo not found"));
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todo/list"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let todos = api.resource::<Todo>(Some("stale".into()));
    let err = todos.list().await.unwrap_err();

    assert_eq!(err, ApiError::Server { status: 401, message: None });
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todo/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = ApiClient::with_base_url(server.uri());
    let todos = api.resource::<Todo>(Some("tok-1".into()));
    assert!(matches!(todos.list().await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let api = ApiClient::with_base_url("http://127.0.0.1:1");
    let todos = api.resource::<Todo>(Some("tok-1".into()));
    assert!(matches!(todos.list().await, Err(ApiError::Network(_))));
}
