//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::sync::Arc;

use reqwest::Url;
use roster_client::api::{ApiClient, AuthContext, Student};
use roster_client::storage::MemoryStorage;
use roster_client::store::SessionStore;
use serde_json::{json, Value};

use mock_backend::{MockBackend, MockResponse};

/// Client pointed at the mock, with its own empty auth slot.
pub fn client_for(mock: &MockBackend) -> ApiClient {
    let base = Url::parse(&mock.base_url()).expect("mock base url");
    ApiClient::new(base, AuthContext::new())
}

/// Session store over in-memory storage. The storage handle is returned
/// so tests can inspect what was persisted.
pub fn session_store(client: ApiClient) -> (SessionStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (SessionStore::new(client, storage.clone()), storage)
}

// -- Wire fixtures ------------------------------------------------------------

pub fn teacher_json(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{username}@school.edu"),
        "firstName": "Jane",
        "lastName": "Smith",
        "studentCount": 0,
        "students": []
    })
}

pub fn auth_json(token: &str) -> String {
    json!({ "token": token, "teacher": teacher_json("t-1", "jsmith") }).to_string()
}

pub fn student_json(id: &str) -> Value {
    json!({
        "id": id,
        "firstName": format!("First{id}"),
        "lastName": format!("Last{id}"),
        "email": format!("s{id}@school.edu"),
        "teacherId": "t-1"
    })
}

pub fn student(id: &str) -> Student {
    serde_json::from_value(student_json(id)).expect("student fixture")
}

/// One page of students with ids `first..first + count`.
pub fn students_page(first: usize, count: usize, total: u64, page: u32, size: u32) -> String {
    let items: Vec<Value> = (first..first + count)
        .map(|i| student_json(&i.to_string()))
        .collect();
    page_json(items, total, page, size)
}

pub fn page_json(items: Vec<Value>, total: u64, page: u32, size: u32) -> String {
    json!({
        "items": items,
        "totalCount": total,
        "currentPage": page,
        "pageSize": size,
        "totalPages": total.div_ceil(u64::from(size.max(1))),
    })
    .to_string()
}

/// Log in through the mock so later requests carry a bearer token.
pub async fn logged_in(mock: &MockBackend, client: &ApiClient, token: &str) -> SessionStore {
    mock.enqueue_response(MockResponse::json(&auth_json(token))).await;
    let (store, _) = session_store(client.clone());
    store
        .login(roster_client::api::LoginRequest {
            username: "jsmith".to_string(),
            password: "password1".to_string(),
        })
        .await
        .expect("login against mock");
    mock.clear().await;
    store
}
