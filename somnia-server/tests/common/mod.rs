//! Shared helpers for server integration tests

use axum_test::TestServer;
use serde_json::{Value, json};
use somnia_server::{AppState, create_router};

/// A router over a fresh in-memory store with the default question catalog
pub fn test_server() -> TestServer {
    let state = AppState::in_memory(b"integration-test-secret").unwrap();
    somnia_core::seed::seed_catalog(state.store.as_ref()).unwrap();
    TestServer::new(create_router(state)).unwrap()
}

/// Register a user and return a bearer token for them
pub async fn signup_and_login(server: &TestServer, nickname: &str) -> String {
    let credentials = json!({ "nickname": nickname, "password": "hunter2" });

    server
        .post("/api/auth/signup")
        .json(&credentials)
        .await
        .assert_status_ok();

    let response = server.post("/api/auth/login").json(&credentials).await;
    response.assert_status_ok();
    response.json::<Value>()["token"].as_str().unwrap().to_string()
}

/// Question ids keyed by ordinal, from the catalog endpoint
pub async fn question_ids(server: &TestServer, token: &str) -> Vec<String> {
    let response = server
        .get("/api/questions")
        .authorization_bearer(token)
        .await;
    response.assert_status_ok();

    response.json::<Vec<Value>>()
        .iter()
        .map(|q| q["id"].as_str().unwrap().to_string())
        .collect()
}

/// Start an assessment and return its id
pub async fn start_assessment(server: &TestServer, token: &str) -> String {
    let response = server
        .post("/api/assessment/start")
        .authorization_bearer(token)
        .await;
    response.assert_status_ok();
    response.json::<Value>()["assessmentId"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Submit one answer
pub async fn submit_answer(
    server: &TestServer,
    token: &str,
    assessment_id: &str,
    question_id: &str,
    answer: &str,
) {
    server
        .post("/api/assessment/answer")
        .authorization_bearer(token)
        .json(&json!({
            "assessmentId": assessment_id,
            "questionId": question_id,
            "answer": answer,
        }))
        .await
        .assert_status_ok();
}
