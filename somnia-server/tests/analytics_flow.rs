//! Analytics aggregation endpoints

mod common;

use serde_json::{Value, json};

async fn complete_run(server: &axum_test::TestServer, token: &str, answers: [&str; 3]) {
    let questions = common::question_ids(server, token).await;
    let assessment_id = common::start_assessment(server, token).await;
    for (question_id, answer) in questions.iter().zip(answers) {
        common::submit_answer(server, token, &assessment_id, question_id, answer).await;
    }
    server
        .post("/api/assessment/complete")
        .authorization_bearer(token)
        .json(&json!({ "assessmentId": assessment_id }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn user_trends_averages_over_all_runs() {
    let server = common::test_server();
    let token = common::signup_and_login(&server, "ada").await;

    complete_run(&server, &token, ["23:00", "07:00", "7"]).await; // 88
    complete_run(&server, &token, ["22:30", "06:30", "8"]).await; // 100
    // A started but unscored run counts as zero.
    common::start_assessment(&server, &token).await;

    let response = server
        .get("/api/analytics/user-trends")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["totalAssessments"], 3);
    let average = body["averageScore"].as_f64().unwrap();
    assert!((average - (188.0 / 3.0)).abs() < 1e-9, "got {average}");
}

#[tokio::test]
async fn user_trends_is_zero_for_a_fresh_user() {
    let server = common::test_server();
    let token = common::signup_and_login(&server, "ada").await;

    let response = server
        .get("/api/analytics/user-trends")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["totalAssessments"], 0);
    assert_eq!(body["averageScore"], 0.0);
}

#[tokio::test]
async fn common_answers_ranks_by_frequency() {
    let server = common::test_server();
    let token = common::signup_and_login(&server, "ada").await;
    let questions = common::question_ids(&server, &token).await;

    for _ in 0..2 {
        let assessment_id = common::start_assessment(&server, &token).await;
        common::submit_answer(&server, &token, &assessment_id, &questions[0], "23:00").await;
    }
    let assessment_id = common::start_assessment(&server, &token).await;
    common::submit_answer(&server, &token, &assessment_id, &questions[0], "22:00").await;

    let response = server
        .get("/api/analytics/common-answers")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();

    let ranking = response.json::<Vec<Value>>();
    assert_eq!(ranking[0]["answer"], "23:00");
    assert_eq!(ranking[0]["count"], 2);
    assert_eq!(ranking[1]["answer"], "22:00");
    assert_eq!(ranking[1]["count"], 1);
}
