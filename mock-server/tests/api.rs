use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, QuestionBank, StoredOption, StoredQuestion};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(http::header::ACCEPT, "application/json")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(String::new())
        .unwrap()
}

// --- questions ---

#[tokio::test]
async fn questions_returns_envelope_for_known_pair() {
    let resp = app().oneshot(get("/api/questions/chemistry/ss2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["subject"], "chemistry");
    assert_eq!(body["class_level"], "SS2");
    assert!(body["year"].is_null());
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["options"][1]["answer"], true);
}

#[tokio::test]
async fn questions_filters_by_year() {
    let resp = app()
        .oneshot(get("/api/questions/chemistry/ss2?year=2012"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["year"], "2012");
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["year"], "2012");
}

#[tokio::test]
async fn questions_accepts_upper_case_class_level() {
    let resp = app().oneshot(get("/api/questions/physics/SS3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["class_level"], "SS3");
}

#[tokio::test]
async fn questions_known_subject_without_bank_entries_is_empty_success() {
    let resp = app().oneshot(get("/api/questions/biology/ss2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn questions_invalid_class_level_returns_400() {
    let resp = app().oneshot(get("/api/questions/chemistry/ss1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid class level. Must be SS2 or SS3");
}

#[tokio::test]
async fn questions_invalid_subject_returns_400() {
    let resp = app().oneshot(get("/api/questions/alchemy/ss2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid subject. Available subjects: chemistry, physics"));
}

#[tokio::test]
async fn questions_served_from_custom_bank() {
    let mut bank = QuestionBank::new();
    bank.insert(
        "physics",
        "ss2",
        StoredQuestion {
            id: 99,
            question: "Custom?".to_string(),
            options: vec![StoredOption {
                option: "Yes".to_string(),
                answer: true,
            }],
            year: "1999".to_string(),
            examtype: "waec".to_string(),
        },
    );
    let resp = app_with(bank)
        .oneshot(get("/api/questions/physics/ss2"))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["data"][0]["id"], 99);
    assert_eq!(body["data"][0]["examtype"], "waec");
}

// --- subjects ---

#[tokio::test]
async fn subjects_lists_table_and_class_levels() {
    let resp = app().oneshot(get("/api/subjects")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["subjects"]["english"], "English Language");
    assert_eq!(body["subjects"].as_object().unwrap().len(), 12);
    assert_eq!(body["class_levels"], serde_json::json!(["SS2", "SS3"]));
}

// --- test-api ---

#[tokio::test]
async fn test_api_reports_bank_size() {
    let resp = app().oneshot(get("/api/test-api")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "API connection test");
    assert_eq!(body["result"]["questions"], 5);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get("/questions/chemistry/ss2")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
