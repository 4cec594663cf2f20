//! 端到端测试：内存 SQLite + 完整 Router

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

use crate::infrastructure::http::{build_router, AppState};
use crate::infrastructure::persistence::sqlite::{
    test_pool, SqliteCategoryRepository, SqliteQuestionRepository,
};

async fn app() -> Router {
    let pool = test_pool().await;
    let state = AppState::new(
        Arc::new(SqliteQuestionRepository::new(pool.clone())),
        Arc::new(SqliteCategoryRepository::new(pool)),
    );
    build_router(Arc::new(state))
}

async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, text) = send_raw(app, method, uri, body).await;
    (status, serde_json::from_str(&text).unwrap())
}

async fn create(app: &Router, question: &str, category: i64) -> Value {
    let (status, data) = send(
        app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": question,
            "answer": "answer",
            "category": category.to_string(),
            "difficulty": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", data);
    data
}

fn assert_error(data: &Value, code: u16, message: &str) {
    assert_eq!(data["success"], false);
    assert_eq!(data["error"], code);
    assert_eq!(data["message"], message);
}

// ============================================================================
// /categories
// ============================================================================

#[tokio::test]
async fn test_categories_sorted_by_type() {
    let app = app().await;

    let (status, text) = send_raw(&app, Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::OK);

    let data: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(data["success"], true);
    assert_eq!(data["categories"].as_object().unwrap().len(), 6);
    assert_eq!(data["categories"]["1"], "Science");

    let positions: Vec<usize> = ["Art", "Entertainment", "Geography", "History", "Science", "Sports"]
        .iter()
        .map(|kind| text.find(&format!("\"{}\"", kind)).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[tokio::test]
async fn test_category_questions() {
    let app = app().await;
    create(&app, "Which planet is largest?", 1).await;
    create(&app, "Who painted the Mona Lisa?", 2).await;

    let (status, data) = send(&app, Method::GET, "/categories/1/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["total_questions"], 1);
    assert_eq!(data["questions"][0]["category"], 1);
    assert_eq!(data["current_category"], Value::Null);

    let (status, data) = send(&app, Method::GET, "/categories/1000/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "not_found");
}

// ============================================================================
// /questions
// ============================================================================

#[tokio::test]
async fn test_list_questions_empty_store_is_404() {
    let app = app().await;

    let (status, data) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "not_found");
}

#[tokio::test]
async fn test_list_questions_pagination() {
    let app = app().await;
    for i in 0..23 {
        create(&app, &format!("Question {}", i), 1 + i % 6).await;
    }

    let (status, data) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["questions"].as_array().unwrap().len(), 10);
    assert_eq!(data["total_questions"], 23);
    assert_eq!(data["categories"].as_object().unwrap().len(), 6);
    assert_eq!(data["current_category"], Value::Null);

    let (_, data) = send(&app, Method::GET, "/questions?page=3", None).await;
    assert_eq!(data["questions"].as_array().unwrap().len(), 3);

    let (status, data) = send(&app, Method::GET, "/questions?page=4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(data["questions"].as_array().unwrap().is_empty());
    assert_eq!(data["total_questions"], 23);

    let (status, data) = send(&app, Method::GET, "/questions?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&data, 400, "Bad Request");

    let (_, first) = send(&app, Method::GET, "/questions", None).await;
    for uri in ["/questions?page=abc", "/questions?page=", "/questions?page=1.5"] {
        let (status, data) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(data["questions"], first["questions"], "{}", uri);
    }
}

#[tokio::test]
async fn test_huge_page_is_empty_not_error() {
    let app = app().await;
    create(&app, "Only question", 1).await;

    for uri in [
        "/questions?page=5000000000",
        "/questions?page=9223372036854775807",
        "/questions?page=123456789012345678901234567890",
    ] {
        let (status, data) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(data["questions"].as_array().unwrap().is_empty(), "{}", uri);
        assert_eq!(data["total_questions"], 1);
    }
}

#[tokio::test]
async fn test_create_question_round_trip() {
    let app = app().await;
    create(&app, "Who discovered penicillin?", 1).await;

    let text = "Which team does Lionel Messi plays for?  ";
    let (status, data) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": text,
            "answer": "FC Barcelona",
            "category": "6",
            "difficulty": "2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["questions"], text);
    assert_eq!(data["total_questions"], 2);
    assert_eq!(data["current_category"], "Sports");
    let id = data["created"].as_i64().unwrap();

    let (_, data) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(data["total_questions"], 2);
    let stored = data["questions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|q| q["id"] == id)
        .unwrap();
    assert_eq!(
        stored,
        &json!({
            "id": id,
            "question": text,
            "answer": "FC Barcelona",
            "category": 6,
            "difficulty": 2
        })
    );
}

#[tokio::test]
async fn test_create_question_failures_are_400() {
    let app = app().await;

    let (status, data) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"question": "Lalalala", "answer": "Llililili", "difficulty": "1000"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&data, 400, "Bad Request");

    let (status, data) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"question": "Orphan?", "answer": "yes", "category": 1000, "difficulty": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&data, 400, "Bad Request");

    let (status, data) = send(&app, Method::POST, "/questions", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&data, 400, "Bad Request");

    // 失败的创建不留下数据
    let (status, _) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_question() {
    let app = app().await;
    let keep = create(&app, "Keep me", 3).await["created"].as_i64().unwrap();
    let gone = create(&app, "Delete me", 3).await["created"].as_i64().unwrap();

    let (status, data) = send(&app, Method::DELETE, &format!("/questions/{}", gone), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data, json!({"success": true, "delete": gone}));

    let (_, data) = send(&app, Method::GET, "/categories/3/questions", None).await;
    assert_eq!(data["total_questions"], 1);
    assert_eq!(data["questions"][0]["id"], keep);

    let (status, data) = send(&app, Method::DELETE, &format!("/questions/{}", gone), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "not_found");
}

#[tokio::test]
async fn test_delete_missing_or_malformed_id() {
    let app = app().await;

    let (status, data) = send(&app, Method::DELETE, "/questions/1000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "not_found");

    let (status, data) = send(&app, Method::DELETE, "/questions/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "not_found");
}

#[tokio::test]
async fn test_search_questions() {
    let app = app().await;
    for i in 0..12 {
        create(&app, &format!("Movie TITLE number {}", i), 5).await;
    }
    create(&app, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4).await;
    create(&app, "What boxer's original name is Cassius Clay?", 6).await;

    let (status, data) = send(
        &app,
        Method::POST,
        "/questions/search",
        Some(json!({"searchTerm": "title"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["total_questions"], 13);
    assert_eq!(data["current_category"], Value::Null);
    let page = data["questions"].as_array().unwrap();
    assert_eq!(page.len(), 10);
    assert!(page
        .iter()
        .all(|q| q["question"].as_str().unwrap().to_lowercase().contains("title")));

    let (_, data) = send(
        &app,
        Method::POST,
        "/questions/search?page=2",
        Some(json!({"searchTerm": "title"})),
    )
    .await;
    assert_eq!(data["questions"].as_array().unwrap().len(), 3);

    let (status, data) = send(
        &app,
        Method::POST,
        "/questions/search",
        Some(json!({"searchTerm": "What boxer's original name is Cassius Clay?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["total_questions"], 1);

    let (status, data) = send(&app, Method::POST, "/questions/search", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&data, 400, "Bad Request");
}

#[tokio::test]
async fn test_search_ignores_non_ascii_case() {
    let app = app().await;
    create(&app, "Quelle ÉCOLE est la plus ancienne?", 3).await;
    create(&app, "Which school is the oldest?", 4).await;

    let (status, data) = send(
        &app,
        Method::POST,
        "/questions/search",
        Some(json!({"searchTerm": "école"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["total_questions"], 1);
    assert_eq!(
        data["questions"][0]["question"],
        "Quelle ÉCOLE est la plus ancienne?"
    );
}

// ============================================================================
// /quizzes
// ============================================================================

#[tokio::test]
async fn test_quiz_walks_through_category() {
    let app = app().await;
    for i in 0..3 {
        create(&app, &format!("Science {}", i), 1).await;
    }
    create(&app, "Art", 2).await;

    let mut previous: Vec<i64> = Vec::new();
    loop {
        let (status, data) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": previous,
                "quiz_category": {"type": "Science", "id": 1}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        if data["question"] == false {
            assert_eq!(data, json!({"question": false}));
            break;
        }
        assert_eq!(data["success"], true);
        assert_eq!(data["question"]["category"], 1);
        let id = data["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id));
        previous.push(id);
    }
    assert_eq!(previous.len(), 3);
}

#[tokio::test]
async fn test_quiz_any_category() {
    let app = app().await;
    create(&app, "Only question", 4).await;

    // 没有历史、没有分类：从全部题目中抽取
    let (status, data) = send(&app, Method::POST, "/quizzes", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["question"]["question"], "Only question");

    let (_, data) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": [], "quiz_category": {"type": "click", "id": 0}})),
    )
    .await;
    assert_eq!(data["success"], true);
}

#[tokio::test]
async fn test_quiz_bad_requests() {
    let app = app().await;

    let (status, data) = send(&app, Method::POST, "/quizzes", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&data, 400, "Bad Request");

    let (status, _) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": [], "quiz_category": "Science"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// 其它
// ============================================================================

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
    let app = app().await;

    let (status, data) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "not_found");
}

#[tokio::test]
async fn test_wrong_method_is_405_envelope() {
    let app = app().await;

    for (method, uri) in [
        (Method::GET, "/quizzes"),
        (Method::PUT, "/questions"),
        (Method::GET, "/questions/search"),
        (Method::POST, "/categories"),
        (Method::PATCH, "/questions/1"),
    ] {
        let (status, data) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
        assert_error(&data, 405, "method_not_allowed");
    }
}

#[tokio::test]
async fn test_ping() {
    let app = app().await;

    let (status, data) = send(&app, Method::GET, "/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["status"], "ok");
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/questions")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for method in ["GET", "POST", "PATCH", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "{}", methods);
    }
}
