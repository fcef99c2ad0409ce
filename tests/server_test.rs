// Integration tests for the HTTP surface

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use internsight::model::{LabelEncoder, LinearClassifier, SentimentModel, TfidfVectorizer};
use internsight::server::{create_router, AppState};
use internsight::store::{FeedbackRecord, FeedbackStore};

/// Three-class model over a toy vocabulary: "waste"/"boring" drive
/// Negative, "okay" drives Neutral, "great"/"amazing" drive Positive.
fn toy_model() -> SentimentModel {
    let mut vocabulary = HashMap::new();
    for (i, term) in ["waste", "boring", "okay", "great", "amazing"]
        .iter()
        .enumerate()
    {
        vocabulary.insert(term.to_string(), i);
    }
    let vectorizer = TfidfVectorizer {
        vocabulary,
        idf: vec![1.0; 5],
    };
    let classifier = LinearClassifier {
        coef: vec![
            vec![2.0, 2.0, -1.0, -2.0, -2.0],
            vec![-1.0, -1.0, 2.0, -1.0, -1.0],
            vec![-2.0, -2.0, -1.0, 2.0, 2.0],
        ],
        intercept: vec![0.0, 0.0, 0.0],
    };
    let encoder = LabelEncoder {
        classes: vec!["Negative".into(), "Neutral".into(), "Positive".into()],
    };
    SentimentModel::new(classifier, vectorizer, encoder).unwrap()
}

/// Router plus a handle on its backing store. The TempDir keeps the data
/// directory alive for the duration of the test.
fn app(model: Option<SentimentModel>) -> (axum::Router, FeedbackStore, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = FeedbackStore::open(dir.path()).unwrap();
    let router = create_router(Arc::new(AppState::new(model, store.clone())));
    (router, store, dir)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_home_renders_form() {
    let (router, _store, _dir) = app(Some(toy_model()));

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<form"));
    assert!(!body.contains("class=\"notice\""));
}

#[tokio::test]
async fn test_home_renders_notice_from_redirect() {
    let (router, _store, _dir) = app(Some(toy_model()));

    let response = router
        .oneshot(
            Request::get("/?notice=empty_feedback")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("Please enter your feedback before submitting."));
}

#[tokio::test]
async fn test_unknown_notice_code_renders_nothing() {
    let (router, _store, _dir) = app(Some(toy_model()));

    let response = router
        .oneshot(Request::get("/?notice=bogus").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("class=\"notice\""));
}

#[tokio::test]
async fn test_empty_feedback_redirects_and_appends_nothing() {
    let (router, store, _dir) = app(Some(toy_model()));

    let response = router
        .oneshot(form_post("feedback=&name=Ada&email=ada%40example.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/?notice=empty_feedback"
    );
    assert!(store.read_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_whitespace_only_feedback_counts_as_empty() {
    let (router, store, _dir) = app(Some(toy_model()));

    let response = router.oneshot(form_post("feedback=+++")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(store.read_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_negative_feedback_appends_record_and_shows_tips() {
    let (router, store, _dir) = app(Some(toy_model()));

    let response = router
        .oneshot(form_post(
            "feedback=this+internship+was+a+waste+of+time&review=boring+tasks&name=Ada&email=ada%40example.com",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Negative"));
    assert!(body.contains("Provide clearer guidance and structured tasks."));
    assert!(body.contains("Increase frequency of mentor check-ins and feedback."));

    let rows = store.read_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].predicted_sentiment, "Negative");
    assert_eq!(rows[0].intern_name, "Ada");
    assert_eq!(rows[0].feedback, "this internship was a waste of time");
}

#[tokio::test]
async fn test_positive_feedback_gets_no_tips() {
    let (router, store, _dir) = app(Some(toy_model()));

    let response = router
        .oneshot(form_post("feedback=great+mentors+and+amazing+projects"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Positive"));
    assert!(!body.contains("Suggested improvements"));
    assert_eq!(store.read_all().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_model_redirects_with_notice() {
    let (router, store, _dir) = app(None);

    let response = router
        .oneshot(form_post("feedback=anything+at+all"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/?notice=models_unavailable"
    );
    assert!(store.read_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_unfit_vectorizer_redirects_with_notice() {
    let vectorizer = TfidfVectorizer {
        vocabulary: HashMap::new(),
        idf: vec![],
    };
    let classifier = LinearClassifier {
        coef: vec![vec![], vec![], vec![]],
        intercept: vec![0.0, 0.0, 0.0],
    };
    let encoder = LabelEncoder {
        classes: vec!["Negative".into(), "Neutral".into(), "Positive".into()],
    };
    let model = SentimentModel::new(classifier, vectorizer, encoder).unwrap();
    let (router, store, _dir) = app(Some(model));

    let response = router
        .oneshot(form_post("feedback=some+feedback"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/?notice=vectorizer_not_fitted"
    );
    assert!(store.read_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_insights_page_reports_counts_and_recent() {
    let (router, store, _dir) = app(Some(toy_model()));

    for i in 0..6 {
        let label = if i % 2 == 0 { "Positive" } else { "Negative" };
        store
            .append(&FeedbackRecord::new(
                "Ada",
                "ada@example.com",
                &format!("entry {i}"),
                "",
                label,
                0.8,
            ))
            .unwrap();
    }

    let response = router
        .oneshot(Request::get("/insights").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"const counts = {"Positive":3,"Neutral":0,"Negative":3}"#));
    // Five most recent, newest first; entry 0 has aged out
    assert!(body.contains("entry 5"));
    assert!(body.contains("entry 1"));
    assert!(!body.contains("entry 0"));
}

#[tokio::test]
async fn test_health_reports_model_state() {
    let (router, _store, _dir) = app(None);

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"model_loaded\":false"));
}
