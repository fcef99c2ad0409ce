// Route handlers

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::advice;
use crate::model::PredictError;
use crate::store::FeedbackRecord;
use crate::text;

use super::pages;
use super::AppState;

/// Transient notices carried across redirects in the query string.
///
/// The service keeps no session state, so the redirect carries a short code
/// instead of free text; unknown codes render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyFeedback,
    ModelsUnavailable,
    VectorizerNotFitted,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Notice::EmptyFeedback => "empty_feedback",
            Notice::ModelsUnavailable => "models_unavailable",
            Notice::VectorizerNotFitted => "vectorizer_not_fitted",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "empty_feedback" => Some(Notice::EmptyFeedback),
            "models_unavailable" => Some(Notice::ModelsUnavailable),
            "vectorizer_not_fitted" => Some(Notice::VectorizerNotFitted),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::EmptyFeedback => "Please enter your feedback before submitting.",
            Notice::ModelsUnavailable => {
                "Models not loaded. Please train and save the models first."
            }
            Notice::VectorizerNotFitted => {
                "Vectorizer is not fitted. Please retrain and save your models."
            }
        }
    }

    fn redirect_home(self) -> Response {
        Redirect::to(&format!("/?notice={}", self.code())).into_response()
    }
}

impl From<PredictError> for Notice {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::ModelsUnavailable => Notice::ModelsUnavailable,
            PredictError::VectorizerNotFitted => Notice::VectorizerNotFitted,
        }
    }
}

/// Build the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/predict", post(predict))
        .route("/insights", get(insights))
        .route("/health", get(health_check))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct HomeQuery {
    notice: Option<String>,
}

async fn home(Query(query): Query<HomeQuery>) -> Html<String> {
    let notice = query
        .notice
        .as_deref()
        .and_then(Notice::from_code)
        .map(Notice::message);
    Html(pages::form_page(notice))
}

#[derive(Debug, Deserialize)]
struct PredictForm {
    #[serde(default)]
    feedback: String,
    #[serde(default)]
    review: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

async fn predict(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PredictForm>,
) -> Response {
    // Model availability is checked before input, so a misconfigured
    // deployment reports itself even on an empty submission.
    if !state.model_loaded() {
        return Notice::ModelsUnavailable.redirect_home();
    }

    let feedback = form.feedback.trim();
    let review = form.review.trim();
    let intern_name = form.name.trim();
    let intern_email = form.email.trim();

    if feedback.is_empty() {
        return Notice::EmptyFeedback.redirect_home();
    }

    let cleaned = text::normalize(feedback);
    let prediction = match state.classify(&cleaned) {
        Ok(prediction) => prediction,
        Err(err) => return Notice::from(err).redirect_home(),
    };

    let record = FeedbackRecord::new(
        intern_name,
        intern_email,
        feedback,
        review,
        &prediction.label,
        prediction.confidence,
    );
    if let Err(e) = state.store().append(&record) {
        tracing::error!("Failed to append feedback record: {e:#}");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to record feedback").into_response();
    }

    tracing::info!(
        label = %prediction.label,
        confidence = prediction.confidence,
        "Feedback classified"
    );

    let tips = advice::tips_for(&prediction.label);
    Html(pages::result_page(&prediction, feedback, review, tips)).into_response()
}

async fn insights(State(state): State<Arc<AppState>>) -> Response {
    let report = match state.store().insights() {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Failed to read feedback log: {e:#}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read feedback log")
                .into_response();
        }
    };

    let counts_json =
        serde_json::to_string(&report.counts).unwrap_or_else(|_| "{}".to_string());
    Html(pages::insights_page(&report, &counts_json)).into_response()
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "model_loaded": state.model_loaded(),
    }))
}
