// HTTP server - request/response glue over the sentiment model and the log

mod handlers;
mod pages;

pub use handlers::{create_router, Notice};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::model::{PredictError, Prediction, SentimentModel};
use crate::store::FeedbackStore;

/// Shared per-process state.
///
/// The model is read-only after load and shared across requests without
/// synchronization. The store appends and re-reads without locking.
pub struct AppState {
    model: Option<SentimentModel>,
    store: FeedbackStore,
}

impl AppState {
    pub fn new(model: Option<SentimentModel>, store: FeedbackStore) -> Self {
        Self { model, store }
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn store(&self) -> &FeedbackStore {
        &self.store
    }

    /// Classify already-normalized text. An unset model (artifacts missing
    /// at startup) reports the same way on every call until restart.
    pub fn classify(&self, cleaned: &str) -> Result<Prediction, PredictError> {
        match &self.model {
            Some(model) => model.predict(cleaned),
            None => Err(PredictError::ModelsUnavailable),
        }
    }
}

/// Start the HTTP server and serve until shutdown.
pub async fn serve(state: Arc<AppState>, bind_address: &str) -> Result<()> {
    let addr: SocketAddr = bind_address.parse()?;

    // Body limit guards the form endpoint against oversized payloads; 64KB
    // is generous for free-text feedback.
    let app = create_router(state)
        .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting internsight server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
