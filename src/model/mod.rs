// Sentiment model - pre-trained artifacts deserialized at process start

pub mod artifacts;

pub use artifacts::{LabelEncoder, LinearClassifier, ModelPackage, TfidfVectorizer};

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Combined artifact bundle written by the training pipeline.
pub const PACKAGE_FILE: &str = "sentiment_model_package.json";
/// Individually exported artifacts (fallback when the bundle is absent).
pub const MODEL_FILE: &str = "sentiment_model.json";
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
pub const ENCODER_FILE: &str = "label_encoder.json";

/// Prediction failures that are surfaced to the user as a notice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("models are not loaded")]
    ModelsUnavailable,
    #[error("vectorizer is not fitted")]
    VectorizerNotFitted,
}

/// Outcome of classifying one piece of feedback.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    /// Probability mass assigned to the selected class.
    pub confidence: f64,
}

/// The loaded classifier stack. Immutable after load and shared across
/// requests without synchronization; there is no reload path.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    classifier: LinearClassifier,
    vectorizer: TfidfVectorizer,
    encoder: LabelEncoder,
}

impl SentimentModel {
    /// Load model artifacts from `models_dir`.
    ///
    /// Tries the combined package first, then the three individually named
    /// artifacts. Returns `Ok(None)` when neither exists; the caller runs
    /// with prediction disabled until a restart with valid artifacts.
    /// Malformed or inconsistent artifacts are a hard error.
    pub fn load(models_dir: &Path) -> Result<Option<Self>> {
        let package_path = models_dir.join(PACKAGE_FILE);
        if package_path.exists() {
            let json = fs::read_to_string(&package_path)
                .with_context(|| format!("Failed to read {}", package_path.display()))?;
            let package: ModelPackage = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse {}", package_path.display()))?;
            let model = Self::from_package(package)?;
            tracing::info!("Model package loaded successfully");
            return Ok(Some(model));
        }

        let model_path = models_dir.join(MODEL_FILE);
        let vect_path = models_dir.join(VECTORIZER_FILE);
        let enc_path = models_dir.join(ENCODER_FILE);
        if model_path.exists() && vect_path.exists() && enc_path.exists() {
            let classifier: LinearClassifier = read_artifact(&model_path)?;
            let vectorizer: TfidfVectorizer = read_artifact(&vect_path)?;
            let encoder: LabelEncoder = read_artifact(&enc_path)?;
            let model = Self::new(classifier, vectorizer, encoder)?;
            tracing::info!("Individual model components loaded successfully");
            return Ok(Some(model));
        }

        tracing::warn!(
            models_dir = %models_dir.display(),
            "Model files not found; prediction disabled until the model is trained and saved"
        );
        Ok(None)
    }

    pub fn from_package(package: ModelPackage) -> Result<Self> {
        Self::new(package.model, package.vectorizer, package.encoder)
    }

    /// Assemble a model, checking that the artifacts agree with each other.
    /// Prediction indexes into the encoder and the IDF table, so the shapes
    /// must line up here.
    pub fn new(
        classifier: LinearClassifier,
        vectorizer: TfidfVectorizer,
        encoder: LabelEncoder,
    ) -> Result<Self> {
        if classifier.coef.is_empty() {
            bail!("classifier has no coefficient rows");
        }
        if encoder.classes.len() != classifier.class_count() {
            bail!(
                "label encoder has {} classes but classifier scores {}",
                encoder.classes.len(),
                classifier.class_count()
            );
        }
        if classifier.coef.len() != classifier.intercept.len() {
            bail!(
                "classifier has {} coefficient rows but {} intercepts",
                classifier.coef.len(),
                classifier.intercept.len()
            );
        }
        let dim = vectorizer.dimension();
        if classifier.coef.iter().any(|row| row.len() != dim) {
            bail!("classifier coefficient rows do not match vectorizer dimension {dim}");
        }
        if vectorizer.vocabulary.values().any(|&i| i >= dim) {
            bail!("vectorizer vocabulary index out of range (dimension {dim})");
        }
        Ok(Self {
            classifier,
            vectorizer,
            encoder,
        })
    }

    /// Classify normalized feedback text.
    ///
    /// Input must already be normalized via [`crate::text::normalize`].
    pub fn predict(&self, cleaned: &str) -> Result<Prediction, PredictError> {
        let x = self.transform(cleaned)?;
        let probs = self.predict_proba(&x);

        let (pred_idx, confidence) = probs
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::MIN), |best, (i, p)| {
                if p > best.1 {
                    (i, p)
                } else {
                    best
                }
            });

        // Bounds guaranteed by the shape checks in `new`.
        let label = self.encoder.classes[pred_idx].clone();
        Ok(Prediction { label, confidence })
    }

    /// TF-IDF transform: term counts weighted by IDF, then L2-normalized.
    fn transform(&self, cleaned: &str) -> Result<Vec<f64>, PredictError> {
        if !self.vectorizer.is_fitted() {
            return Err(PredictError::VectorizerNotFitted);
        }

        let mut x = vec![0.0; self.vectorizer.dimension()];
        for token in cleaned.split_whitespace() {
            if let Some(&i) = self.vectorizer.vocabulary.get(token) {
                x[i] += 1.0;
            }
        }
        for (value, idf) in x.iter_mut().zip(&self.vectorizer.idf) {
            *value *= idf;
        }

        let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut x {
                *value /= norm;
            }
        }

        Ok(x)
    }

    /// Per-class probabilities: sigmoid over the single decision value for
    /// binary models, softmax over the class scores otherwise.
    fn predict_proba(&self, x: &[f64]) -> Vec<f64> {
        let scores: Vec<f64> = self
            .classifier
            .coef
            .iter()
            .zip(&self.classifier.intercept)
            .map(|(row, b)| row.iter().zip(x).map(|(w, v)| w * v).sum::<f64>() + b)
            .collect();

        if scores.len() == 1 {
            let p = 1.0 / (1.0 + (-scores[0]).exp());
            return vec![1.0 - p, p];
        }

        let max = scores.iter().copied().fold(f64::MIN, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / sum).collect()
    }

    pub fn labels(&self) -> &[String] {
        &self.encoder.classes
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}
