// Serialized model artifacts - schema owned by the external training pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// TF-IDF vectorizer state: vocabulary term -> feature index, plus the
/// per-feature inverse document frequency weights learned at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// True when the vectorizer was never fitted (empty vocabulary).
    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty() && !self.idf.is_empty()
    }

    /// Number of features in the transformed vector.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }
}

/// Linear classifier weights: one coefficient row per class (a single row
/// for the binary case) plus per-class intercepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

impl LinearClassifier {
    /// Number of classes this classifier distinguishes.
    pub fn class_count(&self) -> usize {
        // Binary models carry a single coefficient row for two classes.
        if self.coef.len() == 1 {
            2
        } else {
            self.coef.len()
        }
    }
}

/// Ordered class names; a class index maps back to its name by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn inverse_transform(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }
}

/// Combined artifact bundle, mirroring the layout the training pipeline
/// exports: classifier, vectorizer, and encoder under one roof.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPackage {
    pub model: LinearClassifier,
    pub vectorizer: TfidfVectorizer,
    pub encoder: LabelEncoder,
}
