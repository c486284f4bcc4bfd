//! Trained linear classifier head, loaded from a safetensors artifact.

use crate::error::{PipelineError, Result};
use candle_core::{Tensor, D};
use candle_nn::ops::softmax;
use candle_nn::{Linear, Module};
use std::collections::HashMap;

/// Linear model over TF-IDF features.
///
/// Exposes the fixed artifact contract: `predict` for the class index,
/// `predict_proba` for the per-class probability distribution.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    inner: Linear,
    n_classes: usize,
    in_features: usize,
}

impl LinearClassifier {
    /// Assemble a classifier from a weight `(C, V)` and bias `(C)` tensor.
    pub fn from_tensors(weight: Tensor, bias: Tensor) -> Result<Self> {
        let (n_classes, in_features) = weight.dims2().map_err(|e| {
            PipelineError::Artifact(format!("classifier weight must be a rank-2 tensor: {e}"))
        })?;
        let bias_len = bias.dims1().map_err(|e| {
            PipelineError::Artifact(format!("classifier bias must be a rank-1 tensor: {e}"))
        })?;
        if bias_len != n_classes {
            return Err(PipelineError::Artifact(format!(
                "classifier artifact mismatch: weight has {n_classes} rows, bias has {bias_len}"
            )));
        }
        Ok(Self {
            inner: Linear::new(weight, Some(bias)),
            n_classes,
            in_features,
        })
    }

    /// Assemble a classifier from a loaded safetensors tensor map holding
    /// `weight` and `bias`.
    pub(crate) fn from_tensor_map(mut tensors: HashMap<String, Tensor>) -> Result<Self> {
        let weight = tensors.remove("weight").ok_or_else(|| {
            PipelineError::Artifact("classifier artifact missing 'weight' tensor".to_owned())
        })?;
        let bias = tensors.remove("bias").ok_or_else(|| {
            PipelineError::Artifact("classifier artifact missing 'bias' tensor".to_owned())
        })?;
        Self::from_tensors(weight, bias)
    }

    /// Number of output classes.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Feature width the classifier was trained on.
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Predicted class index for a `(1, V)` feature tensor.
    pub fn predict(&self, features: &Tensor) -> Result<u32> {
        let logits = self.inner.forward(features)?;
        Ok(logits.argmax(D::Minus1)?.squeeze(0)?.to_scalar::<u32>()?)
    }

    /// Per-class probability distribution (softmax over logits) for a
    /// `(1, V)` feature tensor.
    pub fn predict_proba(&self, features: &Tensor) -> Result<Vec<f32>> {
        let logits = self.inner.forward(features)?;
        let probabilities = softmax(&logits, D::Minus1)?;
        Ok(probabilities.squeeze(0)?.to_vec1::<f32>()?)
    }
}
