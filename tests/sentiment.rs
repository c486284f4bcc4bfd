//! Integration tests for the sentiment pipeline, run against tiny artifacts
//! written to a temporary directory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use candle_core::{DType, Device, Tensor};
use sentiment_pipeline::error::PipelineError;
use sentiment_pipeline::sentiment::{Sentiment, SentimentPipelineBuilder, TfidfLinearOptions};

/// Column order of the test vocabulary.
const VOCAB: &[&str] = &["absolutely", "course", "love", "ok", "terrible", "waste"];

fn write_vectorizer(dir: &Path, idf_len: usize) -> anyhow::Result<()> {
    let vocabulary: HashMap<&str, usize> = VOCAB.iter().copied().zip(0..).collect();
    let artifact = serde_json::json!({
        "vocabulary": vocabulary,
        "idf": vec![1.0f32; idf_len],
    });
    fs::write(
        dir.join("tfidf_vectorizer.json"),
        serde_json::to_string(&artifact)?,
    )?;
    Ok(())
}

fn write_classifier(dir: &Path, in_features: usize) -> anyhow::Result<()> {
    // Rows are negative, neutral, positive. Each row rewards the obvious
    // vocabulary columns for its class and ignores the rest.
    let mut weight = vec![0f32; 3 * in_features];
    if in_features == VOCAB.len() {
        weight[4] = 3.0; // negative: terrible
        weight[5] = 3.0; // negative: waste
        weight[in_features + 3] = 3.0; // neutral: ok
        weight[2 * in_features] = 2.0; // positive: absolutely
        weight[2 * in_features + 1] = 2.0; // positive: course
        weight[2 * in_features + 2] = 3.0; // positive: love
    }
    let mut tensors = HashMap::new();
    tensors.insert(
        "weight".to_owned(),
        Tensor::from_vec(weight, (3, in_features), &Device::Cpu)?,
    );
    tensors.insert(
        "bias".to_owned(),
        Tensor::zeros(3, DType::F32, &Device::Cpu)?,
    );
    candle_core::safetensors::save(&tensors, dir.join("classifier.safetensors"))?;
    Ok(())
}

fn write_artifacts(dir: &Path) -> anyhow::Result<()> {
    write_vectorizer(dir, VOCAB.len())?;
    write_classifier(dir, VOCAB.len())?;
    Ok(())
}

fn build_pipeline(
    dir: &Path,
) -> anyhow::Result<
    sentiment_pipeline::sentiment::SentimentPipeline<sentiment_pipeline::sentiment::TfidfLinear>,
> {
    Ok(SentimentPipelineBuilder::tfidf_linear(TfidfLinearOptions::from_dir(dir)).build()?)
}

/// Build against `dir` and return the error it must produce.
fn build_pipeline_err(dir: &Path) -> PipelineError {
    match SentimentPipelineBuilder::tfidf_linear(TfidfLinearOptions::from_dir(dir)).build() {
        Ok(_) => panic!("build was expected to fail"),
        Err(err) => err,
    }
}

#[test]
fn classifies_the_canonical_positive_example() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;
    let pipeline = build_pipeline(dir.path())?;

    let result = pipeline.predict("I absolutely love this course!")?;
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!(result.confidence > 0.0 && result.confidence <= 100.0);
    Ok(())
}

#[test]
fn classifies_negative_and_neutral_examples() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;
    let pipeline = build_pipeline(dir.path())?;

    let negative = pipeline.predict("This course was a terrible waste.")?;
    assert_eq!(negative.sentiment, Sentiment::Negative);

    let neutral = pipeline.predict("It was ok.")?;
    assert_eq!(neutral.sentiment, Sentiment::Neutral);
    Ok(())
}

#[test]
fn degenerate_input_short_circuits_to_neutral() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;
    let pipeline = build_pipeline(dir.path())?;

    for input in ["", "?!?", "the and of to", "   ", "42 1000"] {
        let result = pipeline.predict(input)?;
        assert_eq!(result.sentiment, Sentiment::Neutral, "input {input:?}");
        assert_eq!(result.confidence, 0.0, "input {input:?}");
    }
    Ok(())
}

#[test]
fn out_of_vocabulary_input_still_gets_a_valid_label() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;
    let pipeline = build_pipeline(dir.path())?;

    // Survives normalization but maps to the zero vector: the classifier
    // still produces a distribution (uniform, with zero bias).
    let result = pipeline.predict("qwerty zxcvb flimflam")?;
    assert!(Sentiment::ALL.contains(&result.sentiment));
    assert!(result.confidence > 0.0 && result.confidence <= 100.0);
    Ok(())
}

#[test]
fn every_prediction_stays_inside_the_label_table_and_confidence_bounds() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;
    let pipeline = build_pipeline(dir.path())?;

    let inputs = [
        "I absolutely love this course!",
        "Terrible quality, very disappointed.",
        "It's okay, nothing special.",
        "completely unrelated words here",
        "!!!",
        "LOVE LOVE LOVE",
    ];
    for input in inputs {
        let result = pipeline.predict(input)?;
        assert!(Sentiment::ALL.contains(&result.sentiment), "input {input:?}");
        assert!(
            (0.0..=100.0).contains(&result.confidence),
            "input {input:?}"
        );
    }
    Ok(())
}

#[test]
fn batch_predictions_match_single_predictions() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;
    let pipeline = build_pipeline(dir.path())?;

    let texts = [
        "I absolutely love this course!",
        "This course was a terrible waste.",
        "It was ok.",
        "",
    ];
    let batched = pipeline.predict_batch(&texts)?;
    assert_eq!(batched.len(), texts.len());
    for (text, batch_result) in texts.iter().zip(batched) {
        let single = pipeline.predict(text)?;
        let batch = batch_result?;
        assert_eq!(single.sentiment, batch.sentiment, "input {text:?}");
    }
    Ok(())
}

#[test]
fn second_build_over_the_same_artifacts_works() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;

    let first = build_pipeline(dir.path())?;
    // Second build resolves through the process-wide cache rather than disk.
    let second = build_pipeline(dir.path())?;

    let text = "I absolutely love this course!";
    assert_eq!(
        first.predict(text)?.sentiment,
        second.predict(text)?.sentiment
    );
    Ok(())
}

#[test]
fn vectorizer_idf_mismatch_fails_at_build_time() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_vectorizer(dir.path(), VOCAB.len() - 1)?;
    write_classifier(dir.path(), VOCAB.len())?;

    let err = build_pipeline_err(dir.path());
    assert!(matches!(err, PipelineError::Artifact(_)), "got {err:?}");
    Ok(())
}

#[test]
fn classifier_feature_width_mismatch_fails_at_build_time() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_vectorizer(dir.path(), VOCAB.len())?;
    write_classifier(dir.path(), VOCAB.len() - 2)?;

    let err = build_pipeline_err(dir.path());
    assert!(matches!(err, PipelineError::Artifact(_)), "got {err:?}");
    Ok(())
}

#[test]
fn missing_artifacts_fail_at_build_time() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let err = build_pipeline_err(dir.path());
    assert!(matches!(err, PipelineError::Artifact(_)), "got {err:?}");
    Ok(())
}
