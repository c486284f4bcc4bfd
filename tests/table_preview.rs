//! Integration tests for the CSV table preview.

use std::fs;

use sentiment_pipeline::error::PipelineError;
use sentiment_pipeline::table_preview::TablePreview;

#[test]
fn preview_from_disk_preserves_every_cell() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("reviews.csv");
    fs::write(
        &path,
        "text,label,score\nGreat service!,positive,0.97\nNothing special,neutral,0.55\nWorst ever,negative,0.88\n",
    )?;

    let table = TablePreview::from_path(&path)?;
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.n_cols(), 3);
    assert_eq!(table.headers(), ["text", "label", "score"]);
    assert_eq!(table.rows()[0], ["Great service!", "positive", "0.97"]);
    assert_eq!(table.rows()[2], ["Worst ever", "negative", "0.88"]);

    let rendered = table.render();
    assert_eq!(rendered.lines().count(), 5);
    for cell in ["Great service!", "neutral", "0.88"] {
        assert!(rendered.contains(cell), "missing {cell:?}");
    }
    Ok(())
}

#[test]
fn quoted_fields_keep_embedded_commas() -> anyhow::Result<()> {
    let table =
        TablePreview::from_reader("text,label\n\"okay, I guess\",neutral\n".as_bytes())?;
    assert_eq!(table.rows()[0], ["okay, I guess", "neutral"]);
    Ok(())
}

#[test]
fn missing_file_is_reported_not_propagated() {
    let err = TablePreview::from_path("/no/such/upload.csv").unwrap_err();
    match err {
        PipelineError::TableParse(message) => assert!(message.contains("upload.csv")),
        other => panic!("expected table parse error, got {other:?}"),
    }
}

#[test]
fn invalid_utf8_upload_is_a_parse_error() {
    let err = TablePreview::from_reader(&b"text,label\n\xff\xfe,broken\n"[..]).unwrap_err();
    assert!(matches!(err, PipelineError::TableParse(_)));
}
