mod common;

use std::sync::Arc;

use jpeg_quality_lib::{
    AppState, BatchProcessor, CancellationFlag, MemoryQualityStore, Quality, RunOutcome, SubmitError,
};
use tempfile::TempDir;

use common::{counts, gated_codec, write_jpeg};

#[tokio::test]
async fn submission_during_a_run_is_ignored() {
    let temp = TempDir::new().unwrap();
    let first = vec![write_jpeg(temp.path(), "a.jpg"), write_jpeg(temp.path(), "b.jpg")];
    let second = vec![write_jpeg(temp.path(), "x.jpg"), write_jpeg(temp.path(), "y.jpg")];

    let (codec, gate) = gated_codec();
    let state = AppState::new(
        Arc::new(MemoryQualityStore::default()),
        BatchProcessor::with_codec(codec),
    );
    let controller = state.controller();

    let mut handle = controller.submit(first).unwrap();
    gate.wait_entered();

    assert!(controller.is_busy());
    assert!(!controller.accepts(&second));
    assert!(matches!(controller.submit(second.clone()), Err(SubmitError::Busy)));

    gate.open(2);
    let mut updates = Vec::new();
    while let Some(progress) = handle.next_progress().await {
        updates.push(progress);
    }
    let outcome = handle.wait().await;

    assert_eq!(outcome, RunOutcome::Completed { total: 2 });
    assert_eq!(counts(&updates), vec![(0, 2), (1, 2), (2, 2)]);
    assert!(temp.path().join("a-60.jpg").exists());
    assert!(temp.path().join("b-60.jpg").exists());
    assert!(!temp.path().join("x-60.jpg").exists());
    assert!(!temp.path().join("y-60.jpg").exists());
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn cancel_lets_the_file_in_flight_finish() {
    let temp = TempDir::new().unwrap();
    let files = vec![
        write_jpeg(temp.path(), "a.jpg"),
        write_jpeg(temp.path(), "b.jpg"),
        write_jpeg(temp.path(), "c.jpg"),
    ];

    let (codec, gate) = gated_codec();
    let state = AppState::new(
        Arc::new(MemoryQualityStore::default()),
        BatchProcessor::with_codec(codec),
    );

    let handle = state.controller().submit(files).unwrap();
    gate.wait_entered();
    handle.cancel();
    gate.open(1);

    let outcome = handle.wait().await;

    assert_eq!(outcome, RunOutcome::Cancelled { completed: 1, total: 3 });
    assert!(temp.path().join("a-60.jpg").exists());
    assert!(!temp.path().join("b-60.jpg").exists());
    assert!(!temp.path().join("c-60.jpg").exists());
    assert!(!state.controller().is_busy());
}

#[test]
fn cancel_before_the_first_file_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let files = vec![write_jpeg(temp.path(), "a.jpg")];

    let flag = CancellationFlag::new();
    flag.cancel();
    let mut updates = Vec::new();
    let outcome = BatchProcessor::new().run(
        &files,
        Quality::DEFAULT,
        |completed, total| updates.push((completed, total)),
        || flag.is_cancelled(),
    );

    assert_eq!(outcome, RunOutcome::Cancelled { completed: 0, total: 1 });
    assert_eq!(updates, vec![(0, 1)]);
    assert!(!temp.path().join("a-60.jpg").exists());
}
