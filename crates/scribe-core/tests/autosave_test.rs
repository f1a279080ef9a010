//! Autosave scheduler tests
//!
//! ## Test Architecture
//!
//! All tests run on a paused tokio clock (`start_paused = true`); sleeping
//! auto-advances time, so debounce windows elapse deterministically without
//! wall-clock waits.
//!
//! ## What These Tests Verify
//!
//! - A mutation followed by the quiescence interval triggers exactly one
//!   persistence call with the current content
//! - Rapid mutations within the interval coalesce into one call
//! - The status machine walks `Idle → Saving → {Saved, Error} → Idle`
//! - Empty content is never persisted
//! - Shutdown cancels a pending timer; no posthumous persistence

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use scribe_core::{
    AutosaveStatus, Collaborators, ComposerEngine, ComposerError, ComposerOptions, ComposerResult,
    PersistenceSink, ERROR_DISPLAY_WINDOW, SAVED_DISPLAY_WINDOW,
};

/// Sink that records every persisted payload, optionally failing
struct RecordingSink {
    calls: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingSink {
    fn new() -> (Arc<Self>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Arc::new(Self {
                calls: calls.clone(),
                fail: false,
            }),
            calls,
        )
    }

    fn failing() -> (Arc<Self>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Arc::new(Self {
                calls: calls.clone(),
                fail: true,
            }),
            calls,
        )
    }
}

impl PersistenceSink for RecordingSink {
    fn persist(&self, content: String) -> BoxFuture<'static, ComposerResult<()>> {
        let calls = self.calls.clone();
        let fail = self.fail;
        Box::pin(async move {
            calls.lock().unwrap().push(content);
            if fail {
                Err(ComposerError::Persistence("backend unavailable".into()))
            } else {
                Ok(())
            }
        })
    }
}

fn autosave_engine(sink: Arc<RecordingSink>) -> ComposerEngine {
    let options = ComposerOptions {
        auto_save: true,
        auto_save_interval: Duration::from_millis(1000),
        ..Default::default()
    };
    ComposerEngine::new(options, Collaborators::new().with_persistence(sink))
}

/// Let the scheduler task observe queued messages and timers
async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_mutation_then_interval_saves_once() {
    let (sink, calls) = RecordingSink::new();
    let mut engine = autosave_engine(sink);

    engine.insert_text("Hello");
    tokio::time::sleep(Duration::from_millis(1100)).await;

    let calls = calls.lock().unwrap().clone();
    assert_eq!(calls, vec!["Hello".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_mutations_coalesce_into_one_save() {
    let (sink, calls) = RecordingSink::new();
    let mut engine = autosave_engine(sink);

    engine.insert_text("Hel");
    tokio::time::sleep(Duration::from_millis(500)).await;
    // Second mutation before the timer fires resets the wait
    engine.insert_text("lo");
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(
        calls.lock().unwrap().is_empty(),
        "timer was reset by the second mutation"
    );

    tokio::time::sleep(Duration::from_millis(500)).await;
    let calls = calls.lock().unwrap().clone();
    assert_eq!(calls, vec!["Hello".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_status_walks_saving_saved_idle() {
    let (sink, _calls) = RecordingSink::new();
    let mut engine = autosave_engine(sink);
    assert_eq!(engine.autosave_status(), AutosaveStatus::Idle);

    engine.insert_text("content");
    tokio::time::sleep(Duration::from_millis(1050)).await;
    assert_eq!(engine.autosave_status(), AutosaveStatus::Saved);

    tokio::time::sleep(SAVED_DISPLAY_WINDOW + Duration::from_millis(50)).await;
    assert_eq!(engine.autosave_status(), AutosaveStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_failure_shows_error_then_reverts() {
    let (sink, calls) = RecordingSink::failing();
    let mut engine = autosave_engine(sink);

    engine.insert_text("content");
    tokio::time::sleep(Duration::from_millis(1050)).await;
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert_eq!(engine.autosave_status(), AutosaveStatus::Error);

    tokio::time::sleep(ERROR_DISPLAY_WINDOW + Duration::from_millis(50)).await;
    assert_eq!(engine.autosave_status(), AutosaveStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_mutation_during_display_window_arms_next_timer() {
    let (sink, calls) = RecordingSink::new();
    let mut engine = autosave_engine(sink);

    engine.insert_text("first");
    tokio::time::sleep(Duration::from_millis(1050)).await;
    assert_eq!(engine.autosave_status(), AutosaveStatus::Saved);

    // Mutation while not Idle does not interrupt; it re-arms after revert
    engine.insert_text(" second");
    settle().await;
    assert_eq!(calls.lock().unwrap().len(), 1);

    tokio::time::sleep(SAVED_DISPLAY_WINDOW + Duration::from_millis(1050)).await;
    let calls = calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], "first second");
}

#[tokio::test(start_paused = true)]
async fn test_empty_content_is_not_persisted() {
    let (sink, calls) = RecordingSink::new();
    let mut engine = autosave_engine(sink);

    engine.insert_text("x");
    engine.delete_backward();
    tokio::time::sleep(Duration::from_millis(2000)).await;

    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(engine.autosave_status(), AutosaveStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_pending_timer() {
    let (sink, calls) = RecordingSink::new();
    let mut engine = autosave_engine(sink);

    engine.insert_text("never saved");
    engine.shutdown();
    tokio::time::sleep(Duration::from_millis(5000)).await;

    assert!(
        calls.lock().unwrap().is_empty(),
        "persistence must never be invoked after teardown"
    );
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_timer() {
    let (sink, calls) = RecordingSink::new();
    {
        let mut engine = autosave_engine(sink);
        engine.insert_text("never saved");
    }
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_autosave_disabled_never_persists() {
    let (sink, calls) = RecordingSink::new();
    let options = ComposerOptions {
        auto_save: false,
        ..Default::default()
    };
    let mut engine = ComposerEngine::new(options, Collaborators::new().with_persistence(sink));

    engine.insert_text("content");
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(engine.autosave_status(), AutosaveStatus::Idle);
}
