//! Debounced autosave scheduler
//!
//! A background task owns the only timed resource in the engine: the
//! quiescence timer. Mutations are fed through an unbounded channel and
//! (re-)arm the timer; when it fires with status `Idle` and non-empty
//! content, the persistence sink is invoked and the status machine walks
//! `Idle → Saving → {Saved, Error} → Idle`, with `Saved`/`Error` shown
//! transiently before reverting. A mutation arriving mid-save does not
//! interrupt the in-flight call; it marks the document dirty and the next
//! timer arms once the status returns to `Idle`.
//!
//! Teardown: dropping the handle closes the channel, the task exits at its
//! next wakeup, and a pending timer can never fire a posthumous persist.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::events::{AutosaveStatus, ComposerEvent};
use crate::providers::PersistenceSink;

/// How long `Saved` stays visible before reverting to `Idle`
pub const SAVED_DISPLAY_WINDOW: Duration = Duration::from_secs(2);

/// How long `Error` stays visible before reverting to `Idle`
pub const ERROR_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

/// Handle to the autosave background task
pub struct AutosaveHandle {
    tx: mpsc::UnboundedSender<String>,
    status_rx: watch::Receiver<AutosaveStatus>,
    task: JoinHandle<()>,
}

impl AutosaveHandle {
    /// Spawn the scheduler task
    ///
    /// Requires a running tokio runtime; the engine only spawns this when
    /// autosave is enabled and a persistence sink is configured.
    pub fn spawn(
        interval: Duration,
        sink: Arc<dyn PersistenceSink>,
        events: broadcast::Sender<ComposerEvent>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = watch::channel(AutosaveStatus::Idle);
        let task = tokio::spawn(run(interval, sink, events, rx, status_tx));
        Self {
            tx,
            status_rx,
            task,
        }
    }

    /// Feed a mutation to the scheduler, re-arming the timer
    pub fn note_mutation(&self, content: String) {
        // A send error only means the task already stopped
        let _ = self.tx.send(content);
    }

    /// Current status
    pub fn status(&self) -> AutosaveStatus {
        *self.status_rx.borrow()
    }

    /// Watch channel for status transitions
    pub fn watch_status(&self) -> watch::Receiver<AutosaveStatus> {
        self.status_rx.clone()
    }

    /// Whether the background task has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the scheduler; any pending timer is cancelled
    pub fn shutdown(self) {
        drop(self.tx);
    }
}

fn set_status(
    current: &mut AutosaveStatus,
    next: AutosaveStatus,
    status_tx: &watch::Sender<AutosaveStatus>,
    events: &broadcast::Sender<ComposerEvent>,
) {
    if *current == next {
        return;
    }
    *current = next;
    let _ = status_tx.send(next);
    let _ = events.send(ComposerEvent::AutosaveStatusChanged(next));
}

async fn run(
    interval: Duration,
    sink: Arc<dyn PersistenceSink>,
    events: broadcast::Sender<ComposerEvent>,
    mut rx: mpsc::UnboundedReceiver<String>,
    status_tx: watch::Sender<AutosaveStatus>,
) {
    let mut status = AutosaveStatus::Idle;
    let mut latest: Option<String> = None;
    let mut dirty = false;
    let mut wake_at: Option<Instant> = None;

    loop {
        let wake = wake_at;
        let timer = async move {
            match wake {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            msg = rx.recv() => match msg {
                Some(content) => {
                    latest = Some(content);
                    if status == AutosaveStatus::Idle {
                        wake_at = Some(Instant::now() + interval);
                    } else {
                        dirty = true;
                    }
                }
                None => break,
            },
            _ = timer => {
                wake_at = None;
                match status {
                    AutosaveStatus::Idle => {
                        let content = latest.clone().unwrap_or_default();
                        if content.is_empty() {
                            continue;
                        }
                        set_status(&mut status, AutosaveStatus::Saving, &status_tx, &events);
                        debug!(bytes = content.len(), "autosave firing");
                        match sink.persist(content).await {
                            Ok(()) => {
                                set_status(&mut status, AutosaveStatus::Saved, &status_tx, &events);
                                wake_at = Some(Instant::now() + SAVED_DISPLAY_WINDOW);
                            }
                            Err(e) => {
                                warn!(error = %e, "autosave persist failed");
                                set_status(&mut status, AutosaveStatus::Error, &status_tx, &events);
                                wake_at = Some(Instant::now() + ERROR_DISPLAY_WINDOW);
                            }
                        }
                    }
                    AutosaveStatus::Saved | AutosaveStatus::Error => {
                        set_status(&mut status, AutosaveStatus::Idle, &status_tx, &events);
                        if dirty {
                            dirty = false;
                            wake_at = Some(Instant::now() + interval);
                        }
                    }
                    // The timer is never armed while a persist is in flight
                    AutosaveStatus::Saving => {}
                }
            }
        }
    }
    debug!("autosave scheduler stopped");
}
