//! Event and status types broadcast by the composer engine
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ComposerEvent: notifications pushed to subscribed UI layers    │
//! │  AutosaveStatus: persistence state machine, display-only        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every user-visible mutation produces exactly one `ContentChanged`.
//! External (controlled-mode) writes do not, since they were not
//! user-driven.

use std::fmt;

use serde::Serialize;

use crate::picker::PickerKind;

/// Event emitted by the engine for UI notifications
#[derive(Debug, Clone)]
pub enum ComposerEvent {
    /// The document changed through a user-driven mutation
    ContentChanged {
        /// Markup with all tags stripped
        plain_text: String,
        /// Full markup content
        raw_markup: String,
    },
    /// The editable surface gained focus
    Focused,
    /// The editable surface lost focus
    Blurred,
    /// A picker overlay opened
    PickerOpened(PickerKind),
    /// A picker overlay closed
    PickerClosed(PickerKind),
    /// The link dialog opened
    LinkDialogOpened,
    /// The link dialog closed (submitted or cancelled)
    LinkDialogClosed,
    /// The autosave state machine moved to a new status
    AutosaveStatusChanged(AutosaveStatus),
}

/// Autosave persistence state
///
/// Transitions only `Idle → Saving → {Saved, Error} → Idle`; the scheduler
/// never re-enters `Saving` while a persist call is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AutosaveStatus {
    /// Nothing pending; the next mutation arms the timer
    Idle,
    /// Persistence call in flight
    Saving,
    /// Last persist succeeded; shown briefly, then reverts to Idle
    Saved,
    /// Last persist failed; shown a little longer, then reverts to Idle
    Error,
}

impl Default for AutosaveStatus {
    fn default() -> Self {
        AutosaveStatus::Idle
    }
}

impl fmt::Display for AutosaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutosaveStatus::Idle => write!(f, "Idle"),
            AutosaveStatus::Saving => write!(f, "Saving..."),
            AutosaveStatus::Saved => write!(f, "Saved"),
            AutosaveStatus::Error => write!(f, "Save failed"),
        }
    }
}
