//! Controlled-content synchronization
//!
//! In controlled mode an external owner is authoritative over the
//! document: whenever the supplied value differs from the last content
//! this controller saw, the surface is overwritten. The guard compares
//! against the last *emitted* content rather than the previous prop, so a
//! reconcile never fires for the very edit it just produced — the owner
//! can feed edited content straight back in without resetting the caret.
//!
//! Internal edits are never auto-propagated outward; closing a true
//! controlled loop is the owner's job. Races between external and
//! internal writes resolve as "external write wins", with no conflict
//! detection.

use tracing::debug;

use crate::surface::DocumentSurface;

/// Reconciles externally supplied content against live edits
#[derive(Debug, Default)]
pub struct SyncController {
    /// Last content this controller wrote to the surface
    last_written: Option<String>,
    /// Last content emitted by a user-driven mutation
    last_emitted: Option<String>,
}

impl SyncController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record content produced by a user-driven mutation
    ///
    /// Called on every emission so an echoed-back value compares equal and
    /// does not trigger a rewrite.
    pub fn note_emitted(&mut self, content: &str) {
        self.last_emitted = Some(content.to_string());
    }

    /// Apply an external value if it actually differs
    ///
    /// Skipped when the value matches either the last content this
    /// controller wrote (an unchanged prop must not stomp newer edits) or
    /// the last emitted content (the echo of the edit being reconciled).
    /// Returns true when the surface was overwritten; this is the only
    /// path by which external state may override user edits.
    pub fn reconcile<S: DocumentSurface>(&mut self, external: &str, surface: &mut S) -> bool {
        if self.last_written.as_deref() == Some(external)
            || self.last_emitted.as_deref() == Some(external)
        {
            return false;
        }
        debug!(len = external.len(), "applying externally controlled content");
        surface.write_content(external);
        self.last_written = Some(external.to_string());
        self.last_emitted = Some(external.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BufferSurface;

    #[test]
    fn test_external_value_overrides_surface() {
        let mut sync = SyncController::new();
        let mut surface = BufferSurface::new("draft");
        assert!(sync.reconcile("A", &mut surface));
        assert_eq!(surface.read_content().markup, "A");
        assert!(sync.reconcile("B", &mut surface));
        assert_eq!(surface.read_content().markup, "B");
    }

    #[test]
    fn test_same_value_does_not_rewrite() {
        let mut sync = SyncController::new();
        let mut surface = BufferSurface::new("");
        assert!(sync.reconcile("A", &mut surface));
        assert!(!sync.reconcile("A", &mut surface));
    }

    #[test]
    fn test_echoed_edit_does_not_rewrite() {
        let mut sync = SyncController::new();
        let mut surface = BufferSurface::new("");
        surface.insert_text("typed by user");
        // The engine emits after every user mutation
        sync.note_emitted("typed by user");
        // Owner feeds the same edit back in; no caret-resetting rewrite
        assert!(!sync.reconcile("typed by user", &mut surface));
    }

    #[test]
    fn test_unchanged_prop_does_not_stomp_newer_edits() {
        let mut sync = SyncController::new();
        let mut surface = BufferSurface::new("");
        assert!(sync.reconcile("A", &mut surface));
        surface.insert_text("!");
        sync.note_emitted("A!");
        // The owner re-supplies the stale value it already wrote
        assert!(!sync.reconcile("A", &mut surface));
        assert_eq!(surface.read_content().markup, "A!");
    }
}
