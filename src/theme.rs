//! Global CSS styles for the Scribe desktop shell.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #101114;
  --bg-raised: #17181c;
  --border: #2a2c33;
  --accent: #4f8cff;
  --accent-soft: rgba(79, 140, 255, 0.15);
  --danger: #ff5266;

  --text-primary: #f2f3f5;
  --text-secondary: rgba(242, 243, 245, 0.7);
  --text-muted: rgba(242, 243, 245, 0.45);

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

.app {
  max-width: 620px;
  margin: 0 auto;
  padding: 24px 16px;
}

.app-title {
  font-size: 20px;
  font-weight: 600;
  margin: 0 0 16px;
}

.app-loading {
  color: var(--text-muted);
  padding: 32px 0;
  text-align: center;
}

/* === Composer === */
.composer {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 10px;
  overflow: visible;
}

.composer-toolbar {
  display: flex;
  flex-wrap: wrap;
  gap: 4px;
  padding: 8px;
  border-bottom: 1px solid var(--border);
}

.toolbar-btn {
  background: transparent;
  border: 1px solid transparent;
  border-radius: 6px;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: 13px;
  min-width: 30px;
  padding: 4px 6px;
  cursor: pointer;
}

.toolbar-btn:hover {
  background: var(--accent-soft);
  color: var(--text-primary);
}

.toolbar-spacer { flex: 1; }

.composer-surface { position: relative; }

.composer-textarea {
  width: 100%;
  min-height: 160px;
  background: transparent;
  border: none;
  outline: none;
  resize: vertical;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: 14px;
  line-height: 1.5;
  padding: 12px;
}

.composer-textarea::placeholder { color: var(--text-muted); }

/* === Link dialog === */
.link-dialog {
  display: flex;
  gap: 6px;
  padding: 8px;
  border-bottom: 1px solid var(--border);
}

.link-dialog-input {
  flex: 1;
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 6px;
  color: var(--text-primary);
  padding: 6px 8px;
}

.link-dialog-btn {
  background: var(--accent);
  border: none;
  border-radius: 6px;
  color: #fff;
  padding: 6px 10px;
  cursor: pointer;
}

.link-dialog-btn--cancel {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--text-secondary);
}

/* === Picker overlays === */
.picker-overlay {
  position: absolute;
  left: 12px;
  bottom: 8px;
  min-width: 240px;
  max-height: 260px;
  overflow-y: auto;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.5);
  z-index: 10;
}

.picker-status {
  color: var(--text-muted);
  font-size: 13px;
  padding: 10px 12px;
}

.mention-row {
  display: flex;
  align-items: center;
  gap: 8px;
  width: 100%;
  background: transparent;
  border: none;
  color: var(--text-primary);
  padding: 8px 12px;
  text-align: left;
  cursor: pointer;
}

.mention-row:hover { background: var(--accent-soft); }

.mention-avatar {
  width: 24px;
  height: 24px;
  border-radius: 50%;
}

.mention-username {
  color: var(--text-muted);
  font-size: 12px;
}

/* === Emoji picker === */
.emoji-search {
  width: calc(100% - 16px);
  margin: 8px;
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 6px;
  color: var(--text-primary);
  padding: 6px 8px;
}

.emoji-categories {
  display: flex;
  flex-wrap: wrap;
  gap: 4px;
  padding: 0 8px 8px;
}

.emoji-categories--inactive { opacity: 0.4; }

.pill {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 999px;
  color: var(--text-secondary);
  font-size: 12px;
  padding: 2px 8px;
  cursor: pointer;
}

.pill.selected {
  background: var(--accent-soft);
  border-color: var(--accent);
  color: var(--text-primary);
}

.emoji-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 2px;
  padding: 0 8px 8px;
}

.emoji-cell {
  background: transparent;
  border: none;
  border-radius: 6px;
  font-size: 18px;
  padding: 4px;
  cursor: pointer;
}

.emoji-cell:hover { background: var(--accent-soft); }

/* === Footer === */
.composer-footer {
  display: flex;
  align-items: center;
  gap: 12px;
  border-top: 1px solid var(--border);
  color: var(--text-muted);
  font-size: 12px;
  padding: 6px 12px;
}

.footer-spacer { flex: 1; }

.char-count--over { color: var(--danger); }

.autosave-status { color: var(--text-secondary); }
.autosave-status--error { color: var(--danger); }
"#;
