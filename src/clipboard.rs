//! System clipboard access.
//!
//! Copying is a convenience: when no clipboard is available (headless
//! session, missing display server) the failure is swallowed and reported
//! only through the return value.

/// Put `text` on the system clipboard. Returns whether it succeeded.
pub fn copy_text(text: &str) -> bool {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .is_ok()
}
