//! src/platform/clipboard.rs
//! ============================================================================
//! # Clipboard Providers
//!
//! The rest of the program reads and writes the clipboard only through
//! [`ClipboardProvider`]. [`SystemClipboard`] talks to the desktop through
//! `arboard`; [`MemoryClipboard`] keeps the text in-process.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use arboard::Clipboard;
use tracing::{debug, trace};

use crate::error::AppError;

/// Text access to a clipboard.
pub trait ClipboardProvider {
    /// Current clipboard text. `None` when the clipboard is empty, holds no
    /// text, or cannot be read.
    fn get_current_text(&mut self) -> Option<String>;

    /// Take ownership of the clipboard with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// The desktop clipboard.
///
/// The `arboard` handle is kept for the whole run: on X11 the selection is
/// served by this process and dropping the handle would drop what we pasted.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, AppError> {
        let inner = Clipboard::new().map_err(AppError::clipboard)?;
        debug!("System clipboard opened");
        Ok(Self { inner })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_current_text(&mut self) -> Option<String> {
        match self.inner.get_text() {
            Ok(text) if text.is_empty() => None,
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(err) => {
                trace!("Clipboard read failed: {err}");
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        self.inner.set_text(text).map_err(AppError::clipboard)
    }
}

/// In-process clipboard. Clones share the same cell, so a test can keep one
/// handle to play the part of another application.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Rc<RefCell<Option<String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents as if another application had copied `text`.
    pub fn copy(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = Some(text.into());
    }

    pub fn empty(&self) {
        *self.text.borrow_mut() = None;
    }

    pub fn peek(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Make every following `set_text` fail.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_current_text(&mut self) -> Option<String> {
        self.text.borrow().clone().filter(|text| !text.is_empty())
    }

    fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.reject_writes.get() {
            return Err(AppError::clipboard("clipboard refused the write"));
        }
        self.copy(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_shares_state() {
        let outside = MemoryClipboard::new();
        let mut ours = outside.clone();

        assert_eq!(ours.get_current_text(), None);
        outside.copy("hello");
        assert_eq!(ours.get_current_text().as_deref(), Some("hello"));

        ours.set_text("world").unwrap();
        assert_eq!(outside.peek().as_deref(), Some("world"));
    }

    #[test]
    fn test_memory_clipboard_empty_text_reads_as_none() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.copy("");
        assert_eq!(clipboard.get_current_text(), None);

        clipboard.copy("  ");
        assert_eq!(clipboard.get_current_text().as_deref(), Some("  "));

        clipboard.empty();
        assert_eq!(clipboard.get_current_text(), None);
    }

    #[test]
    fn test_memory_clipboard_rejected_write() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.copy("kept");
        clipboard.reject_writes(true);

        assert!(matches!(
            clipboard.set_text("lost"),
            Err(AppError::Clipboard(_))
        ));
        assert_eq!(clipboard.peek().as_deref(), Some("kept"));
    }
}
