//! Clipboard capability consumed by the scratch pad.
//!
//! The pad only sees the `ClipboardCapability` trait. `SystemClipboard` talks
//! to the OS through `arboard`; `MemoryClipboard` keeps text in-process for
//! tests and headless hosts.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    CapabilityUnavailable,
    #[error("clipboard operation failed: {0}")]
    CapabilityFailure(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Read/write access to a text clipboard. Either call may fail.
pub trait ClipboardCapability {
    fn name(&self) -> &str;
    fn read_text(&mut self) -> Result<String>;
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard.
///
/// Opening can fail (no display server, unsupported platform); the handle
/// then stays usable and reports `CapabilityUnavailable` on every call.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("available", &self.is_available())
            .finish()
    }
}

impl SystemClipboard {
    pub fn open() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("Clipboard not available, copy/paste disabled: {e}");
                None
            }
        };
        Self { inner }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl ClipboardCapability for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    fn read_text(&mut self) -> Result<String> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or(ClipboardError::CapabilityUnavailable)?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            // Nothing (or nothing textual) on the clipboard
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or(ClipboardError::CapabilityUnavailable)?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        match e {
            arboard::Error::ClipboardNotSupported => ClipboardError::CapabilityUnavailable,
            other => ClipboardError::CapabilityFailure(other.to_string()),
        }
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: String,
    failure: Option<ClipboardError>,
    writes: usize,
}

/// An in-process clipboard.
///
/// Clones share the same contents, so a test can keep one handle while the
/// pad owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::new();
        clipboard.state.borrow_mut().contents = text.to_string();
        clipboard
    }

    /// A clipboard whose every operation fails with `error`.
    pub fn failing(error: ClipboardError) -> Self {
        let clipboard = Self::new();
        clipboard.state.borrow_mut().failure = Some(error);
        clipboard
    }

    /// A clipboard that behaves as if the platform had none.
    pub fn unavailable() -> Self {
        Self::failing(ClipboardError::CapabilityUnavailable)
    }

    pub fn contents(&self) -> String {
        self.state.borrow().contents.clone()
    }

    pub fn set_contents(&self, text: &str) {
        self.state.borrow_mut().contents = text.to_string();
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    fn check(&self) -> Result<()> {
        match &self.state.borrow().failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl ClipboardCapability for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn read_text(&mut self) -> Result<String> {
        self.check()?;
        Ok(self.contents())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.check()?;
        let mut state = self.state.borrow_mut();
        state.contents = text.to_string();
        state.writes += 1;
        Ok(())
    }
}
