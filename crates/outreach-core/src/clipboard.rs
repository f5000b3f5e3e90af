//! Copy-to-clipboard seam.
//!
//! The clipboard itself lives outside this crate; front ends supply a
//! [`Clipboard`] implementation. Whatever goes wrong, the user only ever sees
//! one of two fixed notices.

use std::fmt;

use thiserror::Error;
use tracing::warn;

/// Errors a clipboard backend can report.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool available (tried: {0})")]
    Unavailable(String),

    #[error("failed to run clipboard command {command:?}: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard command {command:?} exited with status {status}")]
    CommandFailed { command: String, status: String },
}

/// Something that can receive text for the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// User-facing result of a copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyNotice {
    Copied,
    Failed,
}

impl CopyNotice {
    pub fn message(self) -> &'static str {
        match self {
            Self::Copied => "Copied to clipboard",
            Self::Failed => "Copy failed. Select and copy manually.",
        }
    }
}

impl fmt::Display for CopyNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Copy `text` once and map the outcome to a notice. No retry.
pub fn copy_with_notice(clipboard: &mut dyn Clipboard, text: &str) -> CopyNotice {
    match clipboard.write_text(text) {
        Ok(()) => CopyNotice::Copied,
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            CopyNotice::Failed
        }
    }
}
