//! Outreach message composer for spice exporters.
//!
//! Turns an [`OutreachProfile`] into an introduction message, a follow-up
//! message, a step-by-step contact plan, regional guidance, and WhatsApp share
//! links. Composition is pure and never fails; blank fields fall back to
//! placeholder text.

pub mod advice;
pub mod clipboard;
pub mod compose;
pub mod links;
pub mod models;
pub mod profile;

pub use advice::{RegionAdvice, advice_for_label, region_advice};
pub use clipboard::{Clipboard, ClipboardError, CopyNotice, copy_with_notice};
pub use compose::{Block, ComposedOutput, compose};
pub use models::{Region, Tone};
pub use profile::OutreachProfile;
