//! WhatsApp share links.
//!
//! Message text is percent-encoded with the same reserved set as JavaScript's
//! `encodeURIComponent`: everything except ASCII alphanumerics and
//! `- _ . ! ~ * ' ( )` becomes `%XX` over the UTF-8 bytes.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

/// Base of every share link.
pub const SHARE_BASE: &str = "https://wa.me/";

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `text` for use as a query parameter value.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Link that opens WhatsApp with `message` pre-filled and no recipient chosen.
pub fn share_link(message: &str) -> String {
    format!("{SHARE_BASE}?text={}", encode_component(message))
}

/// Reduce a typed phone number to the digits WhatsApp expects.
///
/// Keeps ASCII digits and `+`, then drops a single leading `+`. Nothing else
/// is checked: any length or country code passes through.
pub fn sanitize_phone(raw: &str) -> String {
    let kept: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    match kept.strip_prefix('+') {
        Some(rest) => rest.to_owned(),
        None => kept,
    }
}

/// Link addressed to `phone` with `message` pre-filled.
///
/// Returns `None` when the number sanitizes to nothing; callers hide the
/// control in that case.
pub fn direct_number_link(phone: &str, message: &str) -> Option<String> {
    let number = sanitize_phone(phone);
    if number.is_empty() {
        debug!(raw = phone, "phone number has no digits, skipping direct link");
        return None;
    }
    Some(format!(
        "{SHARE_BASE}{number}?text={}",
        encode_component(message)
    ))
}
