//! Share-link tests: phone sanitization and percent-encoding round trips.

use percent_encoding::percent_decode_str;

use outreach_core::compose::intro_message;
use outreach_core::links::{SHARE_BASE, direct_number_link, sanitize_phone, share_link};
use outreach_core::{OutreachProfile, compose};

fn decode_text_param(link: &str) -> String {
    let (_, encoded) = link.split_once("?text=").expect("link should carry text");
    percent_decode_str(encoded)
        .decode_utf8()
        .expect("decoded text should be UTF-8")
        .into_owned()
}

#[test]
fn direct_link_uses_sanitized_digits() {
    assert_eq!(sanitize_phone("+971 50-123-4567"), "971501234567");

    let profile = OutreachProfile::default().phone("+971 50-123-4567");
    let out = compose(&profile);
    let link = out.direct_link.expect("number should yield a link");
    assert!(link.contains("wa.me/971501234567"), "got {link}");
    assert_eq!(decode_text_param(&link), intro_message(&profile));
}

#[test]
fn no_direct_link_for_blank_phone() {
    assert!(compose(&OutreachProfile::default()).direct_link.is_none());
    assert!(compose(&OutreachProfile::default().phone("   ")).direct_link.is_none());
    assert!(direct_number_link("", "anything").is_none());
}

#[test]
fn share_link_round_trips_reserved_characters() {
    let message = "Price & terms?\nLine 2: 50% off #1 / a+b=c é 🌶";
    let link = share_link(message);
    assert!(link.starts_with(SHARE_BASE));

    let (_, encoded) = link.split_once("?text=").unwrap();
    assert!(
        !encoded.contains(['&', '?', '\n', ' ', '#', '/', '+', '=']),
        "unencoded reserved character in {encoded}"
    );
    assert_eq!(decode_text_param(&link), message);
}

#[test]
fn composed_links_decode_to_their_messages() {
    let profile = OutreachProfile::default()
        .business_name("Acme & Sons")
        .country("UAE")
        .certifications("HALAL / KOSHER\nISO 22000");
    let out = compose(&profile);
    assert_eq!(decode_text_param(&out.intro_link), out.intro);
    assert_eq!(decode_text_param(&out.follow_up_link), out.follow_up);
}
