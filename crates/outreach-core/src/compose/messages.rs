//! Message templates: introduction, follow-up, and the outreach step plan.

use crate::profile::OutreachProfile;

/// Stand-in for a blank business name or phone number.
pub const PLACEHOLDER: &str = "?";

/// Marker placed before each bulleted line.
pub const BULLET: &str = "?";

const FALLBACK_COMPANY: &str = "our company";
const FALLBACK_PRODUCTS_INTRO: &str = "high-quality spices";
const FALLBACK_PRODUCTS_FOLLOW_UP: &str = "our spices";

const STEPS: [&str; 8] = [
    "Research: Identify verified buyers and confirm WhatsApp contact.",
    "Timing: Message during business hours in their time zone.",
    "Introduction: Send the crafted message with clear value and next steps.",
    "Assets: Attach spec sheet, certifications, and product photos on request.",
    "Engagement: Ask 2-3 concise questions (MOQ, packaging, delivery terms).",
    "Follow-up: If no response in 48 hours, send the follow-up message.",
    "Negotiation: Clarify incoterms, lead times, payment, and sampling.",
    "Relationship: Be responsive, transparent, and consistent in communication.",
];

/// Trimmed value, or `None` if the field is empty or whitespace only.
fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Turn a one-per-line field into bulleted lines. Blank lines are dropped.
pub fn to_bullets(items: &str) -> String {
    items
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{BULLET} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A headed bullet section, or nothing at all when the field is blank.
fn section(header: &str, items: &str) -> String {
    match non_blank(items) {
        Some(_) => format!("\n{header}\n{}", to_bullets(items)),
        None => String::new(),
    }
}

/// Build the introduction message.
pub fn intro_message(profile: &OutreachProfile) -> String {
    let business = non_blank(&profile.business_name);
    let signer = business.unwrap_or(PLACEHOLDER);
    let company = business.unwrap_or(FALLBACK_COMPANY);
    let products = non_blank(&profile.products).unwrap_or(FALLBACK_PRODUCTS_INTRO);
    let phone = non_blank(&profile.phone).unwrap_or(PLACEHOLDER);

    let country_clause = non_blank(&profile.country)
        .map(|country| format!(" to buyers in {country}"))
        .unwrap_or_default();
    let incoterms = non_blank(&profile.incoterms)
        .map(|terms| format!(" Incoterms: {terms}."))
        .unwrap_or_default();

    let sections = [
        section("Product highlights:", &profile.offerings),
        section("Unique strengths:", &profile.uniques),
        section("Certifications:", &profile.certifications),
    ]
    .concat();

    format!(
        "{salutation} {role},\n\
         \n\
         I hope you are well. My name is {signer} from {company}, supplying {products}{country_clause}.\n\
         \n\
         We support international buyers with consistent quality, transparent pricing, and reliable shipments.{incoterms}\n\
         {sections}\n\
         \n\
         Could we share a brief spec sheet and discuss your current requirements? \
         I can send samples and indicative pricing right away.\n\
         \n\
         Best regards,\n\
         {signer}\n\
         WhatsApp: {phone}",
        salutation = profile.tone.salutation(),
        role = profile.target_role.trim(),
    )
}

/// Build the follow-up message sent after 48 hours without a reply.
pub fn follow_up_message(profile: &OutreachProfile) -> String {
    let products = non_blank(&profile.products).unwrap_or(FALLBACK_PRODUCTS_FOLLOW_UP);
    format!(
        "Hello {role},\n\
         \n\
         Following up on my earlier message regarding {products}. \
         I would be happy to share COAs, specifications, and samples. \
         Do you have a preferred MOQ, packaging, and delivery timeline?\n\
         \n\
         Thank you!",
        role = profile.target_role.trim(),
    )
}

/// The fixed eight-step contact plan, numbered `1.` through `8.`.
pub fn step_plan() -> String {
    STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
