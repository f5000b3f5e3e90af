//! Message composition: one pure derivation from an [`OutreachProfile`] to
//! every output block and link.
//!
//! Nothing here is cached. Callers that hold mutable form state call
//! [`compose`] again after each change.

pub mod messages;

pub use messages::{BULLET, PLACEHOLDER, follow_up_message, intro_message, step_plan, to_bullets};

use serde::Serialize;
use tracing::debug;

use crate::advice::{RegionAdvice, region_advice};
use crate::links::{direct_number_link, share_link};
use crate::profile::OutreachProfile;

/// Every derived output for one profile snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedOutput {
    pub advice: RegionAdvice,
    pub intro: String,
    pub follow_up: String,
    pub step_plan: String,
    pub intro_link: String,
    pub follow_up_link: String,
    /// Present only when the phone number has at least one digit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_link: Option<String>,
}

impl ComposedOutput {
    /// Pretty-printed JSON of all blocks and links.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Text of one output block.
    pub fn block(&self, block: Block) -> &str {
        match block {
            Block::Intro => &self.intro,
            Block::FollowUp => &self.follow_up,
            Block::Plan => &self.step_plan,
        }
    }
}

/// The three copyable output blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Intro,
    FollowUp,
    Plan,
}

/// Derive all outputs from `profile`.
pub fn compose(profile: &OutreachProfile) -> ComposedOutput {
    debug!(region = %profile.region, tone = %profile.tone, "composing outreach messages");

    let intro = intro_message(profile);
    let follow_up = follow_up_message(profile);
    let intro_link = share_link(&intro);
    let follow_up_link = share_link(&follow_up);
    let direct_link = direct_number_link(&profile.phone, &intro);

    ComposedOutput {
        advice: region_advice(profile.region),
        intro,
        follow_up,
        step_plan: step_plan(),
        intro_link,
        follow_up_link,
        direct_link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    #[test]
    fn compose_wires_advice_to_region() {
        let out = compose(&OutreachProfile::default().region(Region::Africa));
        assert_eq!(out.advice, region_advice(Region::Africa));
    }

    #[test]
    fn links_carry_their_messages() {
        let out = compose(&OutreachProfile::default().phone("+1 555 0100"));
        assert_eq!(out.intro_link, share_link(&out.intro));
        assert_eq!(out.follow_up_link, share_link(&out.follow_up));
        assert!(
            out.direct_link
                .as_deref()
                .is_some_and(|l| l.starts_with("https://wa.me/15550100?text=Dear"))
        );
    }

    #[test]
    fn json_omits_missing_direct_link() {
        let out = compose(&OutreachProfile::default());
        let json = out.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("direct_link").is_none());
        assert_eq!(value["advice"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["intro"].as_str(), Some(out.intro.as_str()));
    }

    #[test]
    fn block_selects_text() {
        let out = compose(&OutreachProfile::default());
        assert_eq!(out.block(Block::Plan), step_plan());
        assert_eq!(out.block(Block::FollowUp), out.follow_up);
    }
}
