//! Regional cultural guidance.
//!
//! A fixed table of three short bullets per [`Region`]. Lookups are total:
//! every region has an entry, and string lookups that match no region fall
//! back to the generic (`Global`) guidance.

use crate::models::Region;

/// Guidance shown for a region: always exactly three entries.
pub type RegionAdvice = [&'static str; 3];

const GLOBAL_ADVICE: RegionAdvice = [
    "Be concise, courteous, and specific.",
    "Mention certifications and logistics readiness.",
    "Provide clear next steps and your availability.",
];

/// Return the guidance bullets for `region`.
pub fn region_advice(region: Region) -> RegionAdvice {
    match region {
        Region::MiddleEast => [
            "Use warm greetings; show respect and patience.",
            "Be flexible on relationship-building before hard negotiation.",
            "Avoid high-pressure tactics; emphasize trust and reliability.",
        ],
        Region::SouthAsia => [
            "Be polite and professional; build rapport first.",
            "Price and quality balance matters; highlight consistency.",
            "Follow up gently if no reply in 24-48 hours.",
        ],
        Region::SoutheastAsia => [
            "Keep tone respectful and concise.",
            "Offer samples and small trial orders.",
            "Be mindful of holidays and local time zones.",
        ],
        Region::EastAsia => [
            "Use formal tone; avoid slang.",
            "Highlight certifications, specs, and reliability.",
            "Provide precise data sheets and packaging options.",
        ],
        Region::Europe => [
            "Be concise and structured; avoid over-familiarity.",
            "Lead with certifications and compliance.",
            "Provide transparent pricing and logistics.",
        ],
        Region::Africa => [
            "Be courteous; confirm availability and lead times.",
            "Offer flexible MOQs and phased shipments.",
            "Clarify payment terms clearly.",
        ],
        Region::NorthAmerica => [
            "Be direct with clear value propositions.",
            "Lead with certifications, lead times, and pricing.",
            "Offer quick samples and references.",
        ],
        Region::SouthAmerica => [
            "Warm, friendly tone works well.",
            "Offer Spanish/Portuguese documentation if available.",
            "Discuss payment terms and logistics early.",
        ],
        Region::Global => GLOBAL_ADVICE,
    }
}

/// Look up guidance by region label. Unknown labels get the generic list.
pub fn advice_for_label(label: &str) -> RegionAdvice {
    label
        .parse::<Region>()
        .map(region_advice)
        .unwrap_or(GLOBAL_ADVICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_three_nonempty_entries() {
        for region in Region::ALL {
            let advice = region_advice(region);
            assert_eq!(advice.len(), 3);
            assert!(
                advice.iter().all(|a| !a.trim().is_empty()),
                "empty advice for {region}"
            );
        }
    }

    #[test]
    fn regions_have_distinct_guidance() {
        let mut firsts: Vec<&str> = Region::ALL.iter().map(|r| region_advice(*r)[0]).collect();
        firsts.sort();
        firsts.dedup();
        assert_eq!(firsts.len(), Region::ALL.len());
    }

    #[test]
    fn unknown_label_falls_back_to_global() {
        assert_eq!(advice_for_label("Atlantis"), region_advice(Region::Global));
        assert_eq!(advice_for_label(""), GLOBAL_ADVICE);
    }

    #[test]
    fn label_lookup_matches_enum_lookup() {
        assert_eq!(advice_for_label("east-asia"), region_advice(Region::EastAsia));
        assert_eq!(advice_for_label("Europe")[1], "Lead with certifications and compliance.");
    }
}
