//! TOML format types for profile files.
//!
//! These types map directly to the `profile.toml` on-disk format and are
//! deserialized via `serde` + the `toml` crate. Region and tone stay plain
//! strings here; [`parse_profile_toml`](super::parse_profile_toml) validates
//! them.

use serde::{Deserialize, Serialize};

use super::{DEFAULT_INCOTERMS, DEFAULT_TARGET_ROLE};

/// Top-level structure of a `profile.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileToml {
    #[serde(default)]
    pub profile: ProfileSection,
}

/// The `[profile]` table. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSection {
    /// Region label, e.g. "Middle East" or "middle-east".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// "formal", "neutral", or "friendly".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default = "default_target_role")]
    pub target_role: String,
    #[serde(default)]
    pub products: String,
    #[serde(default)]
    pub offerings: String,
    #[serde(default)]
    pub uniques: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default = "default_incoterms")]
    pub incoterms: String,
    #[serde(default)]
    pub phone: String,
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            region: None,
            tone: None,
            country: String::new(),
            business_name: String::new(),
            target_role: default_target_role(),
            products: String::new(),
            offerings: String::new(),
            uniques: String::new(),
            certifications: String::new(),
            incoterms: default_incoterms(),
            phone: String::new(),
        }
    }
}

fn default_target_role() -> String {
    DEFAULT_TARGET_ROLE.to_owned()
}

fn default_incoterms() -> String {
    DEFAULT_INCOTERMS.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_file() {
        let parsed: ProfileToml = toml::from_str("").expect("should parse");
        assert_eq!(parsed, ProfileToml::default());
        assert_eq!(parsed.profile.target_role, DEFAULT_TARGET_ROLE);
        assert_eq!(parsed.profile.incoterms, DEFAULT_INCOTERMS);
    }

    #[test]
    fn deserialize_full_profile() {
        let toml_str = r#"
[profile]
region = "Middle East"
tone = "friendly"
country = "UAE"
business_name = "Acme Spices"
target_role = "Head of Sourcing"
products = "Turmeric, black pepper"
offerings = """
Curcumin 5%-7%
Steam sterilized
"""
uniques = "Farm-direct sourcing"
certifications = ""
incoterms = "FOB"
phone = "+971 50-123-4567"
"#;
        let parsed: ProfileToml = toml::from_str(toml_str).expect("should parse");
        let p = parsed.profile;
        assert_eq!(p.region.as_deref(), Some("Middle East"));
        assert_eq!(p.tone.as_deref(), Some("friendly"));
        assert_eq!(p.target_role, "Head of Sourcing");
        assert_eq!(p.offerings, "Curcumin 5%-7%\nSteam sterilized\n");
        assert_eq!(p.incoterms, "FOB");
    }

    #[test]
    fn explicit_empty_incoterms_is_kept() {
        let parsed: ProfileToml =
            toml::from_str("[profile]\nincoterms = \"\"\n").expect("should parse");
        assert_eq!(parsed.profile.incoterms, "");
    }
}
