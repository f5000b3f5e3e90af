//! Profile TOML parser with validation.
//!
//! Parses a `profile.toml` string into an [`OutreachProfile`], validating the
//! region and tone labels. Free-text fields are taken verbatim.

use thiserror::Error;

use super::OutreachProfile;
use super::toml_format::{ProfileSection, ProfileToml};
use crate::models::{Region, Tone};

/// Errors that can occur while reading a profile file.
#[derive(Debug, Error)]
pub enum ProfileParseError {
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(
        "invalid region {0:?} (expected one of: Global, Middle East, South Asia, Southeast Asia, \
         East Asia, Europe, Africa, North America, South America)"
    )]
    InvalidRegion(String),

    #[error("invalid tone {0:?} (expected formal, neutral, or friendly)")]
    InvalidTone(String),
}

/// Parse and validate a `profile.toml` string.
pub fn parse_profile_toml(content: &str) -> Result<OutreachProfile, ProfileParseError> {
    let file: ProfileToml = toml::from_str(content)?;
    file.profile.try_into()
}

impl TryFrom<ProfileSection> for OutreachProfile {
    type Error = ProfileParseError;

    fn try_from(section: ProfileSection) -> Result<Self, Self::Error> {
        let region = match section.region.as_deref() {
            Some(label) => label
                .parse::<Region>()
                .map_err(|_| ProfileParseError::InvalidRegion(label.to_owned()))?,
            None => Region::default(),
        };
        let tone = match section.tone.as_deref() {
            Some(label) => label
                .parse::<Tone>()
                .map_err(|_| ProfileParseError::InvalidTone(label.to_owned()))?,
            None => Tone::default(),
        };

        Ok(Self {
            region,
            country: section.country,
            business_name: section.business_name,
            target_role: section.target_role,
            products: section.products,
            offerings: section.offerings,
            uniques: section.uniques,
            certifications: section.certifications,
            incoterms: section.incoterms,
            tone,
            phone: section.phone,
        })
    }
}

impl From<&OutreachProfile> for ProfileSection {
    fn from(p: &OutreachProfile) -> Self {
        Self {
            region: Some(p.region.to_string()),
            tone: Some(p.tone.to_string()),
            country: p.country.clone(),
            business_name: p.business_name.clone(),
            target_role: p.target_role.clone(),
            products: p.products.clone(),
            offerings: p.offerings.clone(),
            uniques: p.uniques.clone(),
            certifications: p.certifications.clone(),
            incoterms: p.incoterms.clone(),
            phone: p.phone.clone(),
        }
    }
}

/// Serialize a profile back into the `profile.toml` format.
pub fn render_profile_toml(profile: &OutreachProfile) -> Result<String, toml::ser::Error> {
    let file = ProfileToml {
        profile: ProfileSection::from(profile),
    };
    toml::to_string_pretty(&file)
}
