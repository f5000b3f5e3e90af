//! Outreach profile: the exporter's form inputs, plus its TOML file format.

pub mod parser;
pub mod toml_format;

pub use parser::{ProfileParseError, parse_profile_toml, render_profile_toml};
pub use toml_format::{ProfileSection, ProfileToml};

use serde::{Deserialize, Serialize};

use crate::models::{Region, Tone};

/// Default recipient role addressed by both messages.
pub const DEFAULT_TARGET_ROLE: &str = "Procurement Manager / Import Manager";

/// Default Incoterms line offered in the introduction.
pub const DEFAULT_INCOTERMS: &str = "FOB, CIF, EXW (as needed)";

/// Everything the exporter has typed into the form at a point in time.
///
/// All free-text fields may be blank; the composer substitutes fallbacks
/// instead of failing. Use [`OutreachProfile::default`] for the initial form
/// state, then the builder-style setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachProfile {
    pub region: Region,
    /// Target country or market, e.g. `UAE`.
    pub country: String,
    pub business_name: String,
    pub target_role: String,
    /// Comma-separated product list; kept verbatim.
    pub products: String,
    /// Product highlights, one per line.
    pub offerings: String,
    /// Unique strengths, one per line.
    pub uniques: String,
    /// Certifications, one per line.
    pub certifications: String,
    pub incoterms: String,
    pub tone: Tone,
    /// WhatsApp number in international format.
    pub phone: String,
}

impl Default for OutreachProfile {
    fn default() -> Self {
        Self {
            region: Region::default(),
            country: String::new(),
            business_name: String::new(),
            target_role: DEFAULT_TARGET_ROLE.to_owned(),
            products: String::new(),
            offerings: String::new(),
            uniques: String::new(),
            certifications: String::new(),
            incoterms: DEFAULT_INCOTERMS.to_owned(),
            tone: Tone::default(),
            phone: String::new(),
        }
    }
}

impl OutreachProfile {
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = name.into();
        self
    }

    pub fn target_role(mut self, role: impl Into<String>) -> Self {
        self.target_role = role.into();
        self
    }

    pub fn products(mut self, products: impl Into<String>) -> Self {
        self.products = products.into();
        self
    }

    pub fn offerings(mut self, offerings: impl Into<String>) -> Self {
        self.offerings = offerings.into();
        self
    }

    pub fn uniques(mut self, uniques: impl Into<String>) -> Self {
        self.uniques = uniques.into();
        self
    }

    pub fn certifications(mut self, certs: impl Into<String>) -> Self {
        self.certifications = certs.into();
        self
    }

    pub fn incoterms(mut self, incoterms: impl Into<String>) -> Self {
        self.incoterms = incoterms.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }
}
