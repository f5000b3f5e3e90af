//! Profile flags shared by every composing command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use outreach_core::profile::parse_profile_toml;
use outreach_core::{OutreachProfile, Region, Tone};

use crate::config::OutreachConfig;

/// Form fields as command-line flags. Any flag given overrides the base
/// profile (the `--profile` file, or the resolved sender defaults).
#[derive(Debug, Default, Args)]
pub struct ProfileArgs {
    /// Read profile fields from a TOML file
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,
    /// Region preset (e.g. "Middle East", middle-east)
    #[arg(long)]
    pub region: Option<Region>,
    /// Tone: formal, neutral, or friendly
    #[arg(long)]
    pub tone: Option<Tone>,
    /// Target country or market
    #[arg(long)]
    pub country: Option<String>,
    /// Your business name
    #[arg(long)]
    pub business_name: Option<String>,
    /// Role of the person you are writing to
    #[arg(long)]
    pub target_role: Option<String>,
    /// Products, comma-separated
    #[arg(long)]
    pub products: Option<String>,
    /// Product highlight (repeat for several lines)
    #[arg(long = "highlight", value_name = "LINE")]
    pub offerings: Vec<String>,
    /// Unique strength (repeat for several lines)
    #[arg(long = "strength", value_name = "LINE")]
    pub uniques: Vec<String>,
    /// Certification (repeat for several lines)
    #[arg(long = "cert", value_name = "LINE")]
    pub certifications: Vec<String>,
    /// Incoterms offered (pass "" to omit the sentence)
    #[arg(long)]
    pub incoterms: Option<String>,
    /// Your WhatsApp number in international format
    #[arg(long)]
    pub phone: Option<String>,
}

impl ProfileArgs {
    /// Build the profile: base from file or config, then flag overrides.
    pub fn resolve(&self, config: &OutreachConfig) -> Result<OutreachProfile> {
        let base = match &self.profile {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read profile file: {}", path.display()))?;
                parse_profile_toml(&content)
                    .with_context(|| format!("invalid profile file: {}", path.display()))?
            }
            None => config.base_profile.clone(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut profile: OutreachProfile) -> OutreachProfile {
        if let Some(region) = self.region {
            profile.region = region;
        }
        if let Some(tone) = self.tone {
            profile.tone = tone;
        }
        override_text(&mut profile.country, &self.country);
        override_text(&mut profile.business_name, &self.business_name);
        override_text(&mut profile.target_role, &self.target_role);
        override_text(&mut profile.products, &self.products);
        override_text(&mut profile.incoterms, &self.incoterms);
        override_text(&mut profile.phone, &self.phone);
        override_lines(&mut profile.offerings, &self.offerings);
        override_lines(&mut profile.uniques, &self.uniques);
        override_lines(&mut profile.certifications, &self.certifications);
        profile
    }
}

fn override_text(field: &mut String, flag: &Option<String>) {
    if let Some(value) = flag {
        field.clone_from(value);
    }
}

fn override_lines(field: &mut String, lines: &[String]) {
    if !lines.is_empty() {
        *field = lines.join("\n");
    }
}
