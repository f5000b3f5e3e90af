use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Buyer region preset. Drives the cultural guidance shown next to the
/// composed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "Global")]
    Global,
    #[serde(rename = "Middle East")]
    MiddleEast,
    #[serde(rename = "South Asia")]
    SouthAsia,
    #[serde(rename = "Southeast Asia")]
    SoutheastAsia,
    #[serde(rename = "East Asia")]
    EastAsia,
    #[serde(rename = "Europe")]
    Europe,
    #[serde(rename = "Africa")]
    Africa,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Region {
    /// Every region, in form order.
    pub const ALL: [Region; 9] = [
        Self::Global,
        Self::MiddleEast,
        Self::SouthAsia,
        Self::SoutheastAsia,
        Self::EastAsia,
        Self::Europe,
        Self::Africa,
        Self::NorthAmerica,
        Self::SouthAmerica,
    ];

    /// Human-readable label, as shown in the region picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::MiddleEast => "Middle East",
            Self::SouthAsia => "South Asia",
            Self::SoutheastAsia => "Southeast Asia",
            Self::EastAsia => "East Asia",
            Self::Europe => "Europe",
            Self::Africa => "Africa",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
        }
    }

    /// The region after this one in [`Region::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The region before this one in [`Region::ALL`], wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    /// Accepts the display label or a kebab/snake-case spelling, ignoring case
    /// (`"Middle East"`, `"middle-east"`, `"MIDDLE_EAST"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|r| normalize_label(r.label()) == wanted)
            .ok_or_else(|| RegionParseError(s.to_owned()))
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Error returned when parsing an invalid [`Region`] string.
#[derive(Debug, Clone)]
pub struct RegionParseError(pub String);

impl fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid region: {:?}", self.0)
    }
}

impl std::error::Error for RegionParseError {}

// ---------------------------------------------------------------------------

/// Salutation style of the introduction message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Formal,
    Neutral,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Self::Formal, Self::Neutral, Self::Friendly];

    /// Greeting word that opens the introduction message.
    pub fn salutation(self) -> &'static str {
        match self {
            Self::Formal => "Dear",
            Self::Neutral => "Hi",
            Self::Friendly => "Hello",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Formal => Self::Neutral,
            Self::Neutral => Self::Friendly,
            Self::Friendly => Self::Formal,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Formal => Self::Friendly,
            Self::Neutral => Self::Formal,
            Self::Friendly => Self::Neutral,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Formal => "formal",
            Self::Neutral => "neutral",
            Self::Friendly => "friendly",
        };
        f.write_str(s)
    }
}

impl FromStr for Tone {
    type Err = ToneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formal" => Ok(Self::Formal),
            "neutral" => Ok(Self::Neutral),
            "friendly" => Ok(Self::Friendly),
            _ => Err(ToneParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Tone`] string.
#[derive(Debug, Clone)]
pub struct ToneParseError(pub String);

impl fmt::Display for ToneParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tone: {:?} (expected formal, neutral, or friendly)", self.0)
    }
}

impl std::error::Error for ToneParseError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
