//! Configuration file management for outreach.
//!
//! Provides a TOML config file at `~/.config/spice-outreach/config.toml`
//! holding sender defaults, and a resolution chain for each sender value:
//! env var > config file > built-in default. A `--profile` file or CLI flags
//! override the result (see [`crate::profile_args`]).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::info;

use outreach_core::{OutreachProfile, Region, Tone};

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub sender: SenderSection,
    #[serde(default)]
    pub clipboard: ClipboardSection,
}

/// Values pre-filled into every new profile.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SenderSection {
    pub business_name: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub tone: Option<String>,
    pub incoterms: Option<String>,
    pub target_role: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ClipboardSection {
    /// Command that reads clipboard text on stdin, e.g. `"xclip -selection clipboard"`.
    pub command: Option<String>,
}

/// Keys accepted by `outreach config set`.
pub const SETTABLE_KEYS: [&str; 7] = [
    "sender.business_name",
    "sender.phone",
    "sender.region",
    "sender.tone",
    "sender.incoterms",
    "sender.target_role",
    "clipboard.command",
];

const TEMPLATE: &str = r#"# spice-outreach configuration.
#
# Sender defaults fill every new profile. Environment variables
# (OUTREACH_BUSINESS_NAME, OUTREACH_PHONE, OUTREACH_REGION, OUTREACH_TONE)
# take precedence over this file; --profile and CLI flags take precedence
# over both.

[sender]
# business_name = "Acme Spices"
# phone = "+971 50 123 4567"
# region = "Middle East"
# tone = "formal"
# incoterms = "FOB, CIF, EXW (as needed)"
# target_role = "Procurement Manager / Import Manager"

[clipboard]
# command = "xclip -selection clipboard"
"#;

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the outreach config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/spice-outreach` or
/// `~/.config/spice-outreach`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("spice-outreach");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("spice-outreach")
}

/// Return the path to the outreach config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load the config file. A missing file yields the empty config; a file that
/// exists but does not parse is an error.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Write the commented template config, creating parent dirs as needed.
pub fn write_template(force: bool) -> Result<PathBuf> {
    let path = config_path();
    if path.exists() && !force {
        bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    std::fs::write(&path, TEMPLATE)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    info!(path = %path.display(), "wrote config template");
    Ok(path)
}

/// Set one `section.key` in the config file, keeping comments and layout.
///
/// Starts from the template when no config file exists yet.
pub fn set_value(key: &str, value: &str) -> Result<PathBuf> {
    let Some((section, field)) = key.split_once('.').filter(|_| SETTABLE_KEYS.contains(&key))
    else {
        bail!(
            "unknown config key {key:?} (expected one of: {})",
            SETTABLE_KEYS.join(", ")
        );
    };

    match field {
        "region" => {
            value.parse::<Region>()?;
        }
        "tone" => {
            value.parse::<Tone>()?;
        }
        _ => {}
    }

    let path = config_path();
    let content = if path.exists() {
        std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?
    } else {
        TEMPLATE.to_owned()
    };

    let mut doc: toml_edit::DocumentMut = content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("failed to parse {} as TOML document", path.display()))?;

    if doc.get(section).is_none() {
        doc.insert(section, toml_edit::table());
    }
    let table = doc
        .get_mut(section)
        .and_then(|v| v.as_table_mut())
        .with_context(|| format!("[{section}] in {} is not a table", path.display()))?;
    table.insert(field, toml_edit::value(value));

    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    std::fs::write(&path, doc.to_string())
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(key, path = %path.display(), "updated config");
    Ok(path)
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct OutreachConfig {
    /// Profile pre-filled with the resolved sender defaults.
    pub base_profile: OutreachProfile,
    pub clipboard_command: Option<String>,
}

impl OutreachConfig {
    /// Resolve configuration using the chain: env var > config file > default.
    pub fn resolve() -> Result<Self> {
        let file = load_config()?;
        let sender = &file.sender;
        let mut profile = OutreachProfile::default();

        if let Some(name) = pick("OUTREACH_BUSINESS_NAME", &sender.business_name) {
            profile.business_name = name;
        }
        if let Some(phone) = pick("OUTREACH_PHONE", &sender.phone) {
            profile.phone = phone;
        }
        if let Some(region) = pick("OUTREACH_REGION", &sender.region) {
            profile.region = region
                .parse()
                .with_context(|| "sender region from OUTREACH_REGION or config file")?;
        }
        if let Some(tone) = pick("OUTREACH_TONE", &sender.tone) {
            profile.tone = tone
                .parse()
                .with_context(|| "sender tone from OUTREACH_TONE or config file")?;
        }
        if let Some(incoterms) = sender.incoterms.clone() {
            profile.incoterms = incoterms;
        }
        if let Some(role) = sender.target_role.clone() {
            profile.target_role = role;
        }

        Ok(Self {
            base_profile: profile,
            clipboard_command: file.clipboard.command,
        })
    }
}

/// Only the configured clipboard command; sender values are not validated.
pub fn load_clipboard_command() -> Result<Option<String>> {
    Ok(load_config()?.clipboard.command)
}

/// Env var if set, otherwise the config file value.
fn pick(env_var: &str, file_value: &Option<String>) -> Option<String> {
    std::env::var(env_var).ok().or_else(|| file_value.clone())
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{ScopedEnv, lock_env};

    const ENV_VARS: [&str; 4] = [
        "OUTREACH_BUSINESS_NAME",
        "OUTREACH_PHONE",
        "OUTREACH_REGION",
        "OUTREACH_TONE",
    ];

    fn isolated_env(tmp: &tempfile::TempDir) -> ScopedEnv {
        let mut env = ScopedEnv::new();
        env.set("XDG_CONFIG_HOME", tmp.path());
        for var in ENV_VARS {
            env.remove(var);
        }
        env
    }

    #[test]
    fn config_path_ends_with_expected_filename() {
        let path = config_path();
        assert!(
            path.ends_with("spice-outreach/config.toml"),
            "unexpected config path: {}",
            path.display()
        );
    }

    #[test]
    fn template_parses_as_empty_config() {
        let cfg: ConfigFile = toml::from_str(TEMPLATE).unwrap();
        assert!(cfg.sender.business_name.is_none());
        assert!(cfg.clipboard.command.is_none());
    }

    #[test]
    fn resolve_defaults_when_nothing_set() {
        let _lock = lock_env();
        let tmp = tempfile::TempDir::new().unwrap();
        let _env = isolated_env(&tmp);

        let cfg = OutreachConfig::resolve().unwrap();
        assert_eq!(cfg.base_profile, OutreachProfile::default());
        assert!(cfg.clipboard_command.is_none());
    }

    #[test]
    fn resolve_reads_config_file() {
        let _lock = lock_env();
        let tmp = tempfile::TempDir::new().unwrap();
        let _env = isolated_env(&tmp);

        let dir = tmp.path().join("spice-outreach");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("config.toml"),
            "[sender]\nbusiness_name = \"Acme Spices\"\nregion = \"europe\"\ntone = \"friendly\"\n\
             [clipboard]\ncommand = \"wl-copy\"\n",
        )
        .unwrap();

        let cfg = OutreachConfig::resolve().unwrap();
        assert_eq!(cfg.base_profile.business_name, "Acme Spices");
        assert_eq!(cfg.base_profile.region, Region::Europe);
        assert_eq!(cfg.base_profile.tone, Tone::Friendly);
        assert_eq!(cfg.clipboard_command.as_deref(), Some("wl-copy"));
    }

    #[test]
    fn resolve_with_env_var_overrides_config_file() {
        let _lock = lock_env();
        let tmp = tempfile::TempDir::new().unwrap();
        let mut env = isolated_env(&tmp);

        let dir = tmp.path().join("spice-outreach");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[sender]\nphone = \"+1 555\"\n").unwrap();
        env.set("OUTREACH_PHONE", "+44 20 7946");

        let cfg = OutreachConfig::resolve().unwrap();
        assert_eq!(cfg.base_profile.phone, "+44 20 7946");
    }

    #[test]
    fn resolve_rejects_bad_region() {
        let _lock = lock_env();
        let tmp = tempfile::TempDir::new().unwrap();
        let mut env = isolated_env(&tmp);
        env.set("OUTREACH_REGION", "Narnia");

        let err = OutreachConfig::resolve().unwrap_err();
        assert!(format!("{err:#}").contains("Narnia"), "unexpected error: {err:#}");
    }

    #[test]
    fn clipboard_command_ignores_bad_sender_env() {
        let _lock = lock_env();
        let tmp = tempfile::TempDir::new().unwrap();
        let mut env = isolated_env(&tmp);
        env.set("OUTREACH_TONE", "shouty");
        set_value("clipboard.command", "wl-copy --primary").unwrap();

        assert!(OutreachConfig::resolve().is_err());
        assert_eq!(
            load_clipboard_command().unwrap().as_deref(),
            Some("wl-copy --primary")
        );
    }

    #[test]
    fn write_template_refuses_to_overwrite() {
        let _lock = lock_env();
        let tmp = tempfile::TempDir::new().unwrap();
        let _env = isolated_env(&tmp);

        let path = write_template(false).unwrap();
        assert!(path.exists());
        let err = write_template(false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        write_template(true).unwrap();
    }

    #[test]
    fn set_value_preserves_comments() {
        let _lock = lock_env();
        let tmp = tempfile::TempDir::new().unwrap();
        let _env = isolated_env(&tmp);

        write_template(false).unwrap();
        set_value("sender.business_name", "Acme Spices").unwrap();
        set_value("clipboard.command", "pbcopy").unwrap();

        let content = std::fs::read_to_string(config_path()).unwrap();
        assert!(content.starts_with("# spice-outreach configuration."));
        assert!(content.contains("business_name = \"Acme Spices\""));

        let cfg = load_config().unwrap();
        assert_eq!(cfg.sender.business_name.as_deref(), Some("Acme Spices"));
        assert_eq!(cfg.clipboard.command.as_deref(), Some("pbcopy"));
    }

    #[test]
    fn set_value_creates_file_when_missing() {
        let _lock = lock_env();
        let tmp = tempfile::TempDir::new().unwrap();
        let _env = isolated_env(&tmp);

        set_value("sender.tone", "neutral").unwrap();
        let cfg = load_config().unwrap();
        assert_eq!(cfg.sender.tone.as_deref(), Some("neutral"));
    }

    #[test]
    fn set_value_validates_key_and_enums() {
        let _lock = lock_env();
        let tmp = tempfile::TempDir::new().unwrap();
        let _env = isolated_env(&tmp);

        assert!(set_value("sender.email", "x").is_err());
        assert!(set_value("business_name", "x").is_err());
        assert!(set_value("sender.tone", "shouty").is_err());
        assert!(!config_path().exists());
    }
}
