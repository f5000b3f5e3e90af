//! `outreach init`, `outreach config`, and `outreach profile template`.

use anyhow::{Context, Result};

use outreach_core::profile::render_profile_toml;

use crate::ConfigCommands;
use crate::config::{self, OutreachConfig};

/// Execute `outreach init`: write the commented config template.
pub fn run_init(force: bool) -> Result<()> {
    let path = config::write_template(force)?;
    println!("Config written to {}", path.display());
    println!();
    println!("Next: run `outreach config set sender.business_name \"Your Company\"`.");
    Ok(())
}

pub fn run_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let resolved = OutreachConfig::resolve()?;
            let path = config::config_path();
            let state = if path.exists() { "" } else { " (not found, using defaults)" };
            println!("# config file: {}{state}", path.display());
            let sender = &resolved.base_profile;
            println!("business_name = {:?}", sender.business_name);
            println!("phone         = {:?}", sender.phone);
            println!("region        = {:?}", sender.region.label());
            println!("tone          = {:?}", sender.tone.to_string());
            println!("incoterms     = {:?}", sender.incoterms);
            println!("target_role   = {:?}", sender.target_role);
            match resolved.clipboard_command.as_deref() {
                Some(cmd) => println!("clipboard     = {cmd:?}"),
                None => println!("clipboard     = (auto-detect)"),
            }
        }
        ConfigCommands::Set { key, value } => {
            let path = config::set_value(&key, &value)?;
            println!("Set {key} = {value:?} in {}", path.display());
        }
    }
    Ok(())
}

/// Execute `outreach profile template`: print a profile file seeded with the
/// resolved sender defaults.
pub fn run_profile_template() -> Result<()> {
    let resolved = OutreachConfig::resolve()?;
    let rendered =
        render_profile_toml(&resolved.base_profile).context("failed to render profile TOML")?;
    println!("# Edit and pass with --profile <FILE>.");
    print!("{rendered}");
    Ok(())
}
