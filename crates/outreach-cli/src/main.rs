mod advice_cmd;
mod clipboard;
mod compose_cmd;
mod config;
mod config_cmds;
mod profile_args;
mod tui;

#[cfg(test)]
mod test_util;

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use outreach_core::{Block, OutreachProfile, Region};

use clipboard::SystemClipboard;
use compose_cmd::{BlockArg, MessageArg, OutputFormat};
use config::OutreachConfig;
use profile_args::ProfileArgs;

#[derive(Parser)]
#[command(
    name = "outreach",
    about = "Compose WhatsApp outreach messages for spice buyers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print guidance, intro, follow-up, plan, and share links
    Compose {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Copy one block to the clipboard after printing
        #[arg(long, value_enum)]
        copy: Option<BlockArg>,
    },
    /// Print only the introduction message
    Intro {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Also copy it to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Print only the follow-up message
    FollowUp {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Also copy it to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Print the step-by-step outreach plan
    Plan {
        /// Also copy it to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Show cultural guidance for a region
    Advice {
        /// Region preset
        #[arg(long, default_value_t = Region::Global)]
        region: Region,
        /// Show every region
        #[arg(long, conflicts_with = "region")]
        all: bool,
    },
    /// Print WhatsApp share links
    Link {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Which message to link
        #[arg(long, value_enum, default_value_t = MessageArg::Intro)]
        message: MessageArg,
        /// Link this text instead of a composed message
        #[arg(long)]
        text: Option<String>,
    },
    /// Reduce a phone number to the digits used in wa.me links
    SanitizePhone {
        /// Phone number as typed, e.g. "+971 50-123-4567"
        number: String,
    },
    /// Profile file helpers
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Interactive form with live preview
    Form {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Write a commented config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Inspect or edit the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Print a profile TOML seeded with your sender defaults
    Template,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show resolved sender defaults
    Show,
    /// Set one key, e.g. `sender.business_name "Acme Spices"`
    Set {
        /// Dotted key (sender.business_name, sender.phone, sender.region,
        /// sender.tone, sender.incoterms, sender.target_role, clipboard.command)
        key: String,
        /// New value
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compose {
            profile,
            format,
            copy,
        } => {
            let resolved = OutreachConfig::resolve()?;
            let profile = profile.resolve(&resolved)?;
            compose_cmd::run_compose(
                &profile,
                format,
                copy,
                resolved.clipboard_command.as_deref(),
            )?;
        }
        Commands::Intro { profile, copy } => {
            let resolved = OutreachConfig::resolve()?;
            let profile = profile.resolve(&resolved)?;
            compose_cmd::run_block(
                &profile,
                Block::Intro,
                copy,
                resolved.clipboard_command.as_deref(),
            )?;
        }
        Commands::FollowUp { profile, copy } => {
            let resolved = OutreachConfig::resolve()?;
            let profile = profile.resolve(&resolved)?;
            compose_cmd::run_block(
                &profile,
                Block::FollowUp,
                copy,
                resolved.clipboard_command.as_deref(),
            )?;
        }
        Commands::Plan { copy } => {
            // The plan reads no profile field, so sender settings are not resolved.
            let clipboard_command = if copy {
                config::load_clipboard_command()?
            } else {
                None
            };
            compose_cmd::run_block(
                &OutreachProfile::default(),
                Block::Plan,
                copy,
                clipboard_command.as_deref(),
            )?;
        }
        Commands::Advice { region, all } => {
            advice_cmd::run_advice(region, all)?;
        }
        Commands::Link {
            profile,
            message,
            text,
        } => {
            let resolved = OutreachConfig::resolve()?;
            let profile = profile.resolve(&resolved)?;
            compose_cmd::run_link(&profile, message, text.as_deref())?;
        }
        Commands::SanitizePhone { number } => {
            compose_cmd::run_sanitize_phone(&number)?;
        }
        Commands::Profile { command } => match command {
            ProfileCommands::Template => config_cmds::run_profile_template()?,
        },
        Commands::Form { profile } => {
            let resolved = OutreachConfig::resolve()?;
            let profile = profile.resolve(&resolved)?;
            let clipboard = SystemClipboard::new(resolved.clipboard_command.as_deref());
            tui::run_form(profile, Box::new(clipboard))?;
        }
        Commands::Init { force } => {
            config_cmds::run_init(force)?;
        }
        Commands::Config { command } => {
            config_cmds::run_config_command(command)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "outreach", &mut io::stdout());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn compose_flags_parse() {
        let cli = Cli::try_parse_from([
            "outreach",
            "compose",
            "--region",
            "middle-east",
            "--tone",
            "friendly",
            "--business-name",
            "Acme Spices",
            "--highlight",
            "Line A",
            "--highlight",
            "Line B",
            "--format",
            "json",
            "--copy",
            "follow-up",
        ])
        .unwrap();
        let Commands::Compose {
            profile,
            format,
            copy,
        } = cli.command
        else {
            panic!("expected compose command");
        };
        assert_eq!(profile.region, Some(Region::MiddleEast));
        assert_eq!(profile.business_name.as_deref(), Some("Acme Spices"));
        assert_eq!(profile.offerings, vec!["Line A", "Line B"]);
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(copy, Some(BlockArg::FollowUp));
    }

    #[test]
    fn bad_region_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["outreach", "advice", "--region", "Atlantis"]);
        assert!(result.is_err());
    }

    #[test]
    fn advice_all_conflicts_with_region() {
        let result =
            Cli::try_parse_from(["outreach", "advice", "--all", "--region", "europe"]);
        assert!(result.is_err());
    }
}
