//! `outreach compose`, the single-block commands, and `outreach link`.

use std::fmt::Write as _;

use anyhow::{Result, bail};
use clap::ValueEnum;

use outreach_core::links::{direct_number_link, sanitize_phone, share_link};
use outreach_core::{Block, ComposedOutput, OutreachProfile, compose, copy_with_notice};

use crate::clipboard::SystemClipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Output block selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BlockArg {
    Intro,
    FollowUp,
    Plan,
}

impl From<BlockArg> for Block {
    fn from(arg: BlockArg) -> Self {
        match arg {
            BlockArg::Intro => Block::Intro,
            BlockArg::FollowUp => Block::FollowUp,
            BlockArg::Plan => Block::Plan,
        }
    }
}

/// Message selectable for `outreach link`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageArg {
    Intro,
    FollowUp,
}

/// Execute `outreach compose`.
pub fn run_compose(
    profile: &OutreachProfile,
    format: OutputFormat,
    copy: Option<BlockArg>,
    clipboard_command: Option<&str>,
) -> Result<()> {
    let output = compose(profile);

    match format {
        OutputFormat::Text => print!("{}", render_text(profile, &output)),
        OutputFormat::Json => println!("{}", output.to_json()?),
    }

    if let Some(block) = copy {
        copy_block(&output, block.into(), clipboard_command);
    }
    Ok(())
}

/// Execute `outreach intro|follow-up|plan`: print one block.
pub fn run_block(
    profile: &OutreachProfile,
    block: Block,
    copy: bool,
    clipboard_command: Option<&str>,
) -> Result<()> {
    let output = compose(profile);
    println!("{}", output.block(block));
    if copy {
        copy_block(&output, block, clipboard_command);
    }
    Ok(())
}

/// Execute `outreach link`.
pub fn run_link(profile: &OutreachProfile, message: MessageArg, text: Option<&str>) -> Result<()> {
    for link in links_for(profile, message, text) {
        println!("{link}");
    }
    Ok(())
}

/// Share link first, then the direct-number link when one applies.
///
/// Custom `text` replaces the composed message. The direct link is offered for
/// the introduction and for custom text, never for the follow-up.
pub fn links_for(profile: &OutreachProfile, message: MessageArg, text: Option<&str>) -> Vec<String> {
    let output = compose(profile);
    let body = match (text, message) {
        (Some(custom), _) => custom,
        (None, MessageArg::Intro) => output.intro.as_str(),
        (None, MessageArg::FollowUp) => output.follow_up.as_str(),
    };

    let mut links = vec![share_link(body)];
    if text.is_some() || message == MessageArg::Intro {
        links.extend(direct_number_link(&profile.phone, body));
    }
    links
}

/// Execute `outreach sanitize-phone`.
pub fn run_sanitize_phone(raw: &str) -> Result<()> {
    let digits = sanitize_phone(raw);
    if digits.is_empty() {
        bail!("no usable digits in phone number {raw:?}");
    }
    println!("{digits}");
    Ok(())
}

fn copy_block(output: &ComposedOutput, block: Block, clipboard_command: Option<&str>) {
    let mut clipboard = SystemClipboard::new(clipboard_command);
    let notice = copy_with_notice(&mut clipboard, output.block(block));
    eprintln!("{notice}");
}

/// Text layout for `outreach compose`.
pub fn render_text(profile: &OutreachProfile, output: &ComposedOutput) -> String {
    let mut out = String::new();

    heading(&mut out, &format!("Cultural guidance ({})", profile.region));
    for note in output.advice {
        let _ = writeln!(out, "? {note}");
    }
    out.push('\n');

    heading(&mut out, "Introduction message");
    let _ = writeln!(out, "{}\n", output.intro);
    let _ = writeln!(out, "Open in WhatsApp:   {}", output.intro_link);
    if let Some(direct) = &output.direct_link {
        let _ = writeln!(out, "WhatsApp to number: {direct}");
    }
    out.push('\n');

    heading(&mut out, "Follow-up message (48 hours)");
    let _ = writeln!(out, "{}\n", output.follow_up);
    let _ = writeln!(out, "Open in WhatsApp:   {}", output.follow_up_link);
    out.push('\n');

    heading(&mut out, "Step-by-step plan");
    let _ = writeln!(out, "{}", output.step_plan);
    out
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}\n{}", "-".repeat(title.len()));
}
