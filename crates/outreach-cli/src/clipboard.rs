//! System clipboard via the platform's copy command.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use outreach_core::{Clipboard, ClipboardError};

/// Candidate copy commands, tried in order until one can be spawned.
const DEFAULT_COMMANDS: [&[&str]; 5] = [
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip"],
];

/// Pipes text into an external copy command.
pub struct SystemClipboard {
    candidates: Vec<Vec<String>>,
}

impl SystemClipboard {
    /// Use `command` if configured, otherwise probe the usual platform tools.
    pub fn new(command: Option<&str>) -> Self {
        let candidates = match command {
            Some(cmd) => vec![cmd.split_whitespace().map(str::to_owned).collect()],
            None => DEFAULT_COMMANDS
                .iter()
                .map(|argv| argv.iter().map(|s| (*s).to_owned()).collect())
                .collect(),
        };
        Self { candidates }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        for argv in &self.candidates {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };
            let command = argv.join(" ");

            let mut child = match Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(command = %command, "clipboard tool not found");
                    continue;
                }
                Err(source) => return Err(ClipboardError::Io { command, source }),
            };

            // Dropping stdin closes the pipe so the tool sees EOF.
            let write_result = match child.stdin.take() {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            };
            let write_result = match write_result {
                Err(source) if source.kind() != ErrorKind::BrokenPipe => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ClipboardError::Io { command, source });
                }
                other => other,
            };

            let status = child.wait().map_err(|source| ClipboardError::Io {
                command: command.clone(),
                source,
            })?;
            if !status.success() {
                return Err(ClipboardError::CommandFailed {
                    command,
                    status: status.to_string(),
                });
            }
            // A tool that exits successfully without reading stdin lost the text.
            write_result.map_err(|source| ClipboardError::Io {
                command: command.clone(),
                source,
            })?;
            debug!(command = %command, bytes = text.len(), "copied to clipboard");
            return Ok(());
        }

        let tried: Vec<String> = self.candidates.iter().map(|argv| argv.join(" ")).collect();
        Err(ClipboardError::Unavailable(tried.join(", ")))
    }
}
