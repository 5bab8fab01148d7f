//! Line-oriented shell loop.
//!
//! Reads one command per line from any [`BufRead`], runs the built-in
//! commands, and records accepted commands in the session history. Reaching
//! end of input behaves like `exit` without recording it.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::config::ReplConfig;

/// Built-in commands and their descriptions.
pub const COMMANDS: &[(&str, &str)] = &[
    ("clear", "clear the screen"),
    ("exit", "Exit the REPL"),
    ("help", "List the available commands"),
    ("history", "Show command history, most recent first"),
];

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// A command the shell rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("UnknownCommand: {0} is not defined")]
    UnknownCommand(String),
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive shell state for one session.
pub struct Shell<'a> {
    prompt: String,
    config: &'a ReplConfig,
    /// History loaded at startup, most recent first.
    previous: Vec<String>,
    /// Commands accepted this session, in entry order.
    session: Vec<String>,
}

impl<'a> Shell<'a> {
    pub fn new(program: &str, config: &'a ReplConfig, previous: Vec<String>) -> Self {
        Self {
            prompt: format!("{program}> "),
            config,
            previous,
            session: Vec::new(),
        }
    }

    /// Runs until `exit` or end of input.
    ///
    /// A line that is not valid UTF-8 is reported on `err` and skipped.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                debug!(bytes = buf.len(), "Skipping undecodable input line");
                writeln!(err, "Ignoring input line that is not valid UTF-8")?;
                continue;
            };
            let cmd = line.trim();
            if cmd.is_empty() {
                continue;
            }

            match self.execute(cmd, out)? {
                Ok(Flow::Continue) => self.session.push(cmd.to_string()),
                Ok(Flow::Exit) => {
                    self.session.push(cmd.to_string());
                    return Ok(());
                }
                Err(e) => {
                    self.report(&e, err)?;
                    if self.config.save_all_commands {
                        self.session.push(cmd.to_string());
                    }
                }
            }
        }
    }

    /// Prefix completion over the built-in commands; all commands when
    /// nothing matches.
    pub fn complete(prefix: &str) -> Vec<&'static str> {
        let hits: Vec<&'static str> = COMMANDS
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| name.starts_with(prefix))
            .collect();
        if hits.is_empty() {
            COMMANDS.iter().map(|(name, _)| *name).collect()
        } else {
            hits
        }
    }

    /// Commands accepted this session, in entry order.
    pub fn into_session(self) -> Vec<String> {
        self.session
    }

    fn execute<W: Write>(&self, cmd: &str, out: &mut W) -> io::Result<Result<Flow, ShellError>> {
        debug!(command = cmd, "Executing");
        match cmd {
            "clear" => write!(out, "{CLEAR_SCREEN}")?,
            "exit" => return Ok(Ok(Flow::Exit)),
            "help" => {
                for (name, description) in COMMANDS {
                    writeln!(out, "{name:<10}{description}")?;
                }
            }
            "history" => {
                let all = self.session.iter().rev().chain(self.previous.iter());
                for (idx, line) in all.enumerate() {
                    writeln!(out, "{:>5}  {line}", idx + 1)?;
                }
            }
            other => return Ok(Err(ShellError::UnknownCommand(other.to_string()))),
        }
        Ok(Ok(Flow::Continue))
    }

    fn report<E: Write>(&self, e: &ShellError, err: &mut E) -> io::Result<()> {
        writeln!(err, "{e}")?;
        if self.config.full_errors {
            let ShellError::UnknownCommand(cmd) = e;
            writeln!(err, "  input: {cmd:?}")?;
            writeln!(err, "  did you mean: {}", Self::complete(cmd).join(", "))?;
        }
        Ok(())
    }
}
