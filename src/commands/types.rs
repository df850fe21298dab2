// src/commands/types.rs
use async_trait::async_trait;
use thiserror::Error;

use super::registry::CommandRegistry;
use crate::fs::VfsError;
use crate::shell::{Flags, ShellSession};

/// Failure raised by a command handler.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Vfs(#[from] VfsError),

    #[error("usage: {0}")]
    Usage(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Failed(String),
}

/// Everything a handler sees for one invocation.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub flags: Flags,
    /// Argument tokens as typed, before flag extraction.
    pub tokens: Vec<String>,
    pub session: &'a mut ShellSession,
    pub commands: &'a CommandRegistry,
}

impl CommandContext<'_> {
    /// True when any of `names` was given as a flag. Single-letter names also
    /// match inside a positional short cluster such as `-la`.
    pub fn has_flag(&self, names: &[&str]) -> bool {
        names.iter().any(|name| {
            self.flags.contains(name)
                || (name.len() == 1
                    && self
                        .args
                        .iter()
                        .filter(|arg| is_short_cluster(arg))
                        .any(|arg| arg[1..].contains(*name)))
        })
    }

    /// Positional arguments with short clusters removed.
    ///
    /// `switches` names long flags that never take a value; if the parser
    /// bound the following token to one of them, that token is handed back
    /// as the first operand.
    pub fn operands(&self, switches: &[&str]) -> Vec<String> {
        let mut operands: Vec<String> = switches
            .iter()
            .filter_map(|name| self.flags.value(name))
            .map(str::to_string)
            .collect();
        operands.extend(self.args.iter().filter(|arg| !is_short_cluster(arg)).cloned());
        operands
    }
}

fn is_short_cluster(arg: &str) -> bool {
    arg.len() > 1
        && arg.starts_with('-')
        && !arg.starts_with("--")
        && arg[1..].chars().all(|c| c.is_ascii_alphabetic())
}

/// 命令 trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &str;

    /// One-line help shown by `help`.
    fn help(&self) -> &str {
        ""
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError>;
}

/// Adapts a synchronous closure to [`Command`].
pub struct FnCommand<F> {
    name: String,
    help: String,
    handler: F,
}

impl<F> FnCommand<F>
where
    F: Fn(&[String], &Flags) -> Result<String, CommandError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, help: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            handler,
        }
    }
}

#[async_trait]
impl<F> Command for FnCommand<F>
where
    F: Fn(&[String], &Flags) -> Result<String, CommandError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        (self.handler)(&ctx.args, &ctx.flags)
    }
}
