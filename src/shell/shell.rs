//! Shell
//!
//! Owns the command registry and the per-session state (history, aliases,
//! variables), and turns parsed lines into result strings.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, warn};

use super::history::{Direction, History};
use super::parser::{parse_line, Flags, ParsedCommand};
use crate::commands::{Command, CommandContext, CommandError, CommandRegistry, FnCommand};

pub const SHELL_NAME: &str = "tsh";

/// Why a dispatched line produced no handler output. `Display` is the text
/// shown to the user.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("tsh: command not found: {command}\nType 'help' for available commands")]
    CommandNotFound { command: String },

    #[error("tsh: {command}: {source}")]
    HandlerFailure {
        command: String,
        #[source]
        source: CommandError,
    },

    #[error("tsh: {command}: {message}")]
    HandlerPanicked { command: String, message: String },
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "command panicked".to_string()
    }
}

/// State that survives between lines and that session commands may edit.
#[derive(Debug, Clone, Default)]
pub struct ShellSession {
    pub history: History,
    pub aliases: IndexMap<String, String>,
    pub variables: IndexMap<String, String>,
}

impl ShellSession {
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: History::new(limit),
            ..Self::default()
        }
    }
}

pub struct Shell {
    commands: CommandRegistry,
    session: ShellSession,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self::with_session(ShellSession::default())
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self::with_session(ShellSession::with_history_limit(limit))
    }

    pub fn with_session(session: ShellSession) -> Self {
        Self {
            commands: CommandRegistry::new(),
            session,
        }
    }

    /// Parse a line against the current aliases and variables. `None` for
    /// blank input.
    pub fn parse(&self, input: &str) -> Option<ParsedCommand> {
        parse_line(input, &self.session.aliases, &self.session.variables)
    }

    /// Record the line in history and run its handler.
    pub async fn dispatch(&mut self, parsed: ParsedCommand) -> Result<String, DispatchError> {
        self.session.history.push(&parsed.raw);

        let ParsedCommand { command, args, flags, tokens, .. } = parsed;
        let handler = match self.commands.get(&command) {
            Some(handler) => handler,
            None => {
                debug!(command = %command, "command not found");
                return Err(DispatchError::CommandNotFound { command });
            }
        };

        debug!(command = %command, args = args.len(), flags = flags.len(), "dispatching");
        let ctx = CommandContext {
            args,
            flags,
            tokens,
            session: &mut self.session,
            commands: &self.commands,
        };
        match AssertUnwindSafe(handler.execute(ctx)).catch_unwind().await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(source)) => {
                warn!(command = %command, error = %source, "command failed");
                Err(DispatchError::HandlerFailure { command, source })
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(command = %command, panic = %message, "command panicked");
                Err(DispatchError::HandlerPanicked { command, message })
            }
        }
    }

    /// Run a parsed line. Every outcome, failures included, is rendered as
    /// the returned string.
    pub async fn execute(&mut self, parsed: ParsedCommand) -> String {
        match self.dispatch(parsed).await {
            Ok(output) => output,
            Err(e) => e.to_string(),
        }
    }

    /// `parse` followed by `execute`. Blank lines yield `""` and are not
    /// recorded.
    pub async fn run_line(&mut self, input: &str) -> String {
        match self.parse(input) {
            Some(parsed) => self.execute(parsed).await,
            None => String::new(),
        }
    }

    pub fn register(&mut self, handler: Box<dyn Command>) {
        self.commands.register(handler);
    }

    pub fn register_command(&mut self, name: &str, handler: Box<dyn Command>, help: &str) {
        self.commands.register_as(name, handler, help);
    }

    /// Register a synchronous closure as a command.
    pub fn register_fn<F>(&mut self, name: &str, help: &str, handler: F)
    where
        F: Fn(&[String], &Flags) -> Result<String, CommandError> + Send + Sync + 'static,
    {
        self.commands
            .register_as(name, Box::new(FnCommand::new(name, help, handler)), help);
    }

    pub fn unregister_command(&mut self, name: &str) -> bool {
        self.commands.unregister(name)
    }

    /// Registered names starting with `prefix` (lower-cased), in
    /// registration order. An empty prefix suggests nothing.
    pub fn get_suggestions(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();
        self.commands
            .names()
            .into_iter()
            .filter(|name| name.starts_with(&prefix))
            .map(str::to_string)
            .collect()
    }

    pub fn navigate_history(&mut self, direction: Direction) -> Option<String> {
        self.session.history.navigate(direction).map(str::to_string)
    }

    pub fn history(&self) -> &History {
        &self.session.history
    }

    pub fn clear_history(&mut self) {
        self.session.history.clear();
    }

    pub fn set_variable(&mut self, name: &str, value: &str) {
        self.session.variables.insert(name.to_string(), value.to_string());
    }

    pub fn get_variable(&self, name: &str) -> Option<&str> {
        self.session.variables.get(name).map(String::as_str)
    }

    pub fn variables(&self) -> &IndexMap<String, String> {
        &self.session.variables
    }

    pub fn set_alias(&mut self, name: &str, expansion: &str) {
        self.session.aliases.insert(name.to_string(), expansion.to_string());
    }

    pub fn remove_alias(&mut self, name: &str) -> bool {
        self.session.aliases.shift_remove(name).is_some()
    }

    pub fn aliases(&self) -> &IndexMap<String, String> {
        &self.session.aliases
    }

    pub fn command_help(&self, name: &str) -> String {
        match self.commands.help(name) {
            Some(help) if !help.is_empty() => help.to_string(),
            _ => format!("No help available for: {}", name),
        }
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn session(&self) -> &ShellSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ShellSession {
        &mut self.session
    }
}
