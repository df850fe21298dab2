//! Shell Module
//!
//! Line processing for the terminal: alias and variable substitution,
//! tokenizing, flag extraction, dispatch and history.

pub mod history;
pub mod lexer;
pub mod parser;
pub mod shell;

pub use history::{Direction, History, DEFAULT_HISTORY_LIMIT};
pub use parser::{parse_line, FlagValue, Flags, ParsedCommand};
pub use shell::{DispatchError, Shell, ShellSession, SHELL_NAME};
