//! termos - a terminal-first virtual desktop core
//!
//! An in-memory virtual filesystem plus the `tsh` command line processor
//! that drives it: alias and variable substitution, quoting, flag
//! extraction, dispatch to registered commands, and history.

pub mod commands;
pub mod fs;
pub mod shell;
pub mod system;

pub use commands::{register_builtins, Command, CommandContext, CommandError, CommandRegistry, FnCommand};
pub use fs::{SharedVfs, VfsError, VirtualFileSystem};
pub use shell::{Direction, DispatchError, FlagValue, Flags, ParsedCommand, Shell, ShellSession};
pub use system::{System, SystemError, SystemOptions};
