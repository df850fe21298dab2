//! System
//!
//! The top-level application context: one filesystem and one shell with
//! the builtin commands registered against it.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::commands::register_builtins;
use crate::fs::{defaults, path, SharedVfs, VfsError, VirtualFileSystem};
use crate::shell::{Shell, ShellSession, DEFAULT_HISTORY_LIMIT, SHELL_NAME};

const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("ll", "ls -la"),
    ("cls", "clear"),
    ("h", "help"),
    ("?", "help"),
    ("exit", "echo \"Use Ctrl+Shift+Q or shutdown command\""),
    ("reboot", "echo \"Press F5 to refresh the page\""),
];

#[derive(Error, Debug)]
pub enum SystemError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Vfs(#[from] VfsError),
}

/// Startup options, loadable from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SystemOptions {
    pub user: String,
    pub hostname: String,
    /// Home directory; `/home/<user>` when unset
    pub home: Option<String>,
    /// Initial working directory; the home directory when unset
    pub cwd: Option<String>,
    pub history_limit: usize,
    /// Create the standard directories and sample files
    pub populate_defaults: bool,
    /// Merged over the builtin aliases
    pub aliases: IndexMap<String, String>,
    /// Merged over the builtin variables
    pub variables: IndexMap<String, String>,
}

impl Default for SystemOptions {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            hostname: "termos".to_string(),
            home: None,
            cwd: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            populate_defaults: true,
            aliases: IndexMap::new(),
            variables: IndexMap::new(),
        }
    }
}

impl SystemOptions {
    pub fn from_toml_str(s: &str) -> Result<Self, SystemError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SystemError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SystemError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn home_dir(&self) -> String {
        match &self.home {
            Some(home) => path::normalize(home, path::ROOT),
            None => path::join("/home", &self.user),
        }
    }

    fn session(&self) -> ShellSession {
        let home = self.home_dir();
        let mut session = ShellSession::with_history_limit(self.history_limit);

        session.aliases = DEFAULT_ALIASES
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        session.aliases.extend(self.aliases.clone());

        let builtin = [
            ("USER", self.user.clone()),
            ("HOME", home),
            ("PATH", "/bin:/usr/bin:/usr/local/bin".to_string()),
            ("SHELL", format!("/bin/{}", SHELL_NAME)),
            ("TERM", "xterm-256color".to_string()),
            ("PS1", format!("{} >", SHELL_NAME)),
        ];
        session.variables = builtin
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        session.variables.extend(self.variables.clone());
        session
    }
}

pub struct System {
    vfs: SharedVfs,
    shell: Shell,
}

impl System {
    pub fn new(options: SystemOptions) -> Result<Self, SystemError> {
        let home = options.home_dir();
        let mut vfs = VirtualFileSystem::new();
        if options.populate_defaults {
            defaults::populate(&mut vfs, &home, &options.hostname)?;
        } else {
            vfs.mkdir_all(&home)?;
            vfs.cd(&home)?;
        }
        if let Some(cwd) = &options.cwd {
            vfs.mkdir_all(cwd)?;
            vfs.cd(cwd)?;
        }
        let vfs = vfs.into_shared();

        let mut shell = Shell::with_session(options.session());
        register_builtins(&mut shell, &vfs, &options.hostname);

        info!(user = %options.user, home = %home, commands = shell.commands().len(), "system started");
        Ok(Self { vfs, shell })
    }

    /// Run one input line and return what the terminal should show.
    pub async fn run(&mut self, line: &str) -> String {
        self.shell.run_line(line).await
    }

    /// Current `$PS1`.
    pub fn prompt(&self) -> &str {
        self.shell.get_variable("PS1").unwrap_or(">")
    }

    pub async fn export_filesystem(&self) -> Result<String, VfsError> {
        self.vfs.read().await.export_filesystem()
    }

    pub async fn import_filesystem(&self, json: &str) -> Result<(), VfsError> {
        self.vfs.write().await.import_filesystem(json)
    }

    pub fn vfs(&self) -> &SharedVfs {
        &self.vfs
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }
}
