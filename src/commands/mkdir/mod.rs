// src/commands/mkdir/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct MkdirCommand {
    vfs: SharedVfs,
}

impl MkdirCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn help(&self) -> &str {
        "mkdir [-p] DIR... - Create directories"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let parents = ctx.has_flag(&["p", "parents"]);
        let dirs = ctx.operands(&["parents"]);
        if dirs.is_empty() {
            return Err(CommandError::Usage("mkdir [-p] DIR...".to_string()));
        }

        let mut vfs = self.vfs.write().await;
        for dir in &dirs {
            if parents {
                vfs.mkdir_all(dir)?;
            } else {
                vfs.mkdir(dir)?;
            }
        }
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_mkdir() {
        let (mut shell, vfs) = shell();
        assert_eq!(shell.run_line("mkdir projects notes").await, "");
        let vfs_guard = vfs.read().await;
        assert!(vfs_guard.is_directory("/home/guest/projects"));
        assert!(vfs_guard.is_directory("/home/guest/notes"));
    }

    #[tokio::test]
    async fn test_mkdir_parents() {
        let (mut shell, vfs) = shell();
        assert_eq!(
            shell.run_line("mkdir a/b/c").await,
            "tsh: mkdir: Parent directory does not exist: /home/guest/a/b"
        );
        assert_eq!(shell.run_line("mkdir -p a/b/c").await, "");
        assert_eq!(shell.run_line("mkdir --parents x/y").await, "");
        assert!(vfs.read().await.is_directory("/home/guest/a/b/c"));
        assert!(vfs.read().await.is_directory("/home/guest/x/y"));
    }

    #[tokio::test]
    async fn test_mkdir_existing() {
        let (mut shell, _) = shell();
        assert_eq!(
            shell.run_line("mkdir documents").await,
            "tsh: mkdir: File exists: /home/guest/documents"
        );
        assert_eq!(shell.run_line("mkdir").await, "tsh: mkdir: usage: mkdir [-p] DIR...");
    }
}
