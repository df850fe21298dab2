// src/commands/chmod/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct ChmodCommand {
    vfs: SharedVfs,
}

impl ChmodCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for ChmodCommand {
    fn name(&self) -> &str {
        "chmod"
    }

    fn help(&self) -> &str {
        "chmod PERMS PATH - Set permissions (e.g. rwxr-xr-x)"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        // Read the raw tokens: `---------` would otherwise parse as a long flag.
        let (perms, target) = match ctx.tokens.as_slice() {
            [perms, target] => (perms, target),
            _ => return Err(CommandError::Usage("chmod PERMS PATH".to_string())),
        };

        self.vfs.write().await.set_permissions(target, perms)?;
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_chmod() {
        let (mut shell, vfs) = shell();
        assert_eq!(shell.run_line("chmod rwx------ todo.md").await, "");
        assert_eq!(
            vfs.read().await.get_permissions("todo.md").unwrap().as_str(),
            "rwx------"
        );
    }

    #[tokio::test]
    async fn test_chmod_dash_leading_permissions() {
        let (mut shell, vfs) = shell();
        assert_eq!(shell.run_line("chmod --------- todo.md").await, "");
        assert_eq!(
            vfs.read().await.get_permissions("todo.md").unwrap().as_str(),
            "---------"
        );
        assert_eq!(shell.run_line("chmod --x--x--x todo.md").await, "");
        assert_eq!(shell.run_line("chmod -w------- welcome.txt").await, "");
        let guard = vfs.read().await;
        assert_eq!(guard.get_permissions("todo.md").unwrap().as_str(), "--x--x--x");
        assert_eq!(guard.get_permissions("welcome.txt").unwrap().as_str(), "-w-------");
    }

    #[tokio::test]
    async fn test_chmod_errors() {
        let (mut shell, _) = shell();
        assert_eq!(
            shell.run_line("chmod 755 todo.md").await,
            "tsh: chmod: Invalid permissions format: 755"
        );
        assert_eq!(
            shell.run_line("chmod rwxrwxrwx ghost").await,
            "tsh: chmod: No such file or directory: /home/guest/ghost"
        );
        assert_eq!(shell.run_line("chmod todo.md").await, "tsh: chmod: usage: chmod PERMS PATH");
    }
}
