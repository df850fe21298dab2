use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct RmdirCommand {
    vfs: SharedVfs,
}

impl RmdirCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for RmdirCommand {
    fn name(&self) -> &str {
        "rmdir"
    }

    fn help(&self) -> &str {
        "rmdir DIR... - Remove empty directories"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let dirs = ctx.operands(&[]);
        if dirs.is_empty() {
            return Err(CommandError::Usage("rmdir DIR...".to_string()));
        }

        let mut vfs = self.vfs.write().await;
        for dir in &dirs {
            vfs.rmdir(dir)?;
        }
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_rmdir_empty_and_not_empty() {
        let (mut shell, vfs) = shell();
        assert_eq!(shell.run_line("rmdir music").await, "");
        assert!(!vfs.read().await.exists("music"));

        assert_eq!(
            shell.run_line("rmdir /home").await,
            "tsh: rmdir: Directory not empty: /home"
        );
        assert_eq!(
            shell.run_line("rmdir todo.md").await,
            "tsh: rmdir: Not a directory: /home/guest/todo.md"
        );
    }
}
