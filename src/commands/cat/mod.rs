// src/commands/cat/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct CatCommand {
    vfs: SharedVfs,
}

impl CatCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &str {
        "cat"
    }

    fn help(&self) -> &str {
        "cat FILE... - Display file contents"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let files = ctx.operands(&[]);
        if files.is_empty() {
            return Err(CommandError::Usage("cat FILE...".to_string()));
        }

        let vfs = self.vfs.read().await;
        let contents = files
            .iter()
            .map(|file| vfs.read_file(file))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(contents.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_cat_files() {
        let (mut shell, vfs) = shell();
        vfs.write().await.write_file("/tmp/a", "one").unwrap();
        vfs.write().await.write_file("/tmp/b", "two").unwrap();
        assert_eq!(shell.run_line("cat /tmp/a /tmp/b").await, "one\ntwo");
        assert!(shell.run_line("cat welcome.txt").await.starts_with("Welcome to TermOS!"));
    }

    #[tokio::test]
    async fn test_cat_errors() {
        let (mut shell, _) = shell();
        assert_eq!(shell.run_line("cat").await, "tsh: cat: usage: cat FILE...");
        assert_eq!(
            shell.run_line("cat documents").await,
            "tsh: cat: Not a file: /home/guest/documents"
        );
        assert_eq!(
            shell.run_line("cat nope.txt").await,
            "tsh: cat: No such file or directory: /home/guest/nope.txt"
        );
    }
}
