// src/commands/find/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct FindCommand {
    vfs: SharedVfs,
}

impl FindCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for FindCommand {
    fn name(&self) -> &str {
        "find"
    }

    fn help(&self) -> &str {
        "find [START] PATTERN - Search names by regular expression"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let operands = ctx.operands(&[]);
        let (start, pattern) = match operands.as_slice() {
            [pattern] => (".", pattern.as_str()),
            [start, pattern] => (start.as_str(), pattern.as_str()),
            _ => return Err(CommandError::Usage("find [START] PATTERN".to_string())),
        };

        let matches = self.vfs.read().await.find(start, pattern)?;
        Ok(matches
            .into_iter()
            .map(|m| m.path)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_find_by_pattern() {
        let (mut shell, _) = shell();
        assert_eq!(
            shell.run_line("find / host").await,
            "/etc/hostname"
        );
        let out = shell.run_line("find md$").await;
        assert_eq!(out, "/home/guest/todo.md");
    }

    #[tokio::test]
    async fn test_find_no_matches_and_bad_pattern() {
        let (mut shell, _) = shell();
        assert_eq!(shell.run_line("find zzz").await, "");
        assert!(shell
            .run_line("find '('")
            .await
            .starts_with("tsh: find: Invalid pattern '('"));
        assert_eq!(shell.run_line("find").await, "tsh: find: usage: find [START] PATTERN");
    }
}
