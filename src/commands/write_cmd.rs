use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct WriteCommand {
    vfs: SharedVfs,
}

impl WriteCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for WriteCommand {
    fn name(&self) -> &str {
        "write"
    }

    fn help(&self) -> &str {
        "write FILE TEXT... - Replace a file's content with TEXT"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let (file, words) = match ctx.tokens.split_first() {
            Some(split) => split,
            None => return Err(CommandError::Usage("write FILE TEXT...".to_string())),
        };

        self.vfs.write().await.write_file(file, &words.join(" "))?;
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_write_creates_and_replaces() {
        let (mut shell, vfs) = shell();
        assert_eq!(shell.run_line("write note.txt hello there").await, "");
        assert_eq!(vfs.read().await.read_file("note.txt").unwrap(), "hello there");

        shell.run_line(r#"write note.txt "second  version""#).await;
        assert_eq!(vfs.read().await.read_file("note.txt").unwrap(), "second  version");
        assert_eq!(shell.run_line("cat note.txt").await, "second  version");
    }

    #[tokio::test]
    async fn test_write_keeps_flag_like_words() {
        let (mut shell, vfs) = shell();
        assert_eq!(shell.run_line("write note.txt use -v or --verbose for detail").await, "");
        assert_eq!(
            vfs.read().await.read_file("note.txt").unwrap(),
            "use -v or --verbose for detail"
        );
    }

    #[tokio::test]
    async fn test_write_empty_and_errors() {
        let (mut shell, vfs) = shell();
        shell.run_line("write blank").await;
        assert_eq!(vfs.read().await.stat("blank").unwrap().size, 0);
        assert_eq!(
            shell.run_line("write documents x").await,
            "tsh: write: Not a file: /home/guest/documents"
        );
        assert_eq!(shell.run_line("write").await, "tsh: write: usage: write FILE TEXT...");
    }
}
