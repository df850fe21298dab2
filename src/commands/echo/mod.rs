// src/commands/echo/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &str {
        "echo"
    }

    fn help(&self) -> &str {
        "echo [text] - Print text to terminal"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        Ok(ctx.args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_echo() {
        let (mut shell, _) = shell();
        assert_eq!(shell.run_line(r#"echo "hello world" foo"#).await, "hello world foo");
        assert_eq!(shell.run_line("echo").await, "");
        assert_eq!(shell.run_line("echo $USER at $HOME").await, "guest at /home/guest");
    }

    #[tokio::test]
    async fn test_echo_builtin_aliases() {
        let (mut shell, _) = shell();
        shell.set_alias("exit", r#"echo "Use Ctrl+Shift+Q or shutdown command""#);
        assert_eq!(shell.run_line("exit").await, "Use Ctrl+Shift+Q or shutdown command");
    }
}
