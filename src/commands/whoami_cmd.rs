use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

pub struct WhoamiCommand;

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &str {
        "whoami"
    }

    fn help(&self) -> &str {
        "whoami - Display current user"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        Ok(ctx
            .session
            .variables
            .get("USER")
            .cloned()
            .unwrap_or_else(|| "guest".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_whoami() {
        let (mut shell, _) = shell();
        assert_eq!(shell.run_line("whoami").await, "guest");
        shell.set_variable("USER", "alice");
        assert_eq!(shell.run_line("whoami").await, "alice");
    }
}
