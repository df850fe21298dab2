use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

/// ANSI: clear screen, cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    fn help(&self) -> &str {
        "clear - Clear the terminal screen"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> Result<String, CommandError> {
        Ok(CLEAR_SCREEN.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_clear_outputs_ansi_sequence() {
        let (mut shell, _) = shell();
        assert_eq!(shell.run_line("clear").await, "\x1B[2J\x1B[H");
        shell.set_alias("cls", "clear");
        assert_eq!(shell.run_line("cls").await, "\x1B[2J\x1B[H");
    }
}
