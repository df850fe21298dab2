use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn help(&self) -> &str {
        "help [command] - Show available commands"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        if let Some(name) = ctx.args.first() {
            return Ok(match ctx.commands.help(name) {
                Some(help) if !help.is_empty() => help.to_string(),
                _ => format!("No help available for: {}", name),
            });
        }

        let mut stdout = String::from("Available commands:\n\n");
        for (name, registered) in ctx.commands.iter() {
            stdout.push_str(&format!("  {:<15} {}\n", name, registered.help));
        }
        stdout.push_str("\nType \"help [command]\" for more information");
        Ok(stdout)
    }
}
