use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &str {
        "history"
    }

    fn help(&self) -> &str {
        "history [n] [--clear] - Show command history"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        if ctx.has_flag(&["c", "clear"]) {
            ctx.session.history.clear();
            return Ok(String::new());
        }

        let history = &ctx.session.history;
        let count = match ctx.args.first() {
            Some(arg) => arg
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidArgument(format!("numeric argument required: {}", arg)))?
                .min(history.len()),
            None => history.len(),
        };

        let start = history.len() - count;
        let lines: Vec<String> = history
            .entries()
            .enumerate()
            .skip(start)
            .map(|(i, cmd)| format!("{:5}  {}", i + 1, cmd))
            .collect();
        Ok(lines.join("\n"))
    }
}
