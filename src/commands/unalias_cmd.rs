use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

pub struct UnaliasCommand;

#[async_trait]
impl Command for UnaliasCommand {
    fn name(&self) -> &str {
        "unalias"
    }

    fn help(&self) -> &str {
        "unalias NAME... - Remove aliases"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        if ctx.args.is_empty() {
            return Err(CommandError::Usage("unalias NAME...".to_string()));
        }
        for name in &ctx.args {
            if ctx.session.aliases.shift_remove(name).is_none() {
                return Err(CommandError::Failed(format!("{}: not found", name)));
            }
        }
        Ok(String::new())
    }
}
