// src/commands/date/mod.rs
use async_trait::async_trait;
use chrono::Local;

use crate::commands::{Command, CommandContext, CommandError};

const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub struct DateCommand;

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &str {
        "date"
    }

    fn help(&self) -> &str {
        "date - Display current date and time"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> Result<String, CommandError> {
        Ok(Local::now().format(DATE_FORMAT).to_string())
    }
}
