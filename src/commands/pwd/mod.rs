// src/commands/pwd/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct PwdCommand {
    vfs: SharedVfs,
}

impl PwdCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &str {
        "pwd"
    }

    fn help(&self) -> &str {
        "pwd - Print working directory"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> Result<String, CommandError> {
        Ok(self.vfs.read().await.pwd().to_string())
    }
}
