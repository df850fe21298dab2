// src/commands/cd/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct CdCommand {
    vfs: SharedVfs,
}

impl CdCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &str {
        "cd"
    }

    fn help(&self) -> &str {
        "cd [path] - Change directory"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let home = ctx
            .session
            .variables
            .get("HOME")
            .cloned()
            .unwrap_or_else(|| "/".to_string());

        let target = match ctx.operands(&[]).into_iter().next() {
            None => home,
            Some(arg) if arg == "~" => home,
            Some(arg) => match arg.strip_prefix("~/") {
                Some(rest) => format!("{}/{}", home, rest),
                None => arg,
            },
        };

        self.vfs.write().await.cd(&target)?;
        Ok(String::new())
    }
}
