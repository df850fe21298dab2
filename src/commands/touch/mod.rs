// src/commands/touch/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct TouchCommand {
    vfs: SharedVfs,
}

impl TouchCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &str {
        "touch"
    }

    fn help(&self) -> &str {
        "touch FILE... - Create empty files or update timestamps"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let files = ctx.operands(&[]);
        if files.is_empty() {
            return Err(CommandError::Usage("touch FILE...".to_string()));
        }

        let mut vfs = self.vfs.write().await;
        for file in &files {
            vfs.touch(file)?;
        }
        Ok(String::new())
    }
}
