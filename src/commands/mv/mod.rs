// src/commands/mv/mod.rs
use async_trait::async_trait;

use crate::commands::cp::destination;
use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct MvCommand {
    vfs: SharedVfs,
}

impl MvCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for MvCommand {
    fn name(&self) -> &str {
        "mv"
    }

    fn help(&self) -> &str {
        "mv SRC DST - Move or rename a file or directory"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let operands = ctx.operands(&[]);
        let (src, dst) = match operands.as_slice() {
            [src, dst] => (src, dst),
            _ => return Err(CommandError::Usage("mv SRC DST".to_string())),
        };

        let mut vfs = self.vfs.write().await;
        let target = destination(&vfs, src, dst);
        vfs.rename(src, &target)?;
        Ok(String::new())
    }
}
