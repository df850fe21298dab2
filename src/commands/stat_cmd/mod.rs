// src/commands/stat_cmd/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub struct StatCommand {
    vfs: SharedVfs,
}

impl StatCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for StatCommand {
    fn name(&self) -> &str {
        "stat"
    }

    fn help(&self) -> &str {
        "stat PATH - Show file or directory details"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let operands = ctx.operands(&[]);
        let target = match operands.as_slice() {
            [target] => target,
            _ => return Err(CommandError::Usage("stat PATH".to_string())),
        };

        let vfs = self.vfs.read().await;
        let meta = vfs.stat(target)?;
        Ok(format!(
            "  File: {}\n  Type: {}\n  Size: {}\n Perms: {}\nCreate: {}\nModify: {}",
            vfs.normalize_path(target),
            meta.node_type,
            meta.size,
            meta.permissions,
            meta.created.format(TIME_FORMAT),
            meta.modified.format(TIME_FORMAT),
        ))
    }
}
