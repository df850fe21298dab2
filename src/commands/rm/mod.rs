// src/commands/rm/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

pub struct RmCommand {
    vfs: SharedVfs,
}

impl RmCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &str {
        "rm"
    }

    fn help(&self) -> &str {
        "rm [-r] PATH... - Remove files or directories"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let recursive = ctx.has_flag(&["r", "R", "recursive"]);
        let targets = ctx.operands(&["recursive"]);
        if targets.is_empty() {
            return Err(CommandError::Usage("rm [-r] PATH...".to_string()));
        }

        let mut vfs = self.vfs.write().await;
        for target in &targets {
            if recursive {
                vfs.remove_tree(target)?;
            } else if vfs.is_directory(target) {
                return Err(CommandError::Failed(format!(
                    "cannot remove '{}': Is a directory (use -r)",
                    target
                )));
            } else {
                vfs.delete(target)?;
            }
        }
        Ok(String::new())
    }
}
