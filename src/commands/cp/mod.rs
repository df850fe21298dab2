// src/commands/cp/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::{path, SharedVfs, VirtualFileSystem};

pub struct CpCommand {
    vfs: SharedVfs,
}

impl CpCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

/// Where `src` lands when copied or moved to `dst`: inside `dst` when it is
/// an existing directory, otherwise at `dst` itself.
pub(crate) fn destination(vfs: &VirtualFileSystem, src: &str, dst: &str) -> String {
    let dst = vfs.normalize_path(dst);
    if vfs.is_directory(&dst) {
        let src = vfs.normalize_path(src);
        path::join(&dst, path::file_name(&src))
    } else {
        dst
    }
}

#[async_trait]
impl Command for CpCommand {
    fn name(&self) -> &str {
        "cp"
    }

    fn help(&self) -> &str {
        "cp [-r] SRC DST - Copy a file or directory"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let recursive = ctx.has_flag(&["r", "R", "recursive"]);
        let operands = ctx.operands(&["recursive"]);
        let (src, dst) = match operands.as_slice() {
            [src, dst] => (src, dst),
            _ => return Err(CommandError::Usage("cp [-r] SRC DST".to_string())),
        };

        let mut vfs = self.vfs.write().await;
        if vfs.is_directory(src) && !recursive {
            return Err(CommandError::Failed(format!(
                "-r not specified; omitting directory '{}'",
                src
            )));
        }
        let target = destination(&vfs, src, dst);
        vfs.copy(src, &target)?;
        Ok(String::new())
    }
}
