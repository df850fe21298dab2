// src/commands/ls/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::{DirEntry, NodeType, SharedVfs};

pub struct LsCommand {
    vfs: SharedVfs,
}

impl LsCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &str {
        "ls"
    }

    fn help(&self) -> &str {
        "ls [-l] [-a] [path] - List directory contents"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let long = ctx.has_flag(&["l", "long"]);
        let all = ctx.has_flag(&["a", "all"]);
        let operands = ctx.operands(&["long", "all"]);
        let target = operands.first().map(String::as_str).unwrap_or(".");

        let vfs = self.vfs.read().await;
        let meta = vfs.stat(target)?;
        let entries = match meta.node_type {
            NodeType::File => vec![DirEntry {
                name: target.to_string(),
                node_type: meta.node_type,
                size: meta.size,
                permissions: meta.permissions,
                modified: meta.modified,
            }],
            NodeType::Directory => vfs.list(target)?,
        };

        let visible = entries
            .iter()
            .filter(|entry| all || !entry.name.starts_with('.'));

        let output = if long {
            visible.map(format_long).collect::<Vec<_>>().join("\n")
        } else {
            visible.map(format_short).collect::<Vec<_>>().join("  ")
        };
        Ok(output)
    }
}

fn format_short(entry: &DirEntry) -> String {
    match entry.node_type {
        NodeType::Directory => format!("{}/", entry.name),
        NodeType::File => entry.name.clone(),
    }
}

fn format_long(entry: &DirEntry) -> String {
    let kind = match entry.node_type {
        NodeType::Directory => 'd',
        NodeType::File => '-',
    };
    format!(
        "{}{} {:>8} {} {}",
        kind,
        entry.permissions,
        entry.size,
        entry.modified.format("%Y-%m-%d %H:%M"),
        entry.name
    )
}
