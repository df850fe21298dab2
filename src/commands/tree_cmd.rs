use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::{Node, SharedVfs, VfsError};

pub struct TreeCommand {
    vfs: SharedVfs,
}

impl TreeCommand {
    pub fn new(vfs: SharedVfs) -> Self {
        Self { vfs }
    }
}

#[derive(Default)]
struct TreeResult {
    output: String,
    dir_count: usize,
    file_count: usize,
}

#[async_trait]
impl Command for TreeCommand {
    fn name(&self) -> &str {
        "tree"
    }

    fn help(&self) -> &str {
        "tree [-a] [path] - Show a directory tree"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let show_hidden = ctx.has_flag(&["a", "all"]);
        let operands = ctx.operands(&["all"]);
        let target = operands.first().map(String::as_str).unwrap_or(".");

        let vfs = self.vfs.read().await;
        let normalized = vfs.normalize_path(target);
        let node = vfs
            .resolve_path(&normalized)
            .ok_or_else(|| VfsError::NotFound(normalized.clone()))?;
        if !node.is_directory() {
            return Err(VfsError::NotADirectory(normalized).into());
        }

        let mut result = TreeResult::default();
        result.output.push_str(&normalized);
        build_tree(node, show_hidden, "", &mut result);

        result.output.push_str(&format!(
            "\n\n{} director{}, {} file{}",
            result.dir_count,
            if result.dir_count == 1 { "y" } else { "ies" },
            result.file_count,
            if result.file_count == 1 { "" } else { "s" }
        ));
        Ok(result.output)
    }
}

fn build_tree(dir: &Node, show_hidden: bool, prefix: &str, result: &mut TreeResult) {
    let Some(children) = dir.children() else {
        return;
    };
    let visible: Vec<&Node> = children
        .values()
        .filter(|child| show_hidden || !child.name.starts_with('.'))
        .collect();

    for (i, child) in visible.iter().enumerate() {
        let last = i + 1 == visible.len();
        let connector = if last { "└── " } else { "├── " };
        result.output.push('\n');
        result.output.push_str(prefix);
        result.output.push_str(connector);
        result.output.push_str(&child.name);

        if child.is_directory() {
            result.dir_count += 1;
            result.output.push('/');
            let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            build_tree(child, show_hidden, &child_prefix, result);
        } else {
            result.file_count += 1;
        }
    }
}
