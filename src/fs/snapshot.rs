//! Filesystem snapshots
//!
//! `export_filesystem` serializes the whole tree as nested JSON records;
//! `import_filesystem` decodes and validates a snapshot completely before it
//! replaces the live tree.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::path;
use super::types::*;
use super::vfs::VirtualFileSystem;

/// Wire shape of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<BTreeMap<String, NodeRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub permissions: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub size: u64,
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        let (children, content) = match &node.kind {
            NodeKind::Directory { children } => (
                Some(
                    children
                        .iter()
                        .map(|(name, child)| (name.clone(), NodeRecord::from(child)))
                        .collect(),
                ),
                None,
            ),
            NodeKind::File { content } => (None, Some(content.clone())),
        };
        Self {
            name: node.name.clone(),
            node_type: node.node_type(),
            children,
            content,
            permissions: node.permissions.to_string(),
            created: node.created,
            modified: node.modified,
            size: node.size(),
        }
    }
}

impl NodeRecord {
    /// Convert back into a node, validating as we go. `at` is the path the
    /// record occupies and only feeds error messages.
    fn into_node(self, at: &str) -> Result<Node, VfsError> {
        let permissions: Permissions = self
            .permissions
            .parse()
            .map_err(|_| VfsError::Snapshot(format!("{}: invalid permissions '{}'", at, self.permissions)))?;

        let kind = match self.node_type {
            NodeType::Directory => {
                if self.content.is_some() {
                    return Err(VfsError::Snapshot(format!("{}: directory carries content", at)));
                }
                let mut children = BTreeMap::new();
                for (key, record) in self.children.unwrap_or_default() {
                    check_name(&key, at)?;
                    if record.name != key {
                        return Err(VfsError::Snapshot(format!(
                            "{}: entry '{}' is named '{}'",
                            at, key, record.name
                        )));
                    }
                    let child_path = path::join(at, &key);
                    children.insert(key, record.into_node(&child_path)?);
                }
                NodeKind::Directory { children }
            }
            NodeType::File => {
                if self.children.is_some() {
                    return Err(VfsError::Snapshot(format!("{}: file carries children", at)));
                }
                NodeKind::File { content: self.content.unwrap_or_default() }
            }
        };

        Ok(Node {
            name: self.name,
            kind,
            permissions,
            created: self.created,
            modified: self.modified,
        })
    }
}

fn check_name(name: &str, at: &str) -> Result<(), VfsError> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(VfsError::Snapshot(format!("{}: invalid entry name '{}'", at, name)));
    }
    Ok(())
}

impl VirtualFileSystem {
    /// Serialize the whole tree as pretty-printed JSON.
    pub fn export_filesystem(&self) -> Result<String, VfsError> {
        let record = NodeRecord::from(self.root());
        let json = serde_json::to_string_pretty(&record)?;
        info!(bytes = json.len(), "exported filesystem");
        Ok(json)
    }

    /// Replace the tree with a snapshot produced by
    /// [`export_filesystem`](Self::export_filesystem). The current tree is
    /// untouched unless the whole snapshot is valid.
    pub fn import_filesystem(&mut self, json: &str) -> Result<(), VfsError> {
        let record: NodeRecord = serde_json::from_str(json)?;
        if record.node_type != NodeType::Directory {
            return Err(VfsError::Snapshot("root must be a directory".to_string()));
        }
        let mut root = record.into_node(path::ROOT)?;
        root.name = path::ROOT.to_string();
        self.replace_root(root);
        info!(cwd = %self.pwd(), "imported filesystem");
        Ok(())
    }
}
