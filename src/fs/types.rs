//! File System Types
//!
//! Core node tree, metadata and error types for the virtual file system.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref PERMISSIONS_RE: Regex = Regex::new(r"^([r-][w-][x-]){3}$").unwrap();
}

/// File system errors
#[derive(Error, Debug)]
pub enum VfsError {
    #[error("No such file or directory: {0}")]
    NotFound(String),

    #[error("Parent directory does not exist: {0}")]
    ParentMissing(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("File exists: {0}")]
    AlreadyExists(String),

    #[error("Directory not empty: {0}")]
    NotEmpty(String),

    #[error("Invalid permissions format: {0}")]
    InvalidFormat(String),

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid snapshot: {0}")]
    Snapshot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Node kind tag, as exposed in listings and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    File,
    Directory,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated `rwxrwxrwx` permission string (owner, group, other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permissions(String);

impl Permissions {
    pub fn directory_default() -> Self {
        Self("rwxr-xr-x".to_string())
    }

    pub fn file_default() -> Self {
        Self("rw-r--r--".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when any of the three execute bits is set.
    pub fn is_executable(&self) -> bool {
        self.0.bytes().skip(2).step_by(3).any(|b| b == b'x')
    }
}

impl FromStr for Permissions {
    type Err = VfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if PERMISSIONS_RE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(VfsError::InvalidFormat(s.to_string()))
        }
    }
}

impl TryFrom<String> for Permissions {
    type Error = VfsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Permissions> for String {
    fn from(p: Permissions) -> Self {
        p.0
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload of a node. A directory can never hold content and a file can
/// never hold children.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Directory { children: BTreeMap<String, Node> },
    File { content: String },
}

/// A file or directory in the tree. Parents own their children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub permissions: Permissions,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Node {
    pub fn directory(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            kind: NodeKind::Directory { children: BTreeMap::new() },
            permissions: Permissions::directory_default(),
            created: now,
            modified: now,
        }
    }

    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            kind: NodeKind::File { content: content.into() },
            permissions: Permissions::file_default(),
            created: now,
            modified: now,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self.kind {
            NodeKind::Directory { .. } => NodeType::Directory,
            NodeKind::File { .. } => NodeType::File,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Byte length of the content for files, 0 for directories.
    pub fn size(&self) -> u64 {
        match &self.kind {
            NodeKind::File { content } => content.len() as u64,
            NodeKind::Directory { .. } => 0,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DirEntry {
    pub name: String,
    pub node_type: NodeType,
    pub size: u64,
    pub permissions: Permissions,
    pub modified: DateTime<Utc>,
}

/// Result of `stat`.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub name: String,
    pub node_type: NodeType,
    pub size: u64,
    pub permissions: Permissions,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl From<&Node> for Metadata {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            node_type: node.node_type(),
            size: node.size(),
            permissions: node.permissions.clone(),
            created: node.created,
            modified: node.modified,
        }
    }
}

/// A single hit from `find`.
#[derive(Debug, Clone, PartialEq)]
pub struct FindMatch {
    pub path: String,
    pub node_type: NodeType,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_parse() {
        assert!("rwxr-xr-x".parse::<Permissions>().is_ok());
        assert!("---------".parse::<Permissions>().is_ok());
        assert!("rw-r--r--".parse::<Permissions>().is_ok());
    }

    #[test]
    fn test_permissions_reject_malformed() {
        for bad in ["", "rwx", "rwxrwxrwxr", "xwrxwrxwr", "drwxr-xr-x", "rwxr-xr-q"] {
            match bad.parse::<Permissions>() {
                Err(VfsError::InvalidFormat(s)) => assert_eq!(s, bad),
                other => panic!("expected InvalidFormat for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_permissions_executable() {
        assert!(Permissions::directory_default().is_executable());
        assert!(!Permissions::file_default().is_executable());
        assert!("-----x---".parse::<Permissions>().unwrap().is_executable());
    }

    #[test]
    fn test_node_variants() {
        let file = Node::file("a.txt", "hello");
        assert!(file.is_file());
        assert!(!file.is_directory());
        assert_eq!(file.size(), 5);
        assert_eq!(file.content(), Some("hello"));
        assert!(file.children().is_none());
        assert_eq!(file.permissions.as_str(), "rw-r--r--");

        let dir = Node::directory("docs");
        assert!(dir.is_directory());
        assert_eq!(dir.size(), 0);
        assert!(dir.content().is_none());
        assert!(dir.children().map(|c| c.is_empty()).unwrap_or(false));
        assert_eq!(dir.node_type(), NodeType::Directory);
    }

    #[test]
    fn test_size_counts_bytes() {
        let file = Node::file("u.txt", "héllo");
        assert_eq!(file.size(), 6);
    }
}
