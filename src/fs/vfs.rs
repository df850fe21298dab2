//! Virtual File System
//!
//! An in-memory tree of [`Node`]s rooted at `/`, addressed by POSIX-like
//! paths. Relative paths resolve against the current working directory.
//!
//! Every operation validates before it mutates, so a failed call leaves the
//! tree exactly as it was.

use std::sync::Arc;

use regex_lite::Regex;
use tokio::sync::RwLock;
use tracing::debug;

use super::path::{self, ROOT};
use super::types::*;

/// Handle shared by every collaborator that needs the tree. Mutations take
/// the write lock, so concurrent sessions never observe a partial update.
pub type SharedVfs = Arc<RwLock<VirtualFileSystem>>;

#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    root: Node,
    cwd: String,
}

impl VirtualFileSystem {
    /// Create an empty filesystem containing only `/`.
    pub fn new() -> Self {
        Self {
            root: Node::directory(ROOT),
            cwd: ROOT.to_string(),
        }
    }

    pub fn into_shared(self) -> SharedVfs {
        Arc::new(RwLock::new(self))
    }

    // ------------------------------------------------------------------
    // Paths and lookup
    // ------------------------------------------------------------------

    pub fn normalize_path(&self, path: &str) -> String {
        path::normalize(path, &self.cwd)
    }

    pub fn resolve_path(&self, path: &str) -> Option<&Node> {
        let normalized = self.normalize_path(path);
        self.lookup(&normalized)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.resolve_path(path).is_some()
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.resolve_path(path).map(Node::is_file).unwrap_or(false)
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.resolve_path(path).map(Node::is_directory).unwrap_or(false)
    }

    fn lookup(&self, normalized: &str) -> Option<&Node> {
        let mut current = &self.root;
        for segment in path::segments(normalized) {
            current = current.children()?.get(segment)?;
        }
        Some(current)
    }

    fn lookup_mut(&mut self, normalized: &str) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for segment in path::segments(normalized) {
            current = current.children_mut()?.get_mut(segment)?;
        }
        Some(current)
    }

    /// Check that the parent of `normalized` is an existing directory.
    fn check_parent(&self, normalized: &str) -> Result<(), VfsError> {
        let parent = path::parent_path(normalized);
        match self.lookup(parent) {
            Some(node) if node.is_directory() => Ok(()),
            Some(_) => Err(VfsError::NotADirectory(parent.to_string())),
            None => Err(VfsError::ParentMissing(parent.to_string())),
        }
    }

    fn parent_dir_mut(&mut self, normalized: &str) -> Result<&mut Node, VfsError> {
        self.check_parent(normalized)?;
        let parent = path::parent_path(normalized);
        self.lookup_mut(parent)
            .ok_or_else(|| VfsError::ParentMissing(parent.to_string()))
    }

    /// Insert `node` under the parent of `normalized` and bump the parent's
    /// modified time.
    fn attach(&mut self, normalized: &str, node: Node) -> Result<(), VfsError> {
        let parent = self.parent_dir_mut(normalized)?;
        match parent.children_mut() {
            Some(children) => {
                children.insert(node.name.clone(), node);
            }
            None => return Err(VfsError::NotADirectory(path::parent_path(normalized).to_string())),
        }
        parent.touch();
        Ok(())
    }

    /// Remove the node at `normalized` from its parent. The caller has
    /// already checked that it exists.
    fn detach(&mut self, normalized: &str) -> Result<Node, VfsError> {
        let name = path::file_name(normalized).to_string();
        let parent = self.parent_dir_mut(normalized)?;
        let removed = parent
            .children_mut()
            .and_then(|children| children.remove(&name))
            .ok_or_else(|| VfsError::NotFound(normalized.to_string()))?;
        parent.touch();
        Ok(removed)
    }

    /// Walk the working directory up until it names a directory again.
    fn repair_cwd(&mut self) {
        let mut candidate = self.cwd.clone();
        while !self.lookup(&candidate).map(Node::is_directory).unwrap_or(false) {
            if candidate == ROOT {
                break;
            }
            candidate = path::parent_path(&candidate).to_string();
        }
        if candidate != self.cwd {
            debug!(from = %self.cwd, to = %candidate, "working directory moved");
            self.cwd = candidate;
        }
    }

    // ------------------------------------------------------------------
    // Creation and mutation
    // ------------------------------------------------------------------

    pub fn mkdir(&mut self, path: &str) -> Result<(), VfsError> {
        let normalized = self.normalize_path(path);
        if self.lookup(&normalized).is_some() {
            return Err(VfsError::AlreadyExists(normalized));
        }
        let name = path::file_name(&normalized).to_string();
        self.attach(&normalized, Node::directory(name))
    }

    /// Create every missing directory along `path`.
    pub fn mkdir_all(&mut self, path: &str) -> Result<(), VfsError> {
        let normalized = self.normalize_path(path);
        let mut current = ROOT.to_string();
        for segment in path::segments(&normalized) {
            current = path::join(&current, segment);
            match self.lookup(&current) {
                Some(node) if node.is_directory() => {}
                Some(_) => return Err(VfsError::NotADirectory(current)),
                None => self.mkdir(&current)?,
            }
        }
        Ok(())
    }

    /// Create an empty file, or refresh the modified time of an existing node.
    pub fn touch(&mut self, path: &str) -> Result<(), VfsError> {
        let normalized = self.normalize_path(path);
        if normalized == ROOT {
            self.root.touch();
            return Ok(());
        }
        let name = path::file_name(&normalized).to_string();
        let parent = self.parent_dir_mut(&normalized)?;
        if let Some(children) = parent.children_mut() {
            match children.get_mut(&name) {
                Some(existing) => existing.touch(),
                None => {
                    children.insert(name.clone(), Node::file(name, ""));
                }
            }
        }
        parent.touch();
        Ok(())
    }

    /// Create or overwrite a file. Overwriting keeps the original creation
    /// time and permissions.
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), VfsError> {
        let normalized = self.normalize_path(path);
        let existing_is_dir = self.lookup(&normalized).map(Node::is_directory);
        match existing_is_dir {
            Some(true) => Err(VfsError::NotAFile(normalized)),
            Some(false) => {
                if let Some(node) = self.lookup_mut(&normalized) {
                    node.kind = NodeKind::File { content: content.to_string() };
                    node.touch();
                }
                self.parent_dir_mut(&normalized)?.touch();
                Ok(())
            }
            None => {
                let name = path::file_name(&normalized).to_string();
                self.attach(&normalized, Node::file(name, content))
            }
        }
    }

    pub fn read_file(&self, path: &str) -> Result<String, VfsError> {
        let normalized = self.normalize_path(path);
        match self.lookup(&normalized) {
            Some(Node { kind: NodeKind::File { content }, .. }) => Ok(content.clone()),
            Some(_) => Err(VfsError::NotAFile(normalized)),
            None => Err(VfsError::NotFound(normalized)),
        }
    }

    /// Remove a file. Directories go through [`rmdir`](Self::rmdir) or
    /// [`remove_tree`](Self::remove_tree).
    pub fn delete(&mut self, path: &str) -> Result<(), VfsError> {
        let normalized = self.normalize_path(path);
        match self.lookup(&normalized) {
            None => return Err(VfsError::NotFound(normalized)),
            Some(node) if node.is_directory() => return Err(VfsError::NotAFile(normalized)),
            Some(_) => {}
        }
        self.detach(&normalized)?;
        Ok(())
    }

    /// Remove an empty directory.
    pub fn rmdir(&mut self, path: &str) -> Result<(), VfsError> {
        let normalized = self.normalize_path(path);
        if normalized == ROOT {
            return Err(VfsError::InvalidOperation("cannot remove '/'".to_string()));
        }
        match self.lookup(&normalized) {
            None => return Err(VfsError::NotFound(normalized)),
            Some(node) => match node.children() {
                None => return Err(VfsError::NotADirectory(normalized)),
                Some(children) if !children.is_empty() => {
                    return Err(VfsError::NotEmpty(normalized))
                }
                Some(_) => {}
            },
        }
        self.detach(&normalized)?;
        self.repair_cwd();
        Ok(())
    }

    /// Remove a file or a directory together with everything below it.
    pub fn remove_tree(&mut self, path: &str) -> Result<(), VfsError> {
        let normalized = self.normalize_path(path);
        if normalized == ROOT {
            return Err(VfsError::InvalidOperation("cannot remove '/'".to_string()));
        }
        if self.lookup(&normalized).is_none() {
            return Err(VfsError::NotFound(normalized));
        }
        self.detach(&normalized)?;
        self.repair_cwd();
        Ok(())
    }

    /// Validate a copy/move destination before anything is touched.
    fn check_destination(&self, src: &str, dst: &str, is_dir: bool) -> Result<(), VfsError> {
        if self.lookup(dst).is_some() {
            return Err(VfsError::AlreadyExists(dst.to_string()));
        }
        if is_dir && path::is_within(dst, src) {
            return Err(VfsError::InvalidOperation(format!(
                "cannot move or copy '{}' into itself",
                src
            )));
        }
        self.check_parent(dst)
    }

    /// Deep-copy a node to a new path.
    pub fn copy(&mut self, src: &str, dst: &str) -> Result<(), VfsError> {
        let src = self.normalize_path(src);
        let dst = self.normalize_path(dst);
        let mut node = self
            .lookup(&src)
            .cloned()
            .ok_or_else(|| VfsError::NotFound(src.clone()))?;
        self.check_destination(&src, &dst, node.is_directory())?;

        node.name = path::file_name(&dst).to_string();
        node.created = chrono::Utc::now();
        node.modified = node.created;
        self.attach(&dst, node)
    }

    /// Move a node to a new path.
    pub fn rename(&mut self, src: &str, dst: &str) -> Result<(), VfsError> {
        let src = self.normalize_path(src);
        let dst = self.normalize_path(dst);
        if src == ROOT {
            return Err(VfsError::InvalidOperation("cannot move '/'".to_string()));
        }
        let is_dir = match self.lookup(&src) {
            Some(node) => node.is_directory(),
            None => return Err(VfsError::NotFound(src)),
        };
        if src == dst {
            return Ok(());
        }
        self.check_destination(&src, &dst, is_dir)?;

        let mut node = self.detach(&src)?;
        node.name = path::file_name(&dst).to_string();
        node.touch();
        self.attach(&dst, node)?;
        self.repair_cwd();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Directory entries, children sorted by name. A synthetic `..` entry
    /// comes first everywhere except `/`.
    pub fn list(&self, path: &str) -> Result<Vec<DirEntry>, VfsError> {
        let normalized = self.normalize_path(path);
        let node = self
            .lookup(&normalized)
            .ok_or_else(|| VfsError::NotFound(normalized.clone()))?;
        let children = node
            .children()
            .ok_or_else(|| VfsError::NotADirectory(normalized.clone()))?;

        let mut entries = Vec::with_capacity(children.len() + 1);
        if normalized != ROOT {
            entries.push(DirEntry {
                name: "..".to_string(),
                node_type: NodeType::Directory,
                size: 0,
                permissions: Permissions::directory_default(),
                modified: node.modified,
            });
        }
        for (name, child) in children {
            entries.push(DirEntry {
                name: name.clone(),
                node_type: child.node_type(),
                size: child.size(),
                permissions: child.permissions.clone(),
                modified: child.modified,
            });
        }
        Ok(entries)
    }

    pub fn stat(&self, path: &str) -> Result<Metadata, VfsError> {
        let normalized = self.normalize_path(path);
        self.lookup(&normalized)
            .map(Metadata::from)
            .ok_or(VfsError::NotFound(normalized))
    }

    pub fn set_permissions(&mut self, path: &str, permissions: &str) -> Result<(), VfsError> {
        let normalized = self.normalize_path(path);
        if self.lookup(&normalized).is_none() {
            return Err(VfsError::NotFound(normalized));
        }
        let permissions: Permissions = permissions.parse()?;
        if let Some(node) = self.lookup_mut(&normalized) {
            node.permissions = permissions;
            node.touch();
        }
        Ok(())
    }

    pub fn get_permissions(&self, path: &str) -> Result<Permissions, VfsError> {
        let normalized = self.normalize_path(path);
        self.lookup(&normalized)
            .map(|node| node.permissions.clone())
            .ok_or(VfsError::NotFound(normalized))
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Change the working directory. State is untouched on failure.
    pub fn cd(&mut self, path: &str) -> Result<&str, VfsError> {
        let normalized = self.normalize_path(path);
        match self.lookup(&normalized).map(Node::is_directory) {
            None => Err(VfsError::NotFound(normalized)),
            Some(false) => Err(VfsError::NotADirectory(normalized)),
            Some(true) => {
                debug!(cwd = %normalized, "cd");
                self.cwd = normalized;
                Ok(&self.cwd)
            }
        }
    }

    pub fn pwd(&self) -> &str {
        &self.cwd
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Depth-first search below `start` for nodes whose name matches the
    /// regular expression `pattern` anywhere in the name.
    pub fn find(&self, start: &str, pattern: &str) -> Result<Vec<FindMatch>, VfsError> {
        let normalized = self.normalize_path(start);
        let node = self
            .lookup(&normalized)
            .ok_or_else(|| VfsError::NotFound(normalized.clone()))?;
        if !node.is_directory() {
            return Err(VfsError::NotADirectory(normalized));
        }
        let re = Regex::new(pattern).map_err(|e| VfsError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let mut matches = Vec::new();
        collect_matches(node, &normalized, &re, &mut matches);
        Ok(matches)
    }

    // ------------------------------------------------------------------
    // Snapshot access
    // ------------------------------------------------------------------

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    pub(crate) fn replace_root(&mut self, root: Node) {
        self.root = root;
        self.repair_cwd();
    }
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_matches(dir: &Node, dir_path: &str, re: &Regex, out: &mut Vec<FindMatch>) {
    let Some(children) = dir.children() else {
        return;
    };
    for (name, child) in children {
        let child_path = path::join(dir_path, name);
        if re.is_match(name) {
            out.push(FindMatch {
                path: child_path.clone(),
                node_type: child.node_type(),
                size: child.size(),
                modified: child.modified,
            });
        }
        if child.is_directory() {
            collect_matches(child, &child_path, re, out);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
