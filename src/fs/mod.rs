//! File System Module
//!
//! The virtual file system: a path-addressed tree of files and directories
//! held entirely in memory, plus JSON snapshots of that tree.

pub mod defaults;
pub mod path;
pub mod snapshot;
pub mod types;
pub mod vfs;

pub use snapshot::NodeRecord;
pub use types::*;
pub use vfs::{SharedVfs, VirtualFileSystem};
