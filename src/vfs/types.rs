//! VFS Types
//!
//! Core node type and errors for the in-memory virtual filesystem.

use indexmap::IndexMap;
use thiserror::Error;

/// Errors raised while constructing the VFS from an archive.
#[derive(Error, Debug)]
pub enum VfsError {
    #[error("cannot read archive '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid archive '{path}': {source}")]
    Archive {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },
}

/// A single VFS tree element.
///
/// Directories keep their children in insertion order so `ls` output is
/// deterministic for a given archive listing. Files carry no content;
/// the VFS records presence only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(IndexMap<String, Node>),
    File,
}

impl Node {
    /// Create an empty directory node.
    pub fn dir() -> Self {
        Node::Directory(IndexMap::new())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Look up a direct child by name. Files have no children.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Directory(children) => children.get(name),
            Node::File => None,
        }
    }

    /// Child names in insertion order. Empty for files.
    pub fn child_names(&self) -> Vec<&str> {
        match self {
            Node::Directory(children) => children.keys().map(String::as_str).collect(),
            Node::File => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_has_no_children() {
        assert_eq!(Node::File.child("anything"), None);
        assert!(Node::File.child_names().is_empty());
    }

    #[test]
    fn test_child_names_keep_insertion_order() {
        let mut children = IndexMap::new();
        children.insert("documents".to_string(), Node::dir());
        children.insert("downloads".to_string(), Node::dir());
        children.insert("a.txt".to_string(), Node::File);
        let node = Node::Directory(children);
        assert_eq!(node.child_names(), vec!["documents", "downloads", "a.txt"]);
    }
}
