//! Path Navigator
//!
//! Resolves `cd` targets against the VFS tree. Resolution follows the
//! emulator's historical semantics: only the exact input `/` is rooted;
//! every other path, leading slash or not, is walked from the current
//! node. The `rooted` flag opts into conventional absolute paths.

use super::types::Node;

/// Where the session currently sits in the tree.
///
/// `segments` is the true path from the root and is always resolvable.
/// `display` is what the prompt shows: the segments consumed by the most
/// recent successful `cd`, replaced wholesale on each resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub segments: Vec<String>,
    pub display: Vec<String>,
}

impl Location {
    /// Prompt-facing path view, e.g. `/` or `/documents/notes`.
    pub fn display_path(&self) -> String {
        if self.display.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.display.join("/"))
        }
    }
}

/// Walk the tree by child-name lookups. Returns `None` if any segment
/// is missing or the walk descends from a file.
pub fn node_at<'a>(root: &'a Node, segments: &[String]) -> Option<&'a Node> {
    let mut current = root;
    for segment in segments {
        current = current.child(segment)?;
    }
    Some(current)
}

/// Resolve `input` against `location`, returning the new location or
/// `Err` with the originally requested path. The caller's location is
/// untouched on failure.
pub fn resolve(
    root: &Node,
    location: &Location,
    input: &str,
    rooted: bool,
) -> Result<Location, String> {
    if input.is_empty() || input == "/" {
        return Ok(Location::default());
    }

    let from_root = rooted && input.starts_with('/');
    let base: &[String] = if from_root { &[] } else { &location.segments };

    let mut current = match node_at(root, base) {
        Some(node) => node,
        None => return Err(input.to_string()),
    };
    let mut consumed = Vec::new();
    for segment in input.trim_matches('/').split('/') {
        match current.child(segment) {
            Some(child) => {
                current = child;
                consumed.push(segment.to_string());
            }
            None => return Err(input.to_string()),
        }
    }

    let mut segments = base.to_vec();
    segments.extend(consumed.iter().cloned());
    Ok(Location {
        segments,
        display: consumed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::builder::build_tree;

    fn sample_root() -> Node {
        build_tree([
            "documents/report.txt",
            "documents/notes/todo.txt",
            "downloads/",
        ])
    }

    #[test]
    fn test_slash_resets_to_root() {
        let root = sample_root();
        let here = Location {
            segments: vec!["documents".into()],
            display: vec!["documents".into()],
        };
        let loc = resolve(&root, &here, "/", false).unwrap();
        assert_eq!(loc, Location::default());
        assert_eq!(loc.display_path(), "/");
    }

    #[test]
    fn test_single_segment_from_root() {
        let root = sample_root();
        let loc = resolve(&root, &Location::default(), "documents", false).unwrap();
        assert_eq!(loc.segments, vec!["documents"]);
        assert_eq!(loc.display_path(), "/documents");
    }

    #[test]
    fn test_missing_child_is_not_found() {
        let root = sample_root();
        let err = resolve(&root, &Location::default(), "invalid_dir", false).unwrap_err();
        assert_eq!(err, "invalid_dir");
    }

    #[test]
    fn test_leading_slash_is_still_relative_by_default() {
        let root = sample_root();
        let here = resolve(&root, &Location::default(), "documents", false).unwrap();
        // "/notes" resolves from documents, not from the root.
        let loc = resolve(&root, &here, "/notes", false).unwrap();
        assert_eq!(loc.segments, vec!["documents", "notes"]);
        assert_eq!(loc.display, vec!["notes"]);
        // ...so a root-anchored path fails from a subdirectory.
        assert!(resolve(&root, &here, "/documents", false).is_err());
    }

    #[test]
    fn test_rooted_mode_anchors_leading_slash() {
        let root = sample_root();
        let here = resolve(&root, &Location::default(), "documents", false).unwrap();
        let loc = resolve(&root, &here, "/downloads", true).unwrap();
        assert_eq!(loc.segments, vec!["downloads"]);
        // Without a leading slash, rooted mode stays relative.
        let loc = resolve(&root, &here, "notes", true).unwrap();
        assert_eq!(loc.segments, vec!["documents", "notes"]);
    }

    #[test]
    fn test_display_replaced_not_accumulated() {
        let root = sample_root();
        let here = resolve(&root, &Location::default(), "documents", false).unwrap();
        let loc = resolve(&root, &here, "notes", false).unwrap();
        assert_eq!(loc.display, vec!["notes"]);
        assert_eq!(loc.segments, vec!["documents", "notes"]);
    }

    #[test]
    fn test_cd_into_file_succeeds_but_not_through_it() {
        let root = sample_root();
        let here = resolve(&root, &Location::default(), "documents", false).unwrap();
        let at_file = resolve(&root, &here, "report.txt", false).unwrap();
        assert_eq!(at_file.segments, vec!["documents", "report.txt"]);
        assert!(resolve(&root, &here, "report.txt/deeper", false).is_err());
        assert!(resolve(&root, &at_file, "anything", false).is_err());
    }

    #[test]
    fn test_node_at_walks_segments() {
        let root = sample_root();
        let segs = vec!["documents".to_string(), "notes".to_string()];
        assert!(node_at(&root, &segs).unwrap().is_directory());
        assert!(node_at(&root, &["nope".to_string()]).is_none());
    }
}
