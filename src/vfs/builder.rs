//! VFS Builder
//!
//! Turns a zip archive's flat entry list into a nested directory tree.
//! Only entry names are consumed; contents are never decompressed.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use indexmap::IndexMap;
use zip::ZipArchive;

use super::types::{Node, VfsError};

/// List entry names from a zip archive, in central-directory order.
pub fn list_entries<R: Read + Seek>(reader: R) -> Result<Vec<String>, zip::result::ZipError> {
    let mut archive = ZipArchive::new(reader)?;
    let mut entries = Vec::with_capacity(archive.len());
    // by_index rather than file_names(): the index walk is ordered,
    // which keeps the resulting tree deterministic.
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i)?;
        entries.push(entry.name().to_string());
    }
    Ok(entries)
}

/// Open an archive file and return its entry list.
pub fn load_archive(path: &Path) -> Result<Vec<String>, VfsError> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|source| VfsError::Io {
        path: display.clone(),
        source,
    })?;
    list_entries(file).map_err(|source| VfsError::Archive {
        path: display,
        source,
    })
}

/// Build the VFS tree from a flat list of entry paths.
///
/// Intermediate segments become directories; the final segment becomes a
/// directory when the raw entry ends with `/`, otherwise a file. An
/// entry first seen as a file and later used as an intermediate segment
/// is promoted to a directory. Entries consisting only of separators
/// are skipped.
pub fn build_tree<I, S>(entries: I) -> Node
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = IndexMap::new();
    for entry in entries {
        let raw = entry.as_ref();
        let is_dir_entry = raw.ends_with('/');
        let parts: Vec<&str> = raw
            .trim_matches('/')
            .split('/')
            .filter(|p| !p.is_empty())
            .collect();
        let Some((last, intermediate)) = parts.split_last() else {
            continue;
        };

        let mut current = &mut root;
        for part in intermediate {
            let slot = current
                .entry(part.to_string())
                .or_insert_with(Node::dir);
            if !slot.is_directory() {
                *slot = Node::dir();
            }
            let Node::Directory(children) = slot else {
                unreachable!()
            };
            current = children;
        }

        let leaf = if is_dir_entry { Node::dir() } else { Node::File };
        current.entry(last.to_string()).or_insert(leaf);
    }
    Node::Directory(root)
}
