use std::collections::HashSet;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::entry::Entry;
use super::ignore::IgnoreRules;

/// The scanned tree. Entries are in depth-first pre-order with children
/// sorted lexicographically by name, so every directory's descendants occupy
/// a contiguous run immediately after it. The list is built once and never
/// mutated; collapse and selection state live outside it.
#[derive(Debug)]
pub struct FileTree {
  pub root: PathBuf,
  pub entries: Vec<Entry>,
}

impl FileTree {
  pub fn scan(root: PathBuf, rules: &IgnoreRules) -> Result<Self> {
    let mut tree = Self { root: root.clone(), entries: Vec::new() };
    tree.scan_dir(&root, Path::new(""), 0, rules);
    Ok(tree)
  }

  fn scan_dir(&mut self, abs: &Path, rel: &Path, depth: usize, rules: &IgnoreRules) {
    // Unreadable directories are skipped, never abort the scan
    let read_dir = match std::fs::read_dir(abs) {
      Ok(rd) => rd,
      Err(_) => return,
    };

    let mut children: Vec<(String, bool, bool)> = Vec::new();
    for entry in read_dir.flatten() {
      let Ok(file_type) = entry.file_type() else { continue };
      let is_symlink = file_type.is_symlink();
      let is_dir = if is_symlink {
        entry.path().is_dir()
      } else {
        file_type.is_dir()
      };
      let name = entry.file_name().to_string_lossy().to_string();
      if is_dir && rules.is_ignored(&name) {
        continue;
      }
      children.push((name, is_dir, is_symlink));
    }
    children.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, is_dir, is_symlink) in children {
      let rel_path = rel.join(&name);
      self.entries.push(Entry::new(rel_path.clone(), depth, is_dir, is_symlink));
      // Symlinked directories are listed but never descended into
      if is_dir && !is_symlink {
        self.scan_dir(&abs.join(&name), &rel_path, depth + 1, rules);
      }
    }
  }

  /// Contiguous run of strict descendants of the entry at `index`, bounded by
  /// the next entry whose depth is not greater. Empty for files.
  pub fn descendants(&self, index: usize) -> Range<usize> {
    let depth = self.entries[index].depth;
    let mut end = index + 1;
    while end < self.entries.len() && self.entries[end].depth > depth {
      end += 1;
    }
    index + 1..end
  }

  /// Ordered tree indices visible under `collapsed`. A collapsed directory
  /// stays visible itself; its whole descendant run is skipped in one forward
  /// jump, keeping the pass linear in tree size.
  pub fn visible_indices(&self, collapsed: &HashSet<PathBuf>) -> Vec<usize> {
    let mut visible = Vec::with_capacity(self.entries.len());
    let mut i = 0;
    while i < self.entries.len() {
      let entry = &self.entries[i];
      visible.push(i);
      if entry.is_dir && collapsed.contains(&entry.path) {
        i = self.descendants(i).end;
      } else {
        i += 1;
      }
    }
    visible
  }
}
