use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::fs::FileTree;

/// Set of selected file paths. Directories are never members; toggling one
/// bulk-toggles its file-type descendants.
#[derive(Debug, Default)]
pub struct Selection {
  paths: HashSet<PathBuf>,
}

impl Selection {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn contains(&self, path: &Path) -> bool {
    self.paths.contains(path)
  }

  pub fn len(&self) -> usize {
    self.paths.len()
  }

  pub fn is_empty(&self) -> bool {
    self.paths.is_empty()
  }

  /// Selected paths in lexicographic order, for deterministic snippet output.
  pub fn sorted_paths(&self) -> Vec<&PathBuf> {
    let mut paths: Vec<&PathBuf> = self.paths.iter().collect();
    paths.sort();
    paths
  }

  /// Toggles the entry at `index`. A file flips its own membership. A
  /// directory bulk-toggles its file descendants: fully selected means
  /// deselect them all, anything less means select the rest. Returns whether
  /// the selection changed, which drives clipboard republication.
  pub fn toggle(&mut self, tree: &FileTree, index: usize) -> bool {
    let Some(entry) = tree.entries.get(index) else {
      return false;
    };

    if !entry.is_dir {
      if !self.paths.remove(&entry.path) {
        self.paths.insert(entry.path.clone());
      }
      return true;
    }

    let files: Vec<&PathBuf> = tree.entries[tree.descendants(index)]
      .iter()
      .filter(|e| !e.is_dir)
      .map(|e| &e.path)
      .collect();
    if files.is_empty() {
      return false;
    }

    if files.iter().all(|p| self.paths.contains(*p)) {
      for path in &files {
        self.paths.remove(*path);
      }
    } else {
      for path in &files {
        self.paths.insert((*path).clone());
      }
    }
    true
  }
}
