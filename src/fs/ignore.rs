use globset::{Glob, GlobSet, GlobSetBuilder};

/// Directory names that are never scanned: version-control metadata,
/// dependency caches, and bytecode caches.
pub const DEFAULT_IGNORED: &[&str] = &[
  ".git",
  ".hg",
  ".svn",
  "node_modules",
  "target",
  "vendor",
  "__pycache__",
  ".mypy_cache",
  ".pytest_cache",
  ".venv",
  ".tox",
];

/// The fixed default set plus user glob patterns from config.
#[derive(Debug, Default)]
pub struct IgnoreRules {
  globs: Option<GlobSet>,
}

impl IgnoreRules {
  pub fn new(patterns: &[String], errors: &mut Vec<String>) -> Self {
    if patterns.is_empty() {
      return Self { globs: None };
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
      match Glob::new(pattern) {
        Ok(glob) => {
          builder.add(glob);
        }
        Err(e) => errors.push(format!("invalid ignore pattern {pattern:?}: {e}")),
      }
    }
    let globs = match builder.build() {
      Ok(set) => Some(set),
      Err(e) => {
        errors.push(format!("failed to build ignore set: {e}"));
        None
      }
    };
    Self { globs }
  }

  /// Matched directories are excluded from the tree entirely, contents
  /// included, and never descended into.
  pub fn is_ignored(&self, name: &str) -> bool {
    if DEFAULT_IGNORED.contains(&name) {
      return true;
    }
    self.globs.as_ref().is_some_and(|g| g.is_match(name))
  }
}
