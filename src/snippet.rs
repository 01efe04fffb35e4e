use std::path::Path;

use crate::select::Selection;

/// Maps a file extension to a Markdown code-fence language tag. Unknown
/// extensions get an untagged fence.
pub fn language_for_path(path: &Path) -> &'static str {
  let ext = path
    .extension()
    .and_then(|e| e.to_str())
    .map(|e| e.to_lowercase())
    .unwrap_or_default();
  match ext.as_str() {
    "c" | "h" => "c",
    "cc" | "cpp" | "cxx" | "hpp" => "cpp",
    "cs" => "csharp",
    "css" => "css",
    "go" => "go",
    "htm" | "html" => "html",
    "java" => "java",
    "js" | "jsx" | "mjs" => "javascript",
    "json" => "json",
    "kt" => "kotlin",
    "m" => "objective-c",
    "md" => "markdown",
    "php" => "php",
    "pl" => "perl",
    "py" => "python",
    "rb" => "ruby",
    "rs" => "rust",
    "sh" | "bash" => "bash",
    "sol" => "solidity",
    "sql" => "sql",
    "toml" => "toml",
    "ts" | "tsx" => "typescript",
    "yaml" | "yml" => "yaml",
    _ => "",
  }
}

/// Reads a file as text; unreadable files degrade to empty content rather
/// than failing the snippet build.
fn read_file_content(path: &Path) -> String {
  match std::fs::read(path) {
    Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    Err(_) => String::new(),
  }
}

/// Builds the Markdown snippet for the selected files: one heading with the
/// relative path, then a fenced code block, sorted by path. Selected paths
/// that no longer resolve to files are skipped.
pub fn build_snippet(selection: &Selection, root: &Path) -> String {
  let mut parts = Vec::new();
  for rel in selection.sorted_paths() {
    let full = root.join(rel);
    if !full.is_file() {
      continue;
    }
    let lang = language_for_path(&full);
    let content = read_file_content(&full);
    let content = content.trim_end_matches('\n');
    let part = format!("{}\n```{lang}\n{content}\n```", rel.display());
    parts.push(part.trim_matches('\n').to_string());
  }
  parts.join("\n\n").trim().to_string()
}
