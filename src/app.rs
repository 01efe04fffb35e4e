use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;

use crate::action::Action;
use crate::fs::{FileTree, IgnoreRules};
use crate::select::Selection;
use crate::snippet;
use crate::viewport;

/// One renderer-facing row of the current frame. Regenerated whenever
/// visibility, cursor, or selection changes; the renderer draws these and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
  pub path: PathBuf,
  pub name: String,
  pub depth: usize,
  pub is_dir: bool,
  pub is_symlink: bool,
  pub is_collapsed: bool,
  pub is_selected: bool,
  pub is_cursor: bool,
}

/// Session state: the immutable tree plus the collapse, selection, and
/// navigation state, all owned here and mutated one action at a time.
pub struct App {
  pub tree: FileTree,
  pub collapsed: HashSet<PathBuf>,
  pub selection: Selection,
  pub cursor: usize,
  pub viewport_height: usize,
  pub should_quit: bool,
  pub status_message: Option<String>,
  status_ticks: u8,
}

impl App {
  pub fn new(root: PathBuf, rules: &IgnoreRules) -> Result<Self> {
    let tree = FileTree::scan(root, rules)?;
    let mut app = Self {
      tree,
      collapsed: HashSet::new(),
      selection: Selection::new(),
      cursor: 0,
      viewport_height: 20,
      should_quit: false,
      status_message: None,
      status_ticks: 0,
    };
    // Publish the (empty) snippet so the clipboard reflects the session
    // from the first frame, like every later selection change.
    app.publish_selection();
    app.status_message = None;
    Ok(app)
  }

  pub fn update(&mut self, action: Action) {
    match action {
      Action::Quit => self.should_quit = true,
      Action::MoveDown(n) => self.move_down(n),
      Action::MoveUp(n) => self.cursor = self.cursor.saturating_sub(n),
      Action::JumpTo(target) => self.jump_to(target),
      Action::JumpTop => self.cursor = 0,
      Action::JumpBottom => self.jump_to(usize::MAX),
      Action::ToggleSelect => self.toggle_select(),
      Action::Collapse => self.collapse_cursor(),
      Action::Expand => self.expand_cursor(),
      Action::Resize(_, h) => {
        // header + status bar + tree borders
        self.viewport_height = h.saturating_sub(4) as usize;
      }
      Action::Tick => self.expire_status(),
    }
    self.restore_visibility();
    self.clamp_cursor();
  }

  /// Visible tree indices under the current collapse set.
  pub fn visible(&self) -> Vec<usize> {
    self.tree.visible_indices(&self.collapsed)
  }

  /// First row of the scroll window; derived, never stored.
  pub fn scroll_offset(&self) -> usize {
    viewport::window(self.cursor, self.visible().len(), self.viewport_height)
  }

  pub fn rows(&self) -> Vec<Row> {
    self
      .visible()
      .iter()
      .enumerate()
      .map(|(vi, &idx)| {
        let entry = &self.tree.entries[idx];
        Row {
          path: entry.path.clone(),
          name: entry.name.clone(),
          depth: entry.depth,
          is_dir: entry.is_dir,
          is_symlink: entry.is_symlink,
          is_collapsed: entry.is_dir && self.collapsed.contains(&entry.path),
          is_selected: !entry.is_dir && self.selection.contains(&entry.path),
          is_cursor: vi == self.cursor,
        }
      })
      .collect()
  }

  /// The row under the cursor, if any.
  pub fn cursor_row(&self) -> Option<Row> {
    self.rows().into_iter().find(|r| r.is_cursor)
  }

  pub fn set_status(&mut self, message: String) {
    self.status_message = Some(message);
    self.status_ticks = 30;
  }

  fn expire_status(&mut self) {
    if self.status_ticks > 0 {
      self.status_ticks -= 1;
    } else {
      self.status_message = None;
    }
  }

  fn move_down(&mut self, n: usize) {
    let len = self.visible().len();
    if len > 0 {
      self.cursor = self.cursor.saturating_add(n).min(len - 1);
    }
  }

  fn jump_to(&mut self, target: usize) {
    let len = self.visible().len();
    if len > 0 {
      self.cursor = target.min(len - 1);
    }
  }

  fn toggle_select(&mut self) {
    let visible = self.visible();
    let Some(&idx) = visible.get(self.cursor) else {
      return;
    };
    if self.selection.toggle(&self.tree, idx) {
      self.set_status(format!("{} file(s) selected", self.selection.len()));
      self.publish_selection();
    }
  }

  fn collapse_cursor(&mut self) {
    let visible = self.visible();
    let Some(&idx) = visible.get(self.cursor) else {
      return;
    };
    let entry = &self.tree.entries[idx];
    // No-op on files and already-collapsed directories
    if entry.is_dir && !self.collapsed.contains(&entry.path) {
      self.collapsed.insert(entry.path.clone());
    }
  }

  fn expand_cursor(&mut self) {
    let visible = self.visible();
    let Some(&idx) = visible.get(self.cursor) else {
      return;
    };
    let entry = &self.tree.entries[idx];
    if entry.is_dir {
      self.collapsed.remove(&entry.path);
    }
  }

  /// An all-hidden visible list is a broken invariant (only expressible if
  /// collapse state goes bad); recover by resetting it rather than rendering
  /// an empty screen.
  fn restore_visibility(&mut self) {
    if !self.tree.entries.is_empty() && self.visible().is_empty() {
      self.collapsed.clear();
    }
  }

  fn clamp_cursor(&mut self) {
    self.cursor = self.cursor.min(self.visible().len().saturating_sub(1));
  }

  /// Selection changed: rebuild the snippet and republish it. The snippet
  /// builder owns the formatting; a clipboard failure lands in the status
  /// bar and the session continues.
  fn publish_selection(&mut self) {
    let text = snippet::build_snippet(&self.selection, &self.tree.root);
    if let Err(e) = clipboard_anywhere::set_clipboard(&text) {
      self.set_status(format!("Clipboard update failed: {e}"));
    }
  }
}
