pub mod file_tree;
pub mod status_bar;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::App;
use crate::keys::KeyInterpreter;

pub fn draw(frame: &mut Frame, app: &mut App, keys: &KeyInterpreter) {
  let area = frame.area();

  // Vertical layout: header, tree, status bar
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Min(3),
      Constraint::Length(1),
    ])
    .split(area);

  render_header(app, chunks[0], frame.buffer_mut());

  // Keep the viewport height in sync with the actual pane
  app.viewport_height = chunks[1].height.saturating_sub(2) as usize;

  file_tree::render_file_tree(app, chunks[1], frame.buffer_mut());
  status_bar::render_status_bar(app, keys.pending_count(), chunks[2], frame.buffer_mut());
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
  let path_str = app.tree.root.to_string_lossy();
  let mut spans = vec![
    Span::styled(" ", Style::default().fg(Color::Indexed(75))),
    Span::styled(
      path_str.to_string(),
      Style::default()
        .fg(Color::Indexed(252))
        .add_modifier(Modifier::BOLD),
    ),
  ];

  if !app.selection.is_empty() {
    spans.push(Span::styled(
      format!("  {} selected", app.selection.len()),
      Style::default().fg(Color::Indexed(114)),
    ));
  }

  let line = Line::from(spans);
  let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Indexed(236)));
  paragraph.render(area, buf);
}
