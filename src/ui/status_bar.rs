use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::App;

pub fn render_status_bar(app: &App, pending_count: &str, area: Rect, buf: &mut Buffer) {
  let line = if !pending_count.is_empty() {
    Line::from(vec![
      Span::styled(
        format!(" {pending_count}"),
        Style::default().fg(Color::Indexed(208)).add_modifier(Modifier::BOLD),
      ),
      Span::styled(
        " (count: j/k move, g/G jump)",
        Style::default().fg(Color::DarkGray),
      ),
    ])
  } else if let Some(ref msg) = app.status_message {
    Line::from(vec![Span::styled(
      format!(" {msg}"),
      Style::default().fg(Color::Indexed(150)),
    )])
  } else if let Some(row) = app.cursor_row() {
    let pos_info = format!(" {}/{} ", app.cursor + 1, app.visible().len());
    Line::from(vec![
      Span::styled(
        format!(" {}", row.path.display()),
        Style::default().fg(Color::Indexed(252)).add_modifier(Modifier::BOLD),
      ),
      Span::styled(
        " | Enter toggle | >/< fold | q quit",
        Style::default().fg(Color::DarkGray),
      ),
      Span::styled(pos_info, Style::default().fg(Color::DarkGray)),
    ])
  } else {
    Line::from(vec![Span::styled(
      " (empty)",
      Style::default().fg(Color::DarkGray),
    )])
  };

  let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Indexed(236)));
  paragraph.render(area, buf);
}
