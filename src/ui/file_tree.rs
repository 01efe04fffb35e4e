use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::app::{App, Row};

fn row_marker(row: &Row) -> &'static str {
  if !row.is_dir {
    return "   ";
  }
  if row.is_collapsed { "[+]" } else { "[D]" }
}

fn selection_mark(row: &Row) -> &'static str {
  if row.is_selected { "[x]" } else { "[ ]" }
}

pub fn render_file_tree(app: &App, area: Rect, buf: &mut Buffer) {
  let rows = app.rows();
  let inner_height = area.height.saturating_sub(2) as usize;

  let start = app.scroll_offset().min(rows.len());
  let end = (start + inner_height).min(rows.len());

  let mut lines: Vec<Line> = Vec::with_capacity(inner_height);
  for (view_idx, row) in rows[start..end].iter().enumerate() {
    let line_number = start + view_idx + 1;
    let indent = "  ".repeat(row.depth);

    let (number_style, mark_style, name_style) = if row.is_cursor {
      let sel = Style::default()
        .fg(Color::Indexed(234))
        .bg(Color::Indexed(75))
        .add_modifier(Modifier::BOLD);
      (sel, sel, sel)
    } else {
      let mark = if row.is_selected {
        Style::default().fg(Color::Indexed(114))
      } else {
        Style::default().fg(Color::DarkGray)
      };
      let name = if row.is_dir {
        Style::default().fg(Color::Indexed(75))
      } else if row.is_selected {
        Style::default().fg(Color::Indexed(114))
      } else {
        Style::default().fg(Color::Indexed(252))
      };
      (Style::default().fg(Color::DarkGray), mark, name)
    };

    let symlink_suffix = if row.is_symlink { "@" } else { "" };
    let spans = vec![
      Span::styled(format!("{line_number:4} "), number_style),
      Span::styled(indent, name_style),
      Span::styled(selection_mark(row), mark_style),
      Span::styled(format!(" {} ", row_marker(row)), name_style),
      Span::styled(format!("{}{symlink_suffix}", row.name), name_style),
    ];
    lines.push(Line::from(spans));
  }

  let dir_name = app
    .tree
    .root
    .file_name()
    .and_then(|n| n.to_str())
    .unwrap_or("/");

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Indexed(75)))
    .title(format!(" {dir_name} "))
    .title_style(Style::default().fg(Color::Indexed(75)));

  let paragraph = Paragraph::new(lines).block(block);
  paragraph.render(area, buf);
}
