mod action;
mod app;
mod config;
mod event;
mod fs;
mod keys;
mod select;
mod snippet;
mod ui;
mod viewport;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
  EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::event::{Event, EventLoop};
use crate::fs::IgnoreRules;
use crate::keys::{KeyInterpreter, KeyResult};

/// Grace window for the second key of a `gg` sequence.
const GG_WINDOW: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
  let args: Vec<String> = std::env::args().skip(1).collect();

  let mut show_help = false;
  let mut show_version = false;
  let mut path_arg: Option<String> = None;

  for arg in &args {
    match arg.as_str() {
      "--help" | "-h" => show_help = true,
      "--version" | "-V" => show_version = true,
      a if !a.starts_with('-') => path_arg = Some(a.to_string()),
      _ => {
        eprintln!("fsel: unknown option '{arg}'");
        std::process::exit(1);
      }
    }
  }

  if show_help {
    println!(
      "\
fsel - terminal file selector

Usage: fsel [options] [path]

Browse the tree, pick files, and the clipboard always holds a Markdown
snippet of the selected files' contents.

Keys:
  j/k, arrows          move (takes a count: 3j)
  [count]g, [count]G   go to line
  gg / G               top / bottom
  Enter                toggle selection (directories toggle their files)
  > / <                collapse / expand a directory
  q                    quit

Options:
  -h, --help           Print this help message
  -V, --version        Print version

If no path is given, opens the current directory."
    );
    return Ok(());
  }

  if show_version {
    println!("fsel {}", env!("CARGO_PKG_VERSION"));
    return Ok(());
  }

  let (config, mut config_errors) = Config::load();
  let rules = IgnoreRules::new(&config.ignore_patterns, &mut config_errors);

  let root = path_arg
    .map(PathBuf::from)
    .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
  let root = std::fs::canonicalize(root)?;

  // Install panic hook that restores terminal
  let original_hook = panic::take_hook();
  panic::set_hook(Box::new(move |info| {
    let _ = restore_terminal();
    original_hook(info);
  }));

  setup_terminal()?;
  let backend = CrosstermBackend::new(io::stdout());
  let mut terminal = Terminal::new(backend)?;

  let mut app = App::new(root, &rules)?;
  if !config_errors.is_empty() {
    app.set_status(config_errors.join("; "));
  }

  let events = EventLoop::new(Duration::from_millis(config.tick_rate_ms));
  let mut keys = KeyInterpreter::new();

  loop {
    terminal.draw(|frame| ui::draw(frame, &mut app, &keys))?;

    match events.next()? {
      Event::Key(key) => match keys.interpret(key) {
        KeyResult::Action(action) => app.update(action),
        KeyResult::Pending => {
          // The one bounded suspension point: wait briefly for the second
          // key of the sequence, then fall back to non-blocking input.
          let second = events.next_key_within(GG_WINDOW);
          if let Some(action) = keys.finish_sequence(second) {
            app.update(action);
          }
        }
        KeyResult::Ignored => {}
      },
      Event::Resize(w, h) => app.update(Action::Resize(w, h)),
      Event::Tick => app.update(Action::Tick),
    }

    if app.should_quit {
      break;
    }
  }

  restore_terminal()?;
  Ok(())
}

fn setup_terminal() -> Result<()> {
  enable_raw_mode()?;
  execute!(io::stdout(), EnterAlternateScreen)?;
  Ok(())
}

fn restore_terminal() -> Result<()> {
  disable_raw_mode()?;
  execute!(io::stdout(), LeaveAlternateScreen)?;
  Ok(())
}
