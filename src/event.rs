use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

pub enum Event {
  Key(KeyEvent),
  Resize(u16, u16),
  Tick,
}

/// Background reader thread forwarding terminal events plus ticks over a
/// channel. The main loop blocks on `next`, so it sleeps between events and
/// wakes at the tick rate at most.
pub struct EventLoop {
  rx: mpsc::Receiver<Event>,
}

impl EventLoop {
  pub fn new(tick_rate: Duration) -> Self {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || loop {
      if event::poll(tick_rate).unwrap_or(false) {
        match event::read() {
          Ok(CrosstermEvent::Key(key)) => {
            if tx.send(Event::Key(key)).is_err() {
              break;
            }
          }
          Ok(CrosstermEvent::Resize(w, h)) => {
            if tx.send(Event::Resize(w, h)).is_err() {
              break;
            }
          }
          _ => {}
        }
      } else if tx.send(Event::Tick).is_err() {
        break;
      }
    });

    Self { rx }
  }

  pub fn next(&self) -> Result<Event> {
    Ok(self.rx.recv()?)
  }

  /// Bounded wait for the second key of a two-key sequence. Non-key events
  /// inside the window are discarded; `None` once the window elapses. This is
  /// the only suspension point besides the blocking `next`.
  pub fn next_key_within(&self, window: Duration) -> Option<KeyEvent> {
    let deadline = Instant::now() + window;
    loop {
      let remaining = deadline.checked_duration_since(Instant::now())?;
      match self.rx.recv_timeout(remaining) {
        Ok(Event::Key(key)) => return Some(key),
        Ok(_) => continue,
        Err(_) => return None,
      }
    }
  }

  #[cfg(test)]
  fn with_receiver(rx: mpsc::Receiver<Event>) -> Self {
    Self { rx }
  }
}
