use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;

/// Outcome of feeding one key event to the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
  /// A complete command.
  Action(Action),
  /// A bare `g` was seen; the caller should wait briefly for the second key
  /// of the sequence and hand it (or the timeout) to `finish_sequence`.
  Pending,
  /// Consumed without emitting anything (digits accumulate here too).
  Ignored,
}

/// Vi-style key interpreter: a numeric count buffer plus the awaiting flag
/// for the two-key `gg` sequence. No other memory between events.
#[derive(Debug, Default)]
pub struct KeyInterpreter {
  buffer: String,
  pending: bool,
}

impl KeyInterpreter {
  pub fn new() -> Self {
    Self::default()
  }

  /// The accumulated count digits, for status-bar display.
  pub fn pending_count(&self) -> &str {
    &self.buffer
  }

  pub fn interpret(&mut self, key: KeyEvent) -> KeyResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      self.buffer.clear();
      return KeyResult::Action(Action::Quit);
    }

    match key.code {
      KeyCode::Char(c) if c.is_ascii_digit() && !self.pending => {
        self.buffer.push(c);
        KeyResult::Ignored
      }
      KeyCode::Char('j') | KeyCode::Down => {
        KeyResult::Action(Action::MoveDown(self.take_count().unwrap_or(1)))
      }
      KeyCode::Char('k') | KeyCode::Up => {
        KeyResult::Action(Action::MoveUp(self.take_count().unwrap_or(1)))
      }
      KeyCode::Char('G') => match self.take_count() {
        Some(n) => KeyResult::Action(Action::JumpTo(n.saturating_sub(1))),
        None => KeyResult::Action(Action::JumpBottom),
      },
      KeyCode::Char('g') => match self.take_count() {
        // A count before `g` is an absolute line jump, not a sequence start
        Some(n) => KeyResult::Action(Action::JumpTo(n.saturating_sub(1))),
        None => {
          self.pending = true;
          KeyResult::Pending
        }
      },
      KeyCode::Char('>') => KeyResult::Action(Action::Collapse),
      KeyCode::Char('<') => KeyResult::Action(Action::Expand),
      KeyCode::Char('q') => KeyResult::Action(Action::Quit),
      KeyCode::Enter => KeyResult::Action(Action::ToggleSelect),
      // Unrecognized keys are ignored without clearing the count buffer
      _ => KeyResult::Ignored,
    }
  }

  /// Resolves a pending `gg`: a second `g` jumps to the top, a digit seeds a
  /// fresh count so a fast `g`-then-digit is not lost, anything else or a
  /// timeout consumes the pending key with no effect.
  pub fn finish_sequence(&mut self, second: Option<KeyEvent>) -> Option<Action> {
    if !self.pending {
      return None;
    }
    self.pending = false;
    match second.map(|k| k.code) {
      Some(KeyCode::Char('g')) => Some(Action::JumpTop),
      Some(KeyCode::Char(c)) if c.is_ascii_digit() => {
        self.buffer.push(c);
        None
      }
      _ => None,
    }
  }

  fn take_count(&mut self) -> Option<usize> {
    if self.buffer.is_empty() {
      return None;
    }
    // Absurd counts saturate; downstream clamping handles the rest
    let n = self.buffer.parse::<usize>().unwrap_or(usize::MAX);
    self.buffer.clear();
    Some(n)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crossterm::event::{KeyEventKind, KeyEventState};

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
      code,
      modifiers: KeyModifiers::NONE,
      kind: KeyEventKind::Press,
      state: KeyEventState::NONE,
    }
  }

  fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
  }

  #[test]
  fn test_plain_movement() {
    let mut keys = KeyInterpreter::new();
    assert_eq!(keys.interpret(ch('j')), KeyResult::Action(Action::MoveDown(1)));
    assert_eq!(keys.interpret(ch('k')), KeyResult::Action(Action::MoveUp(1)));
    assert_eq!(keys.interpret(key(KeyCode::Down)), KeyResult::Action(Action::MoveDown(1)));
    assert_eq!(keys.interpret(key(KeyCode::Up)), KeyResult::Action(Action::MoveUp(1)));
  }

  #[test]
  fn test_count_applies_to_movement() {
    let mut keys = KeyInterpreter::new();
    assert_eq!(keys.interpret(ch('3')), KeyResult::Ignored);
    assert_eq!(keys.interpret(ch('j')), KeyResult::Action(Action::MoveDown(3)));
    // buffer consumed: next move is a single step
    assert_eq!(keys.interpret(ch('j')), KeyResult::Action(Action::MoveDown(1)));
  }

  #[test]
  fn test_multi_digit_count() {
    let mut keys = KeyInterpreter::new();
    keys.interpret(ch('1'));
    keys.interpret(ch('2'));
    assert_eq!(keys.interpret(ch('k')), KeyResult::Action(Action::MoveUp(12)));
  }

  #[test]
  fn test_count_g_is_absolute_jump() {
    // "1", "2", "g" jumps to 0-based index 11
    let mut keys = KeyInterpreter::new();
    keys.interpret(ch('1'));
    keys.interpret(ch('2'));
    assert_eq!(keys.interpret(ch('g')), KeyResult::Action(Action::JumpTo(11)));
  }

  #[test]
  fn test_count_uppercase_g_is_absolute_jump() {
    let mut keys = KeyInterpreter::new();
    keys.interpret(ch('5'));
    assert_eq!(keys.interpret(ch('G')), KeyResult::Action(Action::JumpTo(4)));
  }

  #[test]
  fn test_bare_uppercase_g_is_jump_bottom() {
    let mut keys = KeyInterpreter::new();
    assert_eq!(keys.interpret(ch('G')), KeyResult::Action(Action::JumpBottom));
  }

  #[test]
  fn test_gg_sequence_jumps_top() {
    let mut keys = KeyInterpreter::new();
    assert_eq!(keys.interpret(ch('g')), KeyResult::Pending);
    assert_eq!(keys.finish_sequence(Some(ch('g'))), Some(Action::JumpTop));
  }

  #[test]
  fn test_pending_g_timeout_has_no_effect() {
    let mut keys = KeyInterpreter::new();
    assert_eq!(keys.interpret(ch('g')), KeyResult::Pending);
    assert_eq!(keys.finish_sequence(None), None);
    // interpreter is fully reset afterwards
    assert_eq!(keys.interpret(ch('j')), KeyResult::Action(Action::MoveDown(1)));
  }

  #[test]
  fn test_fast_g_then_digit_seeds_buffer() {
    let mut keys = KeyInterpreter::new();
    assert_eq!(keys.interpret(ch('g')), KeyResult::Pending);
    assert_eq!(keys.finish_sequence(Some(ch('4'))), None);
    assert_eq!(keys.interpret(ch('j')), KeyResult::Action(Action::MoveDown(4)));
  }

  #[test]
  fn test_pending_g_other_key_consumed() {
    let mut keys = KeyInterpreter::new();
    keys.interpret(ch('g'));
    assert_eq!(keys.finish_sequence(Some(ch('x'))), None);
    assert_eq!(keys.pending_count(), "");
  }

  #[test]
  fn test_finish_sequence_without_pending_is_noop() {
    let mut keys = KeyInterpreter::new();
    assert_eq!(keys.finish_sequence(Some(ch('g'))), None);
  }

  #[test]
  fn test_zero_count_jump_clamps_to_top() {
    let mut keys = KeyInterpreter::new();
    keys.interpret(ch('0'));
    assert_eq!(keys.interpret(ch('g')), KeyResult::Action(Action::JumpTo(0)));
  }

  #[test]
  fn test_overflowing_count_saturates() {
    let mut keys = KeyInterpreter::new();
    for _ in 0..30 {
      keys.interpret(ch('9'));
    }
    assert_eq!(keys.interpret(ch('j')), KeyResult::Action(Action::MoveDown(usize::MAX)));
  }

  #[test]
  fn test_noise_keys_preserve_count_buffer() {
    let mut keys = KeyInterpreter::new();
    keys.interpret(ch('2'));
    assert_eq!(keys.interpret(ch('x')), KeyResult::Ignored);
    assert_eq!(keys.interpret(key(KeyCode::Esc)), KeyResult::Ignored);
    keys.interpret(ch('5'));
    assert_eq!(keys.interpret(ch('j')), KeyResult::Action(Action::MoveDown(25)));
  }

  #[test]
  fn test_toggle_collapse_expand_quit() {
    let mut keys = KeyInterpreter::new();
    assert_eq!(keys.interpret(key(KeyCode::Enter)), KeyResult::Action(Action::ToggleSelect));
    assert_eq!(keys.interpret(ch('>')), KeyResult::Action(Action::Collapse));
    assert_eq!(keys.interpret(ch('<')), KeyResult::Action(Action::Expand));
    assert_eq!(keys.interpret(ch('q')), KeyResult::Action(Action::Quit));
  }

  #[test]
  fn test_ctrl_c_quits_and_clears_buffer() {
    let mut keys = KeyInterpreter::new();
    keys.interpret(ch('7'));
    let ctrl_c = KeyEvent {
      code: KeyCode::Char('c'),
      modifiers: KeyModifiers::CONTROL,
      kind: KeyEventKind::Press,
      state: KeyEventState::NONE,
    };
    assert_eq!(keys.interpret(ctrl_c), KeyResult::Action(Action::Quit));
    assert_eq!(keys.pending_count(), "");
  }
}
