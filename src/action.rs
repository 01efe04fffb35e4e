/// Commands emitted by the key interpreter and applied by `App::update`.
/// Movement counts are carried in the variant; the cursor target for
/// toggle/collapse/expand is resolved against the visible list by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Quit,
  MoveUp(usize),
  MoveDown(usize),
  /// Absolute jump to a 0-based visible index, clamped by the app.
  JumpTo(usize),
  JumpTop,
  JumpBottom,
  ToggleSelect,
  Collapse,
  Expand,
  Resize(u16, u16),
  Tick,
}
