/// First visible row of the scroll window. Centers the cursor when possible,
/// pinning to the list boundaries instead of leaving trailing blank rows.
pub fn window(cursor: usize, visible_count: usize, height: usize) -> usize {
  if height == 0 || visible_count <= height {
    return 0;
  }
  let start = cursor.saturating_sub(height / 2);
  start.min(visible_count - height)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_short_list_never_scrolls() {
    assert_eq!(window(0, 5, 10), 0);
    assert_eq!(window(4, 5, 10), 0);
    assert_eq!(window(4, 10, 10), 0);
  }

  #[test]
  fn test_cursor_centered_in_the_middle() {
    // height 10, cursor 50 of 100: window starts at 45
    assert_eq!(window(50, 100, 10), 45);
    assert_eq!(window(20, 100, 11), 15);
  }

  #[test]
  fn test_pins_to_top() {
    assert_eq!(window(0, 100, 10), 0);
    assert_eq!(window(3, 100, 10), 0);
    assert_eq!(window(5, 100, 10), 0);
    assert_eq!(window(6, 100, 10), 1);
  }

  #[test]
  fn test_pins_to_bottom() {
    assert_eq!(window(99, 100, 10), 90);
    assert_eq!(window(95, 100, 10), 90);
    assert_eq!(window(94, 100, 10), 89);
  }

  #[test]
  fn test_zero_height_stays_at_zero() {
    assert_eq!(window(7, 100, 0), 0);
  }

  #[test]
  fn test_boundedness_property() {
    for count in [1usize, 2, 7, 40, 100] {
      for height in 1..=count {
        for cursor in 0..count {
          let start = window(cursor, count, height);
          assert!(start <= count - height, "start {start} count {count} height {height}");
          assert!(start <= cursor);
          assert!(cursor <= start + height - 1, "cursor {cursor} outside window at {start}");
        }
      }
    }
  }
}
