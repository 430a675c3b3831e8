//! Visual reordering for hosts without native bidi rendering.
//!
//! A host that stores text in logical order can pass each line through
//! [`reorder_line`] before drawing it, using the controller's current
//! direction as the paragraph base level.

use unicode_bidi::{
  BidiClass,
  BidiInfo,
  Level,
  bidi_class,
};

use crate::Direction;

/// Reorder one line of logical text into display order.
///
/// `base` is the paragraph direction; runs of the opposite direction are
/// resolved with the Unicode Bidirectional Algorithm. Line breaks inside
/// `line` start new paragraphs and are kept.
pub fn reorder_line(line: &str, base: Direction) -> String {
  if line.is_empty() {
    return String::new();
  }
  // Nothing to reorder in an LTR paragraph without strong RTL characters.
  if !base.is_rtl() && !line.chars().any(is_rtl_char) {
    return line.to_string();
  }

  let level = match base {
    Direction::Ltr => Level::ltr(),
    Direction::Rtl => Level::rtl(),
  };
  let info = BidiInfo::new(line, Some(level));
  let mut out = String::with_capacity(line.len());
  for paragraph in &info.paragraphs {
    out.push_str(&info.reorder_line(paragraph, paragraph.range.clone()));
  }
  out
}

/// Direction of the first strong character in `text`.
pub fn detect_direction(text: &str) -> Option<Direction> {
  text.chars().find_map(|c| {
    match bidi_class(c) {
      BidiClass::L => Some(Direction::Ltr),
      BidiClass::R | BidiClass::AL => Some(Direction::Rtl),
      _ => None,
    }
  })
}

fn is_rtl_char(c: char) -> bool {
  matches!(
    bidi_class(c),
    BidiClass::R | BidiClass::AL | BidiClass::RLE | BidiClass::RLO | BidiClass::RLI
  )
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn latin_is_untouched_in_ltr() {
    assert_eq!(
      reorder_line("Hello, World!", Direction::Ltr),
      "Hello, World!"
    );
  }

  #[test]
  fn latin_word_stays_in_order_under_rtl_base() {
    assert_eq!(reorder_line("abc", Direction::Rtl), "abc");
  }

  #[test]
  fn hebrew_run_is_reversed() {
    assert_eq!(reorder_line("אבג", Direction::Ltr), "גבא");
    assert_eq!(reorder_line("אבג", Direction::Rtl), "גבא");
  }

  #[test]
  fn mixed_line_in_ltr_keeps_latin_first() {
    assert_eq!(reorder_line("abc אבג", Direction::Ltr), "abc גבא");
  }

  #[test]
  fn mixed_line_in_rtl_puts_latin_last() {
    assert_eq!(reorder_line("abc אבג", Direction::Rtl), "גבא abc");
  }

  #[test]
  fn empty_line() {
    assert_eq!(reorder_line("", Direction::Rtl), "");
  }

  #[test]
  fn detects_first_strong_character() {
    assert_eq!(detect_direction("Hello سلام"), Some(Direction::Ltr));
    assert_eq!(detect_direction("سلام Hello"), Some(Direction::Rtl));
    assert_eq!(detect_direction("12345 !?"), None);
    assert_eq!(detect_direction("123 שלום"), Some(Direction::Rtl));
  }
}
