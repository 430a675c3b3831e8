use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};

use crate::DirectionError;

/// Flow order in which a terminal lays out text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
  /// Left to right.
  #[default]
  Ltr,
  /// Right to left.
  Rtl,
}

impl Direction {
  pub const ALL: [Direction; 2] = [Direction::Ltr, Direction::Rtl];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Ltr => "ltr",
      Self::Rtl => "rtl",
    }
  }

  pub const fn toggled(self) -> Self {
    match self {
      Self::Ltr => Self::Rtl,
      Self::Rtl => Self::Ltr,
    }
  }

  pub const fn is_rtl(self) -> bool {
    matches!(self, Self::Rtl)
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Direction {
  type Err = DirectionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("ltr") {
      Ok(Self::Ltr)
    } else if trimmed.eq_ignore_ascii_case("rtl") {
      Ok(Self::Rtl)
    } else {
      Err(DirectionError::InvalidDirection(s.to_string()))
    }
  }
}

impl TryFrom<String> for Direction {
  type Error = DirectionError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn parse_accepts_both_directions_in_any_case() {
    assert_eq!("ltr".parse(), Ok(Direction::Ltr));
    assert_eq!("rtl".parse(), Ok(Direction::Rtl));
    assert_eq!("RTL".parse(), Ok(Direction::Rtl));
    assert_eq!(" Ltr\n".parse(), Ok(Direction::Ltr));
  }

  #[test]
  fn parse_rejects_anything_else() {
    for input in ["ttb", "", "left", "rtl!", "l tr"] {
      assert_eq!(
        input.parse::<Direction>(),
        Err(DirectionError::InvalidDirection(input.to_string())),
        "{input:?} should not parse"
      );
    }
  }

  #[test]
  fn display_matches_option_value() {
    assert_eq!(Direction::Ltr.to_string(), "ltr");
    assert_eq!(Direction::Rtl.to_string(), "rtl");
  }

  #[test]
  fn toggled_flips() {
    assert_eq!(Direction::Ltr.toggled(), Direction::Rtl);
    assert_eq!(Direction::Rtl.toggled(), Direction::Ltr);
    assert_eq!(Direction::default(), Direction::Ltr);
  }

  #[test]
  fn serde_uses_lowercase_names() {
    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Settings {
      direction: Direction,
    }

    let parsed: Settings = toml::from_str("direction = \"RTL\"").unwrap();
    assert_eq!(parsed.direction, Direction::Rtl);

    let written = toml::to_string(&Settings {
      direction: Direction::Rtl,
    })
    .unwrap();
    assert_eq!(written.trim(), "direction = \"rtl\"");

    let err = toml::from_str::<Settings>("direction = \"ttb\"").unwrap_err();
    assert!(err.to_string().contains("invalid direction"), "{err}");
  }
}
