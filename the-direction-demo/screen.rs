//! In-memory host terminal the demo loads the add-on into.

use std::collections::{
  HashMap,
  VecDeque,
};

use the_direction::{
  DIRECTION_OPTION,
  Direction,
  HostTerminal,
};

/// How a line is colored when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
  Plain,
  Heading,
  Rule,
  Notice,
  Success,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
  pub text: String,
  pub tone: Tone,
}

/// A scrollback of styled lines plus the rendering options set on it.
#[derive(Debug)]
pub struct Screen {
  lines:         VecDeque<Line>,
  scrollback:    usize,
  cols:          u16,
  rows:          u16,
  options:       HashMap<String, String>,
  needs_repaint: bool,
}

impl Screen {
  pub fn new(cols: u16, rows: u16, scrollback: usize) -> Self {
    Self {
      lines: VecDeque::new(),
      scrollback: scrollback.max(1),
      cols,
      rows,
      options: HashMap::new(),
      needs_repaint: true,
    }
  }

  pub fn writeln(&mut self, text: &str) {
    self.write_tone(text, Tone::Plain);
  }

  /// Append `text`, one line per `\n`-separated segment.
  pub fn write_tone(&mut self, text: &str, tone: Tone) {
    for segment in text.split('\n') {
      if self.lines.len() == self.scrollback {
        self.lines.pop_front();
      }
      self.lines.push_back(Line {
        text: segment.to_string(),
        tone,
      });
    }
    self.needs_repaint = true;
  }

  pub fn clear(&mut self) {
    self.lines.clear();
    self.needs_repaint = true;
  }

  /// Clear the scrollback and drop every rendering option.
  pub fn reset(&mut self) {
    self.clear();
    self.options.clear();
  }

  /// Resize the grid. Returns whether the size changed.
  pub fn fit(&mut self, cols: u16, rows: u16) -> bool {
    if (cols, rows) == (self.cols, self.rows) {
      return false;
    }
    self.cols = cols;
    self.rows = rows;
    self.needs_repaint = true;
    true
  }

  pub fn size(&self) -> (u16, u16) {
    (self.cols, self.rows)
  }

  pub fn lines(&self) -> impl DoubleEndedIterator<Item = &Line> + ExactSizeIterator {
    self.lines.iter()
  }

  /// Set a rendering option without going through the add-on, the way an
  /// embedder configures the widget before loading add-ons.
  pub fn set_option(&mut self, name: &str, value: &str) {
    self.options.insert(name.to_string(), value.to_string());
  }

  /// Direction the screen currently renders in.
  pub fn direction(&self) -> Direction {
    self
      .options
      .get(DIRECTION_OPTION)
      .and_then(|value| value.parse().ok())
      .unwrap_or_default()
  }

  pub fn take_repaint(&mut self) -> bool {
    std::mem::take(&mut self.needs_repaint)
  }
}

impl HostTerminal for Screen {
  fn apply_option(&mut self, name: &str, value: &str) {
    log::debug!("screen option {name} = {value}");
    self.set_option(name, value);
    self.needs_repaint = true;
  }

  fn read_option(&self, name: &str) -> Option<String> {
    self.options.get(name).cloned()
  }
}
