//! Terminal abstraction over the crossterm backend.

use std::io::{
  self,
  Stdout,
  Write,
};

use crossterm::{
  cursor::{
    Hide,
    MoveTo,
    Show,
  },
  execute,
  queue,
  style::{
    Color,
    Print,
    ResetColor,
    SetBackgroundColor,
    SetForegroundColor,
  },
  terminal::{
    self as term,
    Clear,
    ClearType,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    disable_raw_mode,
    enable_raw_mode,
  },
};
use eyre::Result;

/// A run of text drawn at `col` with one set of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
  pub col:  u16,
  pub text: String,
  pub fg:   Option<Color>,
  pub bg:   Option<Color>,
}

/// Rows drawn by the previous frame, so unchanged rows are not redrawn.
#[derive(Debug, Default)]
pub struct FrameCache {
  size: (u16, u16),
  rows: Vec<Vec<Span>>,
}

impl FrameCache {
  /// Start a frame of `size`. Returns whether the whole screen must be
  /// cleared, which is the case for the first frame and after a resize.
  pub fn begin(&mut self, size: (u16, u16)) -> bool {
    if size == self.size && !self.rows.is_empty() {
      return false;
    }
    self.size = size;
    self.rows = vec![Vec::new(); size.1 as usize];
    true
  }

  /// Record `spans` for `row`. Returns whether the row differs from the
  /// previous frame.
  pub fn update(&mut self, row: usize, spans: &[Span]) -> bool {
    let Some(cached) = self.rows.get_mut(row) else {
      return false;
    };
    if cached.as_slice() == spans {
      return false;
    }
    *cached = spans.to_vec();
    true
  }
}

pub struct Terminal {
  out:   Stdout,
  cache: FrameCache,
}

impl Terminal {
  pub fn new() -> Result<Self> {
    Ok(Self {
      out:   io::stdout(),
      cache: FrameCache::default(),
    })
  }

  pub fn enter_raw_mode(&mut self) -> Result<()> {
    enable_raw_mode()?;
    execute!(self.out, EnterAlternateScreen, Hide)?;
    Ok(())
  }

  pub fn leave_raw_mode(&mut self) -> Result<()> {
    execute!(self.out, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
  }

  /// Size as (columns, rows).
  pub fn size(&self) -> Result<(u16, u16)> {
    Ok(term::size()?)
  }

  /// Draw a full frame of `size`, one entry per row, redrawing only the
  /// rows that changed since the last frame.
  pub fn draw_frame(&mut self, size: (u16, u16), rows: Vec<Vec<Span>>) -> Result<()> {
    if self.cache.begin(size) {
      queue!(self.out, Clear(ClearType::All))?;
    }
    for (row, spans) in rows.iter().enumerate() {
      if !self.cache.update(row, spans) {
        continue;
      }
      queue!(self.out, MoveTo(0, row as u16), Clear(ClearType::CurrentLine))?;
      for span in spans {
        self.draw_str(row as u16, span.col, &span.text, span.fg, span.bg)?;
      }
    }
    Ok(())
  }

  fn draw_str(
    &mut self,
    row: u16,
    col: u16,
    text: &str,
    fg: Option<Color>,
    bg: Option<Color>,
  ) -> Result<()> {
    queue!(self.out, MoveTo(col, row))?;
    if let Some(fg) = fg {
      queue!(self.out, SetForegroundColor(fg))?;
    }
    if let Some(bg) = bg {
      queue!(self.out, SetBackgroundColor(bg))?;
    }
    queue!(self.out, Print(text), ResetColor)?;
    Ok(())
  }

  pub fn hide_cursor(&mut self) -> Result<()> {
    queue!(self.out, Hide)?;
    Ok(())
  }

  pub fn flush(&mut self) -> Result<()> {
    self.out.flush()?;
    Ok(())
  }
}
