//! Rendering - lays the screen out in its current direction and draws it.

use crossterm::style::Color;
use eyre::Result;
use the_direction::{
  Direction,
  bidi::reorder_line,
};
use unicode_width::{
  UnicodeWidthChar,
  UnicodeWidthStr,
};

use crate::{
  app::App,
  screen::{
    Screen,
    Tone,
  },
  terminal::{
    Span,
    Terminal,
  },
};

const LTR_INDICATOR: Color = Color::Rgb {
  r: 0x2d,
  g: 0x7d,
  b: 0x46,
};
const RTL_INDICATOR: Color = Color::Rgb {
  r: 0xc4,
  g: 0x2e,
  b: 0x2e,
};
const HELP: &str = "l/r/t direction  1/2/3 samples  ^L clear  ^R reset  ^F fit  q quit";

/// One line of text placed on the grid, already in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
  pub row:  u16,
  pub col:  u16,
  pub text: String,
  pub tone: Tone,
}

/// Lay out the tail of the scrollback into a `width` x `height` area.
///
/// Lines are reordered for display under the screen's direction. In RTL they
/// are right-aligned and, when too wide, keep their right-most columns.
pub fn layout(screen: &Screen, width: u16, height: u16) -> Vec<RenderLine> {
  let direction = screen.direction();
  let width = width as usize;
  let skip = screen.lines().len().saturating_sub(height as usize);

  screen
    .lines()
    .skip(skip)
    .enumerate()
    .map(|(row, line)| {
      let visual = reorder_line(&line.text, direction);
      let text = match direction {
        Direction::Ltr => take_columns(&visual, width),
        Direction::Rtl => take_last_columns(&visual, width),
      };
      let col = match direction {
        Direction::Ltr => 0,
        Direction::Rtl => width.saturating_sub(text.width()),
      };
      RenderLine {
        row: row as u16,
        col: col as u16,
        text,
        tone: line.tone,
      }
    })
    .collect()
}

fn take_columns(text: &str, width: usize) -> String {
  let mut used = 0;
  text
    .chars()
    .take_while(|c| {
      used += c.width().unwrap_or(0);
      used <= width
    })
    .collect()
}

fn take_last_columns(text: &str, width: usize) -> String {
  let mut used = 0;
  let mut kept: Vec<char> = text
    .chars()
    .rev()
    .take_while(|c| {
      used += c.width().unwrap_or(0);
      used <= width
    })
    .collect();
  kept.reverse();
  kept.into_iter().collect()
}

pub fn tone_color(tone: Tone) -> Option<Color> {
  match tone {
    Tone::Plain => None,
    Tone::Heading => Some(Color::Cyan),
    Tone::Rule | Tone::Notice => Some(Color::Yellow),
    Tone::Success => Some(Color::Green),
    Tone::Error => Some(Color::Red),
  }
}

/// Build every row of the terminal: the screen body, then the status line.
pub fn frame(app: &App, width: u16, height: u16) -> Vec<Vec<Span>> {
  let screen = app.screen();
  let (cols, rows) = screen.size();
  let body_height = height.saturating_sub(1).min(rows);

  let mut frame = vec![Vec::new(); height as usize];
  for line in layout(&screen, width.min(cols), body_height) {
    frame[line.row as usize].push(Span {
      col:  line.col,
      text: line.text,
      fg:   tone_color(line.tone),
      bg:   None,
    });
  }

  let Some(status) = frame.last_mut() else {
    return frame;
  };
  let direction = app.direction();
  let indicator = format!(" {} ", direction.as_str().to_uppercase());
  let background = match direction {
    Direction::Ltr => LTR_INDICATOR,
    Direction::Rtl => RTL_INDICATOR,
  };
  let help = take_columns(HELP, (width as usize).saturating_sub(indicator.len() + 1));
  let help_col = indicator.len() as u16 + 1;
  status.clear();
  status.push(Span {
    col:  0,
    text: indicator,
    fg:   Some(Color::White),
    bg:   Some(background),
  });
  status.push(Span {
    col:  help_col,
    text: help,
    fg:   Some(Color::DarkGrey),
    bg:   None,
  });
  frame
}

/// Render the current demo state to the terminal.
pub fn render(app: &App, terminal: &mut Terminal) -> Result<()> {
  let (width, height) = terminal.size()?;
  terminal.draw_frame((width, height), frame(app, width, height))?;
  terminal.hide_cursor()?;
  terminal.flush()?;
  Ok(())
}

#[cfg(test)]
mod test {
  use the_direction::{
    DIRECTION_OPTION,
    HostTerminal,
  };

  use super::*;

  fn screen_with(lines: &[&str]) -> Screen {
    let mut screen = Screen::new(80, 24, 100);
    for line in lines {
      screen.writeln(line);
    }
    screen
  }

  #[test]
  fn ltr_lines_start_at_column_zero() {
    let screen = screen_with(&["abc", "hello"]);
    let lines = layout(&screen, 10, 5);
    assert_eq!(lines, [
      RenderLine {
        row:  0,
        col:  0,
        text: "abc".into(),
        tone: Tone::Plain,
      },
      RenderLine {
        row:  1,
        col:  0,
        text: "hello".into(),
        tone: Tone::Plain,
      },
    ]);
  }

  #[test]
  fn rtl_lines_are_right_aligned_and_reordered() {
    let mut screen = screen_with(&["abc אבג"]);
    screen.apply_option(DIRECTION_OPTION, "rtl");

    let lines = layout(&screen, 10, 5);
    assert_eq!(lines[0].text, "גבא abc");
    assert_eq!(lines[0].col, 3);
  }

  #[test]
  fn only_the_tail_fits() {
    let screen = screen_with(&["1", "2", "3", "4"]);
    let lines = layout(&screen, 10, 2);
    let texts: Vec<_> = lines.iter().map(|line| line.text.as_str()).collect();
    assert_eq!(texts, ["3", "4"]);
    assert_eq!(lines[0].row, 0);
  }

  #[test]
  fn long_lines_are_clipped_on_the_trailing_side() {
    let mut screen = screen_with(&["abcdefgh"]);
    assert_eq!(layout(&screen, 4, 1)[0].text, "abcd");

    screen.apply_option(DIRECTION_OPTION, "rtl");
    let line = &layout(&screen, 4, 1)[0];
    assert_eq!(line.text, "efgh");
    assert_eq!(line.col, 0);
  }

  #[test]
  fn status_line_shows_direction_indicator() {
    let mut app = App::new(&crate::config::Config::default(), (80, 24)).unwrap();
    let rows = frame(&app, 80, 24);
    assert_eq!(rows.len(), 24);
    assert_eq!(rows[23][0].text, " LTR ");
    assert_eq!(rows[23][0].bg, Some(LTR_INDICATOR));

    app.queue(crate::app::Action::SetDirection(Direction::Rtl));
    app.run_pending();
    let rows = frame(&app, 80, 24);
    assert_eq!(rows[23][0].text, " RTL ");
    assert_eq!(rows[23][0].bg, Some(RTL_INDICATOR));
  }

  #[test]
  fn body_stays_above_the_status_line() {
    let app = App::new(&crate::config::Config::default(), (80, 24)).unwrap();
    let rows = frame(&app, 80, 5);
    assert_eq!(rows.len(), 5);
    assert!(rows[..4].iter().all(|row| row.len() <= 1));
    assert_eq!(rows[4].len(), 2);
  }

  #[test]
  fn wide_characters_count_double() {
    assert_eq!(take_columns("日本語", 4), "日本");
    assert_eq!(take_last_columns("日本語", 5), "本語");
  }
}
