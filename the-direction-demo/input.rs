//! Input handling - maps key events to demo actions.

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};
use the_direction::Direction;

use crate::{
  app::Action,
  samples::SampleSet,
};

pub fn action_for_key(event: KeyEvent) -> Option<Action> {
  if event.kind == KeyEventKind::Release {
    return None;
  }

  if event.modifiers.contains(KeyModifiers::CONTROL) {
    return match event.code {
      KeyCode::Char('l') => Some(Action::Clear),
      KeyCode::Char('r') => Some(Action::Reset),
      KeyCode::Char('f') => Some(Action::Fit),
      KeyCode::Char('c') => Some(Action::Quit),
      _ => None,
    };
  }

  match event.code {
    KeyCode::Char('l') => Some(Action::SetDirection(Direction::Ltr)),
    KeyCode::Char('r') => Some(Action::SetDirection(Direction::Rtl)),
    KeyCode::Char('t') => Some(Action::Toggle),
    KeyCode::Char('1') => Some(Action::WriteSamples(SampleSet::Ltr)),
    KeyCode::Char('2') => Some(Action::WriteSamples(SampleSet::Rtl)),
    KeyCode::Char('3') => Some(Action::WriteSamples(SampleSet::Mixed)),
    KeyCode::Char('c') => Some(Action::Clear),
    KeyCode::Char('f') => Some(Action::Fit),
    KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
    _ => None,
  }
}
