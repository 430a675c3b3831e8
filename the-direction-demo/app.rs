//! Demo state: the host screen, the add-on loaded into it, and the actions
//! the keys trigger.

use std::{
  cell::{
    Ref,
    RefCell,
  },
  collections::VecDeque,
  rc::{
    Rc,
    Weak,
  },
};

use eyre::{
  Result,
  WrapErr,
};
use the_direction::{
  DIRECTION_OPTION,
  Direction,
  DirectionController,
};

use crate::{
  config::Config,
  samples::{
    SampleSet,
    Samples,
    flow_description,
    write_welcome,
  },
  screen::{
    Screen,
    Tone,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  SetDirection(Direction),
  Toggle,
  WriteSamples(SampleSet),
  Clear,
  Reset,
  Fit,
  Quit,
}

pub struct App {
  screen:          Rc<RefCell<Screen>>,
  addon:           DirectionController<Weak<RefCell<Screen>>>,
  samples:         Samples,
  /// Size of the area the screen is drawn into.
  viewport:        (u16, u16),
  pending:         VecDeque<Action>,
  pub should_quit: bool,
}

impl App {
  pub fn new(config: &Config, viewport: (u16, u16)) -> Result<Self> {
    let (cols, rows) = viewport;
    let mut screen = Screen::new(cols, rows, config.scrollback);
    if let Some(direction) = config.direction {
      screen.set_option(DIRECTION_OPTION, direction.as_str());
    }
    let screen = Rc::new(RefCell::new(screen));

    let mut addon = DirectionController::new();
    addon
      .activate(Rc::downgrade(&screen))
      .wrap_err("failed to load the direction add-on")?;
    log::info!("direction add-on loaded, starting in {}", addon.get_direction());

    write_welcome(&mut screen.borrow_mut(), addon.get_direction());

    Ok(Self {
      screen,
      addon,
      samples: Samples::from_config(&config.samples),
      viewport,
      pending: VecDeque::new(),
      should_quit: false,
    })
  }

  pub fn screen(&self) -> Ref<'_, Screen> {
    self.screen.borrow()
  }

  /// Direction the screen is drawn in.
  ///
  /// Once the add-on is gone it no longer tracks the screen, so the screen's
  /// own option is used instead.
  pub fn direction(&self) -> Direction {
    if self.addon.is_active() {
      self.addon.get_direction()
    } else {
      self.screen.borrow().direction()
    }
  }

  pub fn queue(&mut self, action: Action) {
    self.pending.push_back(action);
  }

  /// Run every queued action, including those queued while running.
  pub fn run_pending(&mut self) {
    while let Some(action) = self.pending.pop_front() {
      self.handle(action);
    }
  }

  /// The window was resized; the screen follows it.
  pub fn resize(&mut self, cols: u16, rows: u16) {
    self.set_viewport((cols, rows));
    self.queue(Action::Fit);
  }

  /// Record the current size of the drawing area without refitting.
  pub fn set_viewport(&mut self, viewport: (u16, u16)) {
    self.viewport = viewport;
  }

  pub fn take_repaint(&mut self) -> bool {
    self.screen.borrow_mut().take_repaint()
  }

  pub fn dispose(&mut self) {
    self.addon.dispose();
  }

  fn handle(&mut self, action: Action) {
    log::debug!("action {action:?}");
    match action {
      Action::SetDirection(direction) => self.set_direction(direction),
      Action::Toggle => {
        let direction = self.addon.get_direction().toggled();
        self.set_direction(direction);
      },
      Action::WriteSamples(set) => self.samples.write(&mut self.screen.borrow_mut(), set),
      Action::Clear => {
        let mut screen = self.screen.borrow_mut();
        screen.clear();
        screen.write_tone("Terminal cleared", Tone::Notice);
        screen.writeln("");
      },
      Action::Reset => self.reset(),
      Action::Fit => {
        let (cols, rows) = self.viewport;
        if self.screen.borrow_mut().fit(cols, rows) {
          log::info!("screen fitted to {cols}x{rows}");
        }
      },
      Action::Quit => self.should_quit = true,
    }
  }

  fn set_direction(&mut self, direction: Direction) {
    let before = self.addon.get_direction();
    if let Err(err) = self.addon.set_direction(direction) {
      self.report_error(&err);
      return;
    }
    self.report_switch(before);
  }

  fn report_switch(&mut self, before: Direction) {
    let now = self.addon.get_direction();
    let name = now.as_str().to_uppercase();
    let mut screen = self.screen.borrow_mut();
    if now == before {
      screen.write_tone(&format!("Already in {name} mode"), Tone::Notice);
      return;
    }
    log::info!("switched direction {before} -> {now}");
    screen.write_tone(&format!("✓ Switched to {name} mode"), Tone::Success);
    screen.write_tone(
      &format!("Text will now flow from {}", flow_description(now)),
      Tone::Notice,
    );
    screen.writeln("");
  }

  fn reset(&mut self) {
    self.screen.borrow_mut().reset();
    if let Err(err) = self.addon.set_direction(Direction::Ltr) {
      self.report_error(&err);
    }
    let direction = self.direction();
    {
      let mut screen = self.screen.borrow_mut();
      screen.write_tone("Terminal reset to initial state", Tone::Notice);
      screen.writeln("");
      write_welcome(&mut screen, direction);
    }
    self.queue(Action::Fit);
  }

  fn report_error(&mut self, err: &dyn std::error::Error) {
    log::warn!("direction add-on: {err}");
    self
      .screen
      .borrow_mut()
      .write_tone(&format!("✗ {err}"), Tone::Error);
  }
}

impl Drop for App {
  fn drop(&mut self) {
    self.addon.dispose();
  }
}
