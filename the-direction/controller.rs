//! The direction add-on itself.

use crate::{
  DIRECTION_OPTION,
  Direction,
  DirectionError,
  HostTerminal,
  Result,
};

enum Lifecycle<H> {
  Unactivated,
  Activated(H),
  Disposed,
}

/// Switches a host terminal between left-to-right and right-to-left flow.
///
/// The controller is bound to at most one host, between
/// [`activate`](Self::activate) and [`dispose`](Self::dispose). `H` is the
/// handle the embedder hands over: `&mut T` for a borrowed host, or
/// `Weak<RefCell<T>>` for a host shared with the rest of the application.
/// The controller never outlives or tears down the host behind the handle.
///
/// Mutation outside the activated window fails with
/// [`DirectionError::NotActivated`]; [`get_direction`](Self::get_direction)
/// never fails.
pub struct DirectionController<H> {
  direction: Direction,
  option:    &'static str,
  lifecycle: Lifecycle<H>,
}

impl<H: HostTerminal> DirectionController<H> {
  pub fn new() -> Self {
    Self::with_option(DIRECTION_OPTION)
  }

  /// Drive `option` on the host instead of [`DIRECTION_OPTION`].
  pub fn with_option(option: &'static str) -> Self {
    Self {
      direction: Direction::default(),
      option,
      lifecycle: Lifecycle::Unactivated,
    }
  }

  /// Bind to `host`.
  ///
  /// If the host already carries a valid value for the driven option it
  /// becomes the current direction. Nothing is applied to the host and no
  /// repaint is requested.
  pub fn activate(&mut self, host: H) -> Result<()> {
    match self.lifecycle {
      Lifecycle::Unactivated => {},
      Lifecycle::Activated(_) => return Err(DirectionError::AlreadyActivated),
      Lifecycle::Disposed => return Err(DirectionError::Disposed),
    }

    if let Some(direction) = host
      .read_option(self.option)
      .and_then(|value| value.parse().ok())
    {
      self.direction = direction;
    }
    self.lifecycle = Lifecycle::Activated(host);
    Ok(())
  }

  /// Release the host. Safe to call at any point, any number of times.
  pub fn dispose(&mut self) {
    self.lifecycle = Lifecycle::Disposed;
  }

  pub fn get_direction(&self) -> Direction {
    self.direction
  }

  pub fn is_active(&self) -> bool {
    matches!(self.lifecycle, Lifecycle::Activated(_))
  }

  pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
    let Lifecycle::Activated(host) = &mut self.lifecycle else {
      return Err(DirectionError::NotActivated);
    };

    if direction == self.direction {
      return Ok(());
    }

    self.direction = direction;
    host.apply_option(self.option, direction.as_str());
    if !host.repaints_on_apply() {
      host.request_repaint();
    }
    Ok(())
  }

  /// Parse `direction` and set it.
  ///
  /// Invalid input is rejected before anything else is checked, and leaves
  /// the current direction untouched.
  pub fn set_direction_str(&mut self, direction: &str) -> Result<()> {
    let direction = direction.parse()?;
    self.set_direction(direction)
  }

  pub fn toggle(&mut self) -> Result<()> {
    self.set_direction(self.direction.toggled())
  }
}

impl<H: HostTerminal> Default for DirectionController<H> {
  fn default() -> Self {
    Self::new()
  }
}
