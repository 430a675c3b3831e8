//! Host terminal capability set.
//!
//! The add-on only needs to set one rendering option on the host and, at
//! activation time, read it back. Hosts that do not repaint on their own when
//! an option changes can opt into an explicit repaint request.

use std::{
  cell::RefCell,
  rc::Weak,
};

/// Rendering option the controller drives unless told otherwise.
///
/// Values are the lower-case direction names, `"ltr"` and `"rtl"`.
pub const DIRECTION_OPTION: &str = "direction";

pub trait HostTerminal {
  /// Set a rendering option. Must be synchronous.
  fn apply_option(&mut self, name: &str, value: &str);

  /// Current value of a rendering option, if the host exposes it.
  fn read_option(&self, _name: &str) -> Option<String> {
    None
  }

  /// Whether `apply_option` already schedules a repaint.
  fn repaints_on_apply(&self) -> bool {
    true
  }

  fn request_repaint(&mut self) {}
}

impl<T: HostTerminal + ?Sized> HostTerminal for &mut T {
  fn apply_option(&mut self, name: &str, value: &str) {
    (**self).apply_option(name, value);
  }

  fn read_option(&self, name: &str) -> Option<String> {
    (**self).read_option(name)
  }

  fn repaints_on_apply(&self) -> bool {
    (**self).repaints_on_apply()
  }

  fn request_repaint(&mut self) {
    (**self).request_repaint();
  }
}

/// Non-owning handle to a shared host.
///
/// Once the host has been dropped every call is a no-op.
impl<T: HostTerminal + ?Sized> HostTerminal for Weak<RefCell<T>> {
  fn apply_option(&mut self, name: &str, value: &str) {
    if let Some(host) = self.upgrade() {
      host.borrow_mut().apply_option(name, value);
    }
  }

  fn read_option(&self, name: &str) -> Option<String> {
    self.upgrade()?.borrow().read_option(name)
  }

  fn repaints_on_apply(&self) -> bool {
    self
      .upgrade()
      .is_none_or(|host| host.borrow().repaints_on_apply())
  }

  fn request_repaint(&mut self) {
    if let Some(host) = self.upgrade() {
      host.borrow_mut().request_repaint();
    }
  }
}
