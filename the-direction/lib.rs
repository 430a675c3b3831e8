//! Text-direction add-on for terminal widgets.
//!
//! A [`DirectionController`] is loaded into a host terminal the way any other
//! add-on is: the host hands itself over in [`DirectionController::activate`]
//! and takes it back in [`DirectionController::dispose`]. In between, the
//! controller switches the host between left-to-right and right-to-left text
//! flow by driving a single rendering option.
//!
//! The host is anything implementing [`HostTerminal`]. Hosts without native
//! bidi rendering can run their lines through [`bidi::reorder_line`].
//!
//! ```
//! use the_direction::{
//!   Direction,
//!   DirectionController,
//!   HostTerminal,
//! };
//!
//! #[derive(Default)]
//! struct Widget {
//!   direction: String,
//! }
//!
//! impl HostTerminal for Widget {
//!   fn apply_option(&mut self, _name: &str, value: &str) {
//!     self.direction = value.to_string();
//!   }
//! }
//!
//! let mut widget = Widget::default();
//! let mut addon = DirectionController::new();
//! addon.activate(&mut widget).unwrap();
//! addon.set_direction(Direction::Rtl).unwrap();
//! assert_eq!(addon.get_direction(), Direction::Rtl);
//! addon.dispose();
//! assert_eq!(widget.direction, "rtl");
//! ```

pub mod bidi;
mod controller;
mod direction;
mod error;
mod host;

#[cfg(test)]
mod test_utils;

pub use controller::DirectionController;
pub use direction::Direction;
pub use error::{
  DirectionError,
  Result,
};
pub use host::{
  DIRECTION_OPTION,
  HostTerminal,
};
