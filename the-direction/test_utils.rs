//! Test utilities for exercising the add-on without a real terminal.

use std::collections::HashMap;

use crate::HostTerminal;

/// A host that records every call made against it.
#[derive(Debug, Default)]
pub struct RecordingHost {
  options:          HashMap<String, String>,
  applied:          Vec<(String, String)>,
  repaint_requests: usize,
  manual_repaint:   bool,
}

impl RecordingHost {
  /// Host that already has `name` set to `value` before activation.
  pub fn with_option(name: &str, value: &str) -> Self {
    let mut host = Self::default();
    host.options.insert(name.to_string(), value.to_string());
    host
  }

  /// Host that needs an explicit repaint request after an option change.
  pub fn manual_repaint() -> Self {
    Self {
      manual_repaint: true,
      ..Self::default()
    }
  }

  pub fn applied(&self) -> &[(String, String)] {
    &self.applied
  }

  pub fn repaint_requests(&self) -> usize {
    self.repaint_requests
  }

  pub fn option(&self, name: &str) -> Option<&str> {
    self.options.get(name).map(String::as_str)
  }
}

impl HostTerminal for RecordingHost {
  fn apply_option(&mut self, name: &str, value: &str) {
    self.options.insert(name.to_string(), value.to_string());
    self.applied.push((name.to_string(), value.to_string()));
  }

  fn read_option(&self, name: &str) -> Option<String> {
    self.options.get(name).cloned()
  }

  fn repaints_on_apply(&self) -> bool {
    !self.manual_repaint
  }

  fn request_repaint(&mut self) {
    self.repaint_requests += 1;
  }
}
