use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionError {
  #[error("invalid direction {0:?}, expected \"ltr\" or \"rtl\"")]
  InvalidDirection(String),
  #[error("direction add-on is not activated")]
  NotActivated,
  #[error("direction add-on is already activated on a host terminal")]
  AlreadyActivated,
  #[error("direction add-on has been disposed")]
  Disposed,
}

pub type Result<T> = std::result::Result<T, DirectionError>;
