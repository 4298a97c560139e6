use crate::ident::Ident;

/// An error that occurred while building or running a program
///
/// Every variant is fatal to the load that raised it; memory is left however
/// far the program got.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("invalid identifier `{0}`: length must be between 1 and 10")]
  InvalidIdentifier(String),

  #[error("undefined label `{0}`")]
  UndefinedLabel(Ident),

  #[error("address {address} is out of range for memory of {capacity} words")]
  OutOfRange { address: u64, capacity: u64 },

  #[error("no room to define more data, all {capacity} words are taken")]
  CapacityExceeded { capacity: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
