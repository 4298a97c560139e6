use std::rc::Rc;

use crate::error::Result;
use crate::ident::Ident;
use crate::memory::{Address, Memory, Word};

/// Anything that evaluates to a word
///
/// Evaluation only reads memory and returns its result, so the same subtree
/// can sit in several places of a program at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
  /// A constant.
  ///
  /// | Assembly | Evaluates to |
  /// |----------|--------------|
  /// | `num n`  | `n`          |
  Literal(Word),

  /// The address a data label was bound to. Does not touch the cell itself.
  ///
  /// | Assembly  | Evaluates to  |
  /// |-----------|---------------|
  /// | `lea id`  | `labels[id]`  |
  AddressOf(Ident),

  /// The contents of a memory cell.
  ///
  /// | Assembly  | Evaluates to |
  /// |-----------|--------------|
  /// | `mem v`   | `m[v]`       |
  Deref(Location),
}

impl Value {
  pub fn evaluate(&self, memory: &Memory) -> Result<Word> {
    match self {
      Value::Literal(n) => Ok(*n),
      Value::AddressOf(id) => Ok(memory.address_of(id)? as Word),
      Value::Deref(location) => Ok(location.load(memory)?.value),
    }
  }

  /// A deep copy that shares no nodes with `self`
  pub fn duplicate(&self) -> Self {
    match self {
      Value::Literal(n) => Value::Literal(*n),
      Value::AddressOf(id) => Value::AddressOf(id.clone()),
      Value::Deref(location) => Value::Deref(location.duplicate()),
    }
  }

  pub fn as_location(&self) -> Option<&Location> {
    match self {
      Value::Deref(location) => Some(location),
      _ => None,
    }
  }
}

impl From<Word> for Value {
  fn from(n: Word) -> Self {
    Value::Literal(n)
  }
}

impl From<Location> for Value {
  fn from(location: Location) -> Self {
    Value::Deref(location)
  }
}

impl From<Ident> for Value {
  fn from(id: Ident) -> Self {
    Value::AddressOf(id)
  }
}

/// A value that also names a memory cell, `m[inner]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
  inner: Rc<Value>,
}

/// A location after evaluation: where it points and what was there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loaded {
  pub address: Address,
  pub value: Word,
}

impl Location {
  pub fn new(inner: impl Into<Rc<Value>>) -> Self {
    Self {
      inner: inner.into(),
    }
  }

  pub fn inner(&self) -> &Rc<Value> {
    &self.inner
  }

  /// Evaluate the address and read the cell behind it
  pub fn load(&self, memory: &Memory) -> Result<Loaded> {
    // negative addresses wrap to huge ones and fail the bounds check
    let address = self.inner.evaluate(memory)? as Address;
    let value = memory.read(address)?;
    Ok(Loaded { address, value })
  }

  pub fn resolved_address(&self, memory: &Memory) -> Result<Address> {
    Ok(self.load(memory)?.address)
  }

  pub fn evaluate(&self, memory: &Memory) -> Result<Word> {
    Ok(self.load(memory)?.value)
  }

  pub fn duplicate(&self) -> Self {
    Self::new(self.inner.duplicate())
  }
}
