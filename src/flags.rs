use crate::memory::Word;

/// A single condition bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
  /// Set when the last arithmetic result was exactly zero
  Zero,
  /// Set when the last arithmetic result was negative
  Sign,
}

/// The processor's condition bits
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
  zero: bool,
  sign: bool,
}

impl Flags {
  pub fn zero(&self) -> bool {
    self.zero
  }

  pub fn set_zero(&mut self, value: bool) {
    self.zero = value;
  }

  pub fn sign(&self) -> bool {
    self.sign
  }

  pub fn set_sign(&mut self, value: bool) {
    self.sign = value;
  }

  pub fn get(&self, flag: Flag) -> bool {
    match flag {
      Flag::Zero => self.zero,
      Flag::Sign => self.sign,
    }
  }

  pub fn set(&mut self, flag: Flag, value: bool) {
    match flag {
      Flag::Zero => self.zero = value,
      Flag::Sign => self.sign = value,
    }
  }

  /// Set both bits from an arithmetic result
  pub fn update(&mut self, result: Word) {
    self.zero = result == 0;
    self.sign = result < 0;
  }

  pub fn clear(&mut self) {
    *self = Self::default();
  }
}
