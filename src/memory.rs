use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::ident::Ident;

/// The type of a single memory cell
pub type Word = i64;

/// An index into memory
pub type Address = u64;

/// Fixed-size word memory plus the table of data labels
#[derive(Debug, Clone)]
pub struct Memory {
  cells: Vec<Word>,
  capacity: u64,
  labels: BTreeMap<Ident, Address>,
}

impl Memory {
  /// Create a zeroed memory of `capacity` words with no labels
  pub fn new(capacity: u64) -> Self {
    let mut memory = Self {
      cells: Vec::new(),
      capacity,
      labels: BTreeMap::new(),
    };
    memory.reset(capacity);
    memory
  }

  /// Zero every cell and forget every label
  pub fn reset(&mut self, capacity: u64) {
    self.capacity = capacity;
    self.cells.clear();
    self.cells.resize(capacity as usize, 0);
    self.labels.clear();
  }

  pub fn capacity(&self) -> u64 {
    self.capacity
  }

  pub fn cells(&self) -> &[Word] {
    &self.cells
  }

  /// The address `id` was first defined at
  pub fn address_of(&self, id: &Ident) -> Result<Address> {
    self
      .labels
      .get(id)
      .copied()
      .ok_or_else(|| Error::UndefinedLabel(id.clone()))
  }

  pub fn is_defined(&self, id: &Ident) -> bool {
    self.labels.contains_key(id)
  }

  /// Labels in identifier order
  pub fn labels(&self) -> impl Iterator<Item = (&Ident, Address)> + '_ {
    self.labels.iter().map(|(id, address)| (id, *address))
  }

  pub fn read(&self, address: Address) -> Result<Word> {
    let index = self.index(address)?;
    Ok(self.cells[index])
  }

  pub fn write(&mut self, address: Address, value: Word) -> Result<()> {
    let index = self.index(address)?;
    self.cells[index] = value;
    Ok(())
  }

  /// Store `value` in the next data slot, binding `id` to it if `id` is new
  ///
  /// The slot is always the current size of the label table. A name that is
  /// already bound keeps its first address, so redefining it writes a slot
  /// the name does not point at, and the table does not grow.
  pub fn define(&mut self, id: &Ident, value: Word) -> Result<Address> {
    let address = self.labels.len() as Address;
    if address >= self.capacity {
      return Err(Error::CapacityExceeded {
        capacity: self.capacity,
      });
    }
    self.write(address, value)?;
    self.labels.entry(id.clone()).or_insert(address);
    Ok(address)
  }

  fn index(&self, address: Address) -> Result<usize> {
    if address >= self.capacity {
      return Err(Error::OutOfRange {
        address,
        capacity: self.capacity,
      });
    }
    Ok(address as usize)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn id(name: &str) -> Ident {
    Ident::new(name).unwrap()
  }

  #[test]
  fn new_is_zeroed() {
    let memory = Memory::new(8);
    assert_eq!(memory.cells(), &[0; 8]);
    assert_eq!(memory.labels().count(), 0);
  }

  #[test]
  fn reset_clears_cells_and_labels() {
    let mut memory = Memory::new(4);
    memory.define(&id("x"), 9).unwrap();
    memory.write(3, -1).unwrap();
    memory.reset(4);
    assert_eq!(memory.cells(), &[0; 4]);
    assert!(!memory.is_defined(&id("x")));
  }

  #[test]
  fn reset_changes_capacity() {
    let mut memory = Memory::new(2);
    memory.reset(5);
    assert_eq!(memory.capacity(), 5);
    assert_eq!(memory.cells().len(), 5);
  }

  #[test]
  fn read_write() {
    let mut memory = Memory::new(4);
    memory.write(2, 42).unwrap();
    assert_eq!(memory.read(2), Ok(42));
    assert_eq!(
      memory.read(4),
      Err(Error::OutOfRange {
        address: 4,
        capacity: 4
      })
    );
    assert_eq!(
      memory.write(u64::MAX, 1),
      Err(Error::OutOfRange {
        address: u64::MAX,
        capacity: 4
      })
    );
  }

  #[test]
  fn undefined_label() {
    let memory = Memory::new(4);
    assert_eq!(
      memory.address_of(&id("nope")),
      Err(Error::UndefinedLabel(id("nope")))
    );
  }

  #[test]
  fn define_allocates_in_order() {
    let mut memory = Memory::new(4);
    assert_eq!(memory.define(&id("x"), 10), Ok(0));
    assert_eq!(memory.define(&id("y"), 20), Ok(1));
    assert_eq!(memory.address_of(&id("x")), Ok(0));
    assert_eq!(memory.address_of(&id("y")), Ok(1));
    assert_eq!(memory.cells(), &[10, 20, 0, 0]);
  }

  // pinned: a redefinition takes a fresh slot but the name stays put
  #[test]
  fn redefinition_keeps_first_address() {
    let mut memory = Memory::new(4);
    assert_eq!(memory.define(&id("x"), 1), Ok(0));
    assert_eq!(memory.define(&id("x"), 2), Ok(1));
    assert_eq!(memory.address_of(&id("x")), Ok(0));
    assert_eq!(memory.cells(), &[1, 2, 0, 0]);
  }

  // pinned: the table did not grow on redefinition, so the next
  // definition lands on the same slot
  #[test]
  fn redefinition_slot_is_reused_by_next_definition() {
    let mut memory = Memory::new(4);
    memory.define(&id("x"), 1).unwrap();
    memory.define(&id("x"), 2).unwrap();
    assert_eq!(memory.define(&id("y"), 3), Ok(1));
    assert_eq!(memory.cells(), &[1, 3, 0, 0]);
    let labels: Vec<_> = memory.labels().map(|(id, a)| (id.as_str(), a)).collect();
    assert_eq!(labels, vec![("x", 0), ("y", 1)]);
  }

  #[test]
  fn define_past_capacity() {
    let mut memory = Memory::new(1);
    memory.define(&id("a"), 0).unwrap();
    assert_eq!(
      memory.define(&id("b"), 0),
      Err(Error::CapacityExceeded { capacity: 1 })
    );
  }

  #[test]
  fn define_with_no_memory() {
    let mut memory = Memory::new(0);
    assert_eq!(
      memory.define(&id("a"), 0),
      Err(Error::CapacityExceeded { capacity: 0 })
    );
  }

  proptest! {
    #[test]
    fn out_of_range_at_or_past_capacity(capacity in 1u64..256, past in 0u64..1024) {
      let mut memory = Memory::new(capacity);
      let address = capacity + past;
      let err = Error::OutOfRange { address, capacity };
      prop_assert_eq!(memory.read(address), Err(err.clone()));
      prop_assert_eq!(memory.write(address, 1), Err(err));
    }

    #[test]
    fn in_range_round_trips(capacity in 1u64..256, value in any::<i64>()) {
      let mut memory = Memory::new(capacity);
      let address = capacity - 1;
      memory.write(address, value).unwrap();
      prop_assert_eq!(memory.read(address), Ok(value));
    }
  }
}
