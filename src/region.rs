use std::rc::Rc;

use crate::instruction::Instruction;

/// A region of instructions
pub trait Region {
  fn instructions(&self) -> &[Rc<Instruction>];
}

/// A `Program` is an ordered list of instructions our machine may load
///
/// Instructions are held through shared handles, so the same instruction can
/// appear in more than one program without being copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
  instructions: Vec<Rc<Instruction>>,
}

impl Program {
  pub fn new(instructions: Vec<Rc<Instruction>>) -> Self {
    Self { instructions }
  }

  pub fn len(&self) -> usize {
    self.instructions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.instructions.is_empty()
  }

  /// A deep copy that shares no instruction with `self`
  pub fn duplicate(&self) -> Self {
    self
      .instructions
      .iter()
      .map(|instr| instr.duplicate())
      .collect()
  }
}

impl From<Vec<Instruction>> for Program {
  fn from(instructions: Vec<Instruction>) -> Self {
    instructions.into_iter().collect()
  }
}

impl FromIterator<Instruction> for Program {
  fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
    Self::new(iter.into_iter().map(Rc::new).collect())
  }
}

impl FromIterator<Rc<Instruction>> for Program {
  fn from_iter<I: IntoIterator<Item = Rc<Instruction>>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl Region for Program {
  fn instructions(&self) -> &[Rc<Instruction>] {
    &self.instructions
  }
}
