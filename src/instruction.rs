use crate::flags::Flag;
use crate::ident::Ident;
use crate::memory::Word;
use crate::value::{Location, Value};

/// A single executable step of a program
///
/// `m[l]` is the cell named by a location `l`, `z` and `s` are the zero and
/// sign flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
  /// Copies a value into memory. The destination is evaluated before the
  /// source.
  ///
  /// | Operation | Semantics/RTL | Assembly        |
  /// |-----------|---------------|-----------------|
  /// | Move      | `m[dst] ← src`| `mov dst, src`  |
  /// | One       | `m[dst] ← 1`  | `one dst`       |
  Move { dst: Location, src: Value },

  /// Declares a labelled word. Runs in the first pass, before everything
  /// else, wherever it appears in the program.
  ///
  /// | Operation | Semantics/RTL                        | Assembly      |
  /// |-----------|--------------------------------------|---------------|
  /// | Data      | `m[#labels] ← n; labels[id] ?= that` | `data id, n`  |
  Data { id: Ident, value: Word },

  /// Updates a cell in place and sets both flags from the result.
  ///
  /// | Operation | Semantics/RTL                            | Assembly       |
  /// |-----------|------------------------------------------|----------------|
  /// | Add       | `m[dst] ← m[dst] + val; z, s ← m[dst]`   | `add dst, val` |
  /// | Subtract  | `m[dst] ← m[dst] − val; z, s ← m[dst]`   | `sub dst, val` |
  /// | Increment | `m[dst] ← m[dst] + 1; z, s ← m[dst]`     | `inc dst`      |
  /// | Decrement | `m[dst] ← m[dst] − 1; z, s ← m[dst]`     | `dec dst`      |
  Arithmetic {
    op: Operator,
    dst: Location,
    val: Value,
  },

  /// Stores `1` only while a flag is set. With the flag clear nothing is
  /// evaluated at all.
  ///
  /// | Operation   | Semantics/RTL        | Assembly    |
  /// |-------------|----------------------|-------------|
  /// | One If Zero | `if z : m[dst] ← 1`  | `onez dst`  |
  /// | One If Sign | `if s : m[dst] ← 1`  | `ones dst`  |
  CondMove { flag: Flag, dst: Location },
}

impl Instruction {
  /// Whether this runs in the initialization pass
  pub fn execute_first(&self) -> bool {
    matches!(self, Instruction::Data { .. })
  }

  /// A deep copy that shares no nodes with `self`
  pub fn duplicate(&self) -> Self {
    match self {
      Instruction::Move { dst, src } => Instruction::Move {
        dst: dst.duplicate(),
        src: src.duplicate(),
      },
      Instruction::Data { id, value } => Instruction::Data {
        id: id.clone(),
        value: *value,
      },
      Instruction::Arithmetic { op, dst, val } => Instruction::Arithmetic {
        op: *op,
        dst: dst.duplicate(),
        val: val.duplicate(),
      },
      Instruction::CondMove { flag, dst } => Instruction::CondMove {
        flag: *flag,
        dst: dst.duplicate(),
      },
    }
  }
}

/// The binary operation of an arithmetic instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Add,
  Sub,
}

impl Operator {
  /// Wraps on overflow
  pub fn apply(self, lhs: Word, rhs: Word) -> Word {
    match self {
      Operator::Add => lhs.wrapping_add(rhs),
      Operator::Sub => lhs.wrapping_sub(rhs),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::rc::Rc;

  fn at(n: Word) -> Location {
    Location::new(Value::Literal(n))
  }

  #[test]
  fn only_data_runs_first() {
    let data = Instruction::Data {
      id: Ident::new("x").unwrap(),
      value: 1,
    };
    let mov = Instruction::Move {
      dst: at(0),
      src: Value::Literal(1),
    };
    let add = Instruction::Arithmetic {
      op: Operator::Add,
      dst: at(0),
      val: Value::Literal(1),
    };
    let onez = Instruction::CondMove {
      flag: Flag::Zero,
      dst: at(0),
    };
    assert!(data.execute_first());
    assert!(!mov.execute_first());
    assert!(!add.execute_first());
    assert!(!onez.execute_first());
  }

  #[test]
  fn operators() {
    assert_eq!(Operator::Add.apply(2, 3), 5);
    assert_eq!(Operator::Sub.apply(2, 3), -1);
    assert_eq!(Operator::Add.apply(Word::MAX, 1), Word::MIN);
    assert_eq!(Operator::Sub.apply(Word::MIN, 1), Word::MAX);
  }

  #[test]
  fn duplicate_is_deep() {
    let dst = at(0);
    let instr = Instruction::Arithmetic {
      op: Operator::Sub,
      dst: dst.clone(),
      val: Value::Deref(dst.clone()),
    };
    let copy = instr.duplicate();
    assert_eq!(copy, instr);
    match copy {
      Instruction::Arithmetic { dst: copied, .. } => {
        assert!(!Rc::ptr_eq(copied.inner(), dst.inner()));
      }
      _ => unreachable!(),
    }
  }
}
