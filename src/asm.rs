//! Mnemonic helpers for building programs by hand
//!
//! ```
//! use emulator::asm::*;
//!
//! # fn main() -> emulator::Result<()> {
//! let counter = mem(lea("counter")?);
//! let prog = program([
//!   data("counter", 1)?,
//!   dec(counter),
//!   onez(mem(lea("done")?)),
//!   data("done", 0)?,
//! ]);
//! # let _ = prog;
//! # Ok(())
//! # }
//! ```

use std::rc::Rc;

use crate::error::Result;
use crate::flags::Flag;
use crate::ident::Ident;
use crate::instruction::{Instruction, Operator};
use crate::memory::Word;
use crate::region::Program;
use crate::value::{Location, Value};

/// `n`
pub fn num(n: Word) -> Value {
  Value::Literal(n)
}

/// Address of the label `id`
pub fn lea(id: &str) -> Result<Value> {
  Ok(Value::AddressOf(Ident::new(id)?))
}

/// `m[v]`
pub fn mem(v: impl Into<Value>) -> Location {
  let v: Value = v.into();
  Location::new(v)
}

pub fn mov(dst: Location, src: impl Into<Value>) -> Instruction {
  Instruction::Move {
    dst,
    src: src.into(),
  }
}

pub fn data(id: &str, n: Word) -> Result<Instruction> {
  Ok(Instruction::Data {
    id: Ident::new(id)?,
    value: n,
  })
}

pub fn add(dst: Location, val: impl Into<Value>) -> Instruction {
  Instruction::Arithmetic {
    op: Operator::Add,
    dst,
    val: val.into(),
  }
}

pub fn sub(dst: Location, val: impl Into<Value>) -> Instruction {
  Instruction::Arithmetic {
    op: Operator::Sub,
    dst,
    val: val.into(),
  }
}

pub fn inc(dst: Location) -> Instruction {
  add(dst, num(1))
}

pub fn dec(dst: Location) -> Instruction {
  sub(dst, num(1))
}

/// `m[dst] ← 1`
pub fn one(dst: Location) -> Instruction {
  mov(dst, num(1))
}

/// `m[dst] ← 1` if the zero flag is set
pub fn onez(dst: Location) -> Instruction {
  Instruction::CondMove {
    flag: Flag::Zero,
    dst,
  }
}

/// `m[dst] ← 1` if the sign flag is set
pub fn ones(dst: Location) -> Instruction {
  Instruction::CondMove {
    flag: Flag::Sign,
    dst,
  }
}

pub fn program<I>(instructions: I) -> Program
where
  I: IntoIterator,
  I::Item: Into<Rc<Instruction>>,
{
  Program::new(instructions.into_iter().map(Into::into).collect())
}
