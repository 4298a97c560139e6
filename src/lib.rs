//! A tiny word-addressed machine that runs typed micro-assembly
//!
//! Programs are trees of [`instruction::Instruction`]s built up front (see
//! [`asm`] for the mnemonic helpers). A [`machine::Machine`] loads a program in
//! two passes: every `data` declaration first, then everything else in order.
//!
//! ```
//! use emulator::asm::*;
//! use emulator::machine::Machine;
//!
//! # fn main() -> emulator::Result<()> {
//! let prog = program([
//!   data("x", 10)?,
//!   data("y", 20)?,
//!   mov(mem(lea("x")?), num(5)),
//! ]);
//! let mut machine = Machine::new(4);
//! machine.load_and_run(&prog)?;
//! assert_eq!(machine.memory().cells(), &[5, 20, 0, 0]);
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod log;

pub mod asm;
pub mod error;
pub mod flags;
pub mod ident;
pub mod instruction;
pub mod machine;
pub mod memory;
pub mod region;
pub mod value;

pub use error::{Error, Result};
