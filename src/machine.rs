use std::io::{self, Write};

use crate::error::Result;
use crate::flags::{Flag, Flags};
use crate::ident::Ident;
use crate::instruction::{Instruction, Operator};
use crate::memory::{Memory, Word};
use crate::region::Region;
use crate::value::{Location, Value};

/// How a [`Machine`] is set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  /// Number of words of memory
  pub capacity: u64,
  /// Clear the flags at the start of every load. Off by default, so flags
  /// carry over from one program to the next.
  pub reset_flags_on_load: bool,
}

const DEFAULT_CAPACITY: u64 = 64;

impl Default for Config {
  fn default() -> Self {
    Self {
      capacity: DEFAULT_CAPACITY,
      reset_flags_on_load: false,
    }
  }
}

impl Config {
  pub fn with_capacity(mut self, capacity: u64) -> Self {
    self.capacity = capacity;
    self
  }

  pub fn with_flag_reset(mut self, reset: bool) -> Self {
    self.reset_flags_on_load = reset;
    self
  }
}

/// A machine with a fixed amount of word memory and two condition flags
///
/// Each [`Machine::load_and_run`] starts from fresh memory, runs every data
/// declaration, then runs the rest of the program in order.
#[derive(Debug)]
pub struct Machine {
  config: Config,
  memory: Memory,
  flags: Flags,
}

impl Machine {
  /// Create a machine with `capacity` words of zeroed memory
  pub fn new(capacity: u64) -> Self {
    Self::with_config(Config::default().with_capacity(capacity))
  }

  pub fn with_config(config: Config) -> Self {
    Self {
      config,
      memory: Memory::new(config.capacity),
      flags: Flags::default(),
    }
  }

  pub fn capacity(&self) -> u64 {
    self.config.capacity
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn memory(&self) -> &Memory {
    &self.memory
  }

  pub fn flags(&self) -> &Flags {
    &self.flags
  }

  /// Reset memory and run `region` to completion
  ///
  /// Data declarations run first, in order, so any other instruction can
  /// name any label no matter where it is declared. The first failure stops
  /// the run and leaves memory as it was at that point.
  pub fn load_and_run<R>(&mut self, region: &R) -> Result<()>
  where
    R: Region,
  {
    let instructions = region.instructions();
    self.memory.reset(self.config.capacity);
    if self.config.reset_flags_on_load {
      self.flags.clear();
    }

    let (first, rest): (Vec<_>, Vec<_>) =
      instructions.iter().partition(|instr| instr.execute_first());
    info!(
      "loading {} instructions ({} data) into {} words",
      instructions.len(),
      first.len(),
      self.config.capacity
    );

    let mut task = Task::new(self);
    for (pass, batch) in [("data", first), ("main", rest)] {
      for instr in batch {
        if let Err(err) = task.run(instr) {
          warn!("{} pass failed on {:?}: {}", pass, instr, err);
          return Err(err);
        }
      }
    }
    Ok(())
  }

  /// Write every cell in address order, each followed by a space
  pub fn dump<W>(&self, sink: &mut W) -> io::Result<()>
  where
    W: Write,
  {
    for cell in self.memory.cells() {
      write!(sink, "{} ", cell)?;
    }
    Ok(())
  }
}

struct Task<'vm> {
  vm: &'vm mut Machine,
}

impl<'vm> Task<'vm> {
  fn new(vm: &'vm mut Machine) -> Self {
    Self { vm }
  }

  fn run(&mut self, instr: &Instruction) -> Result<()> {
    match instr {
      Instruction::Move { dst, src } => move_value(self, dst, src)?,
      Instruction::Data { id, value } => define_data(self, id, *value)?,
      Instruction::Arithmetic { op, dst, val } => arithmetic(self, *op, dst, val)?,
      Instruction::CondMove { flag, dst } => cond_move(self, *flag, dst)?,
    }
    Ok(())
  }
}

// m[dst] ← src
fn move_value(task: &mut Task<'_>, dst: &Location, src: &Value) -> Result<()> {
  let target = dst.load(&task.vm.memory)?;
  let value = src.evaluate(&task.vm.memory)?;
  task.vm.memory.write(target.address, value)
}

// m[#labels] ← n
fn define_data(task: &mut Task<'_>, id: &Ident, value: Word) -> Result<()> {
  task.vm.memory.define(id, value)?;
  Ok(())
}

// m[dst] ← m[dst] op val; z ← m[dst] == 0; s ← m[dst] < 0
fn arithmetic(task: &mut Task<'_>, op: Operator, dst: &Location, val: &Value) -> Result<()> {
  let target = dst.load(&task.vm.memory)?;
  let rhs = val.evaluate(&task.vm.memory)?;
  let new = op.apply(target.value, rhs);
  task.vm.memory.write(target.address, new)?;
  task.vm.flags.update(new);
  Ok(())
}

// if flag : m[dst] ← 1
fn cond_move(task: &mut Task<'_>, flag: Flag, dst: &Location) -> Result<()> {
  if task.vm.flags.get(flag) {
    move_value(task, dst, &Value::Literal(1))?;
  }
  Ok(())
}
