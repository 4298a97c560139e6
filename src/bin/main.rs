use std::io;
use std::process::ExitCode;

use clap::Parser;
use emulator::asm::*;
use emulator::error;
use emulator::log::{self, Level};
use emulator::machine::{Config, Machine};
use emulator::region::Program;

/// Run a small demo program and dump the resulting memory
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// Words of memory
  #[arg(short, long, default_value_t = 8)]
  capacity: u64,

  /// Clear the flags before each load
  #[arg(long)]
  reset_flags: bool,

  /// Log every load
  #[arg(short, long)]
  verbose: bool,
}

// countdown from 2, marking when the counter hits zero and when it goes
// negative
fn demo() -> emulator::Result<Program> {
  let n = mem(lea("n")?);
  Ok(program([
    dec(n.clone()),
    onez(mem(lea("hit_zero")?)),
    dec(n.clone()),
    onez(mem(lea("hit_zero")?)),
    dec(n),
    ones(mem(lea("negative")?)),
    data("n", 2)?,
    data("hit_zero", 0)?,
    data("negative", 0)?,
  ]))
}

fn main() -> ExitCode {
  let args = Args::parse();
  if args.verbose {
    log::set_max_level(Level::Info);
  }

  let config = Config::default()
    .with_capacity(args.capacity)
    .with_flag_reset(args.reset_flags);
  let mut vm = Machine::with_config(config);

  let result = demo().and_then(|prog| vm.load_and_run(&prog));
  if let Err(err) = result {
    error!("{}", err);
    return ExitCode::FAILURE;
  }

  let mut stdout = io::stdout();
  if let Err(err) = vm.dump(&mut stdout) {
    error!("could not dump memory: {}", err);
    return ExitCode::FAILURE;
  }
  println!();
  ExitCode::SUCCESS
}
