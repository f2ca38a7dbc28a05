#[macro_use]
extern crate clap;

#[macro_use]
extern crate serde_plain;

mod arch;
mod ast;
mod cli;
mod input;
mod memory;
mod monitor;
mod project;
mod reg;

use std::io;

fn main() -> io::Result<()> {
    env_logger::init();

    cli::main()
}
