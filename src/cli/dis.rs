//! Static disassembly command

use crate::cli::common::{count_arg, load_monitor};
use crate::input::parse_ptr;
use crate::project::{Program, Project};
use clap::ArgMatches;
use std::io;

pub fn dis(project: &Project, prog: &Program, argv: &ArgMatches) -> io::Result<()> {
    let start_pc = argv
        .value_of("start_pc")
        .and_then(parse_ptr)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "Must specify a valid address to disassemble",
            )
        })?;
    let count = count_arg(argv, "count")?.unwrap_or(16);

    let monitor = load_monitor(project, prog)?;

    print!("{}", monitor.disassemble(start_pc, count));

    Ok(())
}
