//! Single-run tracing command

use crate::arch::Register;
use crate::cli::common::{count_arg, load_monitor};
use crate::project::{Program, Project};
use clap::ArgMatches;
use std::io;

/// Execute a particular program and list each instruction as it runs.
///
/// Tracing ignores breakpoints and always runs the requested number of
/// instructions.
pub fn trace(project: &Project, prog: &Program, argv: &ArgMatches) -> io::Result<()> {
    let count: u64 = count_arg(argv, "count")?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Did not provide a step count")
    })?;
    let mut monitor = load_monitor(project, prog)?;

    for _ in 0..count {
        let pc = monitor.state().get_register(Register::PC);
        print!("{}", monitor.disassemble(pc, 1));
        monitor.step();
    }

    print!("{}", monitor.status());

    Ok(())
}
