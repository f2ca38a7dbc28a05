//! Run-to-breakpoint command

use crate::cli::common::{count_arg, load_monitor};
use crate::monitor::Stop;
use crate::project::{Program, Project};
use clap::ArgMatches;
use std::io;

pub fn run(project: &Project, prog: &Program, argv: &ArgMatches) -> io::Result<()> {
    let mut monitor = load_monitor(project, prog)?;
    let limit = count_arg(argv, "limit")?;

    match monitor.run(limit) {
        Stop::Breakpoint(pc) => println!("Breakpoint at {:04x}", pc),
        Stop::StepLimit(count) => println!("Stopped after {} instructions", count),
    }

    print!("{}", monitor.status());

    Ok(())
}
