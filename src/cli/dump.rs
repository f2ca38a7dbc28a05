//! Memory dump command

use crate::arch::PtrVal;
use crate::input::parse_ptr;
use crate::monitor::Monitor;
use crate::project::{Program, Project};
use clap::ArgMatches;
use std::io;

fn address(argv: &ArgMatches, name: &str) -> io::Result<Option<PtrVal>> {
    match argv.value_of(name) {
        Some(s) => parse_ptr(s).map(Some).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a valid address", s),
            )
        }),
        None => Ok(None),
    }
}

pub fn dump(project: &Project, prog: &Program, argv: &ArgMatches) -> io::Result<()> {
    let start = address(argv, "start")?.unwrap_or(0);
    let stop = address(argv, "stop")?.unwrap_or_else(|| start.saturating_add(0x3F));

    let monitor = Monitor::new(prog.load(project.root())?);

    print!("{}", monitor.dump_mem(start, stop));

    Ok(())
}
