//! Common utilities for command implementations

use crate::monitor::Monitor;
use crate::project::{Program, Project};
use clap::{App, Arg, ArgMatches, SubCommand};
use std::io;
use std::str::FromStr;

/// Enumeration of all CLI commands
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run,
    Trace,
    Disassemble,
    Dump,
    Monitor,
}

impl Command {
    /// Enumerate all commands that the emulator recognizes.
    pub fn enumerate() -> Vec<Self> {
        use Command::*;

        vec![Run, Trace, Disassemble, Dump, Monitor]
    }

    /// Construct the subcommand object for this particular `Command`.
    pub fn into_clap_subcommand<'a, 'b>(self) -> App<'a, 'b> {
        match self {
            Command::Run => SubCommand::with_name("run")
                .about("Run the program until it hits a breakpoint")
                .arg(
                    Arg::with_name("limit")
                        .long("limit")
                        .value_name("STEPS")
                        .takes_value(true)
                        .help("Give up after this many instructions"),
                ),
            Command::Trace => SubCommand::with_name("trace")
                .about("Execute the program, listing every instruction as it runs")
                .arg(
                    Arg::with_name("count")
                        .value_name("STEPS")
                        .index(1)
                        .required(true)
                        .help("How many instructions to execute"),
                ),
            Command::Disassemble => SubCommand::with_name("dis")
                .about("Display code at a given address")
                .arg(
                    Arg::with_name("start_pc")
                        .value_name("1234")
                        .index(1)
                        .required(true)
                        .help("The address to list code from"),
                )
                .arg(
                    Arg::with_name("count")
                        .value_name("COUNT")
                        .index(2)
                        .help("How many instructions to list"),
                ),
            Command::Dump => SubCommand::with_name("dump")
                .about("Display the loaded memory image")
                .arg(
                    Arg::with_name("start")
                        .value_name("1234")
                        .index(1)
                        .required(true)
                        .help("The first address to display"),
                )
                .arg(
                    Arg::with_name("stop")
                        .value_name("1274")
                        .index(2)
                        .help("The last address to display"),
                ),
            Command::Monitor => {
                SubCommand::with_name("monitor").about("Debug the program interactively")
            }
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "run" => Ok(Command::Run),
            "trace" => Ok(Command::Trace),
            "dis" => Ok(Command::Disassemble),
            "dump" => Ok(Command::Dump),
            "monitor" => Ok(Command::Monitor),
            "mon" => Ok(Command::Monitor),
            _ => Err(()),
        }
    }
}

/// Load a program into a fresh machine and arm its breakpoints.
pub fn load_monitor(project: &Project, prog: &Program) -> io::Result<Monitor> {
    let state = prog.load(project.root())?;
    let mut monitor = Monitor::new(state);

    for ptr in prog.iter_breakpoints() {
        monitor.set_break(ptr);
    }

    Ok(monitor)
}

/// Parse a decimal count argument, if present.
pub fn count_arg<T>(argv: &ArgMatches, name: &str) -> io::Result<Option<T>>
where
    T: FromStr,
{
    argv.value_of(name)
        .map(|s| {
            s.parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} is not a valid count", s),
                )
            })
        })
        .transpose()
}
