//! Interactive monitor command parsing

use crate::arch::PtrVal;
use crate::input::parse_ptr;
use std::str::FromStr;
use thiserror::Error;

/// Enumeration of all commands the interactive monitor accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MonitorCommand {
    /// Execute the given number of instructions.
    Step(u64),

    /// Run until a breakpoint, optionally giving up after a number of steps.
    Run(Option<u64>),

    Break(PtrVal),
    Delete(PtrVal),
    Clear,
    ListBreaks,
    Status,

    /// Dump memory over an inclusive range.
    Dump(PtrVal, PtrVal),

    /// Disassemble some instructions, from PC if no address is given.
    Disassemble(Option<PtrVal>, usize),

    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, try \"help\"")]
    Unknown(String),

    #[error("{0} needs an address")]
    MissingAddress(&'static str),

    #[error("{0:?} is not a valid address")]
    InvalidAddress(String),

    #[error("{0:?} is not a valid count")]
    InvalidCount(String),
}

/// Number of words shown by `dump` when no end address is given.
const DEFAULT_DUMP_LENGTH: PtrVal = 0x40;

/// Number of instructions shown by `dis` when no count is given.
const DEFAULT_DIS_COUNT: usize = 8;

fn address(cmd: &'static str, arg: Option<&str>) -> Result<PtrVal, CommandError> {
    let arg = arg.ok_or(CommandError::MissingAddress(cmd))?;

    parse_ptr(arg).ok_or_else(|| CommandError::InvalidAddress(arg.to_string()))
}

fn count<T>(arg: &str) -> Result<T, CommandError>
where
    T: FromStr,
{
    arg.parse()
        .map_err(|_| CommandError::InvalidCount(arg.to_string()))
}

impl FromStr for MonitorCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let cmd = words.next().unwrap_or("step").to_ascii_lowercase();
        let arg1 = words.next();
        let arg2 = words.next();

        match cmd.as_ref() {
            "s" | "step" => Ok(MonitorCommand::Step(arg1.map_or(Ok(1), count)?)),
            "r" | "run" | "c" | "continue" => Ok(MonitorCommand::Run(arg1.map(count).transpose()?)),
            "b" | "break" => Ok(MonitorCommand::Break(address("break", arg1)?)),
            "d" | "delete" => Ok(MonitorCommand::Delete(address("delete", arg1)?)),
            "clear" => Ok(MonitorCommand::Clear),
            "breaks" => Ok(MonitorCommand::ListBreaks),
            "regs" | "status" => Ok(MonitorCommand::Status),
            "x" | "dump" => {
                let start = address("dump", arg1)?;
                let stop = match arg2 {
                    Some(_) => address("dump", arg2)?,
                    None => start.saturating_add(DEFAULT_DUMP_LENGTH - 1),
                };

                Ok(MonitorCommand::Dump(start, stop))
            }
            "dis" => {
                let start = arg1.map(|a| address("dis", Some(a))).transpose()?;
                let n = arg2.map_or(Ok(DEFAULT_DIS_COUNT), count)?;

                Ok(MonitorCommand::Disassemble(start, n))
            }
            "h" | "help" | "?" => Ok(MonitorCommand::Help),
            "q" | "quit" | "exit" => Ok(MonitorCommand::Quit),
            _ => Err(CommandError::Unknown(cmd)),
        }
    }
}

/// Usage text for the interactive monitor.
pub static HELP: &str = "\
step [n]            execute n instructions (default 1); an empty line steps once
run [limit]         run until a breakpoint, or until limit instructions ran
break <addr>        set a breakpoint
delete <addr>       remove a breakpoint
clear               remove all breakpoints
breaks              list breakpoints
status              show registers
dump <start> [end]  show memory
dis [addr] [n]      disassemble n instructions (default: 8 from PC)
quit                leave the monitor
Addresses are hexadecimal (1234, 0x1234 or $1234); counts are decimal.";
