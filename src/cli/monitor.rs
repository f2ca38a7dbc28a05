//! Interactive monitor command

use crate::arch::Register;
use crate::cli::common::load_monitor;
use crate::monitor::{Monitor, MonitorCommand, Stop, HELP};
use crate::project::{Program, Project};
use std::io;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub fn monitor(project: &Project, prog: &Program) -> io::Result<()> {
    let mut monitor = load_monitor(project, prog)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    repl(&mut monitor, stdin.lock(), stdout.lock())
}

/// Read monitor commands from `input` until it runs dry or the user quits.
///
/// Command output goes to `output`. Commands that don't parse are reported on
/// stderr and otherwise ignored.
pub fn repl<R, W>(monitor: &mut Monitor, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", monitor.status())?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        match MonitorCommand::from_str(&line?) {
            Ok(MonitorCommand::Quit) => return Ok(()),
            Ok(cmd) => execute(monitor, cmd, &mut output)?,
            Err(e) => eprintln!("{}", e),
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;

    Ok(())
}

fn execute<W>(monitor: &mut Monitor, cmd: MonitorCommand, output: &mut W) -> io::Result<()>
where
    W: Write,
{
    match cmd {
        MonitorCommand::Step(count) => {
            for _ in 0..count {
                monitor.step();
            }

            write!(output, "{}", monitor.status())?;
        }
        MonitorCommand::Run(limit) => {
            match monitor.run(limit) {
                Stop::Breakpoint(pc) => writeln!(output, "Breakpoint at {:04x}", pc)?,
                Stop::StepLimit(count) => {
                    writeln!(output, "Stopped after {} instructions", count)?
                }
            }

            write!(output, "{}", monitor.status())?;
        }
        MonitorCommand::Break(ptr) => monitor.set_break(ptr),
        MonitorCommand::Delete(ptr) => {
            if !monitor.remove_break(ptr) {
                writeln!(output, "No breakpoint at {:04x}", ptr)?;
            }
        }
        MonitorCommand::Clear => monitor.clear_breaks(),
        MonitorCommand::ListBreaks => {
            for ptr in monitor.iter_breaks() {
                writeln!(output, "{:04x}", ptr)?;
            }
        }
        MonitorCommand::Status => write!(output, "{}", monitor.status())?,
        MonitorCommand::Dump(start, stop) => write!(output, "{}", monitor.dump_mem(start, stop))?,
        MonitorCommand::Disassemble(start, count) => {
            let start = start.unwrap_or_else(|| monitor.state().get_register(Register::PC));

            write!(output, "{}", monitor.disassemble(start, count))?;
        }
        MonitorCommand::Help => writeln!(output, "{}", HELP)?,
        MonitorCommand::Quit => {}
    }

    Ok(())
}
