//! CLI support for non-command bits

use crate::cli::common::Command;
use crate::{cli, project};
use clap::{Arg, ArgSettings};
use std::io;
use std::str::FromStr;

pub fn main() -> io::Result<()> {
    let mut app = app_from_crate!();
    app = app.arg(
        Arg::with_name("program")
            .long("program")
            .value_name("myapp")
            .takes_value(true)
            .help("Which program in the project to load")
            .set(ArgSettings::Global),
    );
    app = project::Program::configure_app(app);
    app = app.arg(
        Arg::with_name("project")
            .long("project")
            .value_name("dcpu16.json")
            .takes_value(true)
            .help("The project file to load")
            .set(ArgSettings::Global),
    );

    for cmd in Command::enumerate().iter() {
        app = app.subcommand(cmd.into_clap_subcommand());
    }

    let matches = app.get_matches();

    let project_filename = matches.value_of("project").unwrap_or("dcpu16.json");
    let version = matches.value_of("program");
    let overrides = project::Program::from_arg_matches(&matches)?;

    let (command, submatches) = matches.subcommand();
    let command = cli::Command::from_str(command).unwrap_or(cli::Command::Monitor);

    let project = project::Project::read(project_filename)?;
    let prog = project.resolve_program(version, &overrides)?;

    if let Some(name) = prog.as_name() {
        log::info!("Using program {}", name);
    }

    match (command, submatches) {
        (cli::Command::Run, Some(argv)) => cli::run(&project, &prog, argv)?,
        (cli::Command::Trace, Some(argv)) => cli::trace(&project, &prog, argv)?,
        (cli::Command::Disassemble, Some(argv)) => cli::dis(&project, &prog, argv)?,
        (cli::Command::Dump, Some(argv)) => cli::dump(&project, &prog, argv)?,
        _ => cli::monitor(&project, &prog)?,
    };

    Ok(())
}
