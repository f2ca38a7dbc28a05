//! Project configuration file representation

use crate::project::program::Program;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// In-memory representation of the current project configuration.
///
/// This file is typically read from a file named `dcpu16.json`, and it
/// contains every program in the project along with how to load it.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Project {
    #[serde(default)]
    programs: BTreeMap<String, Program>,

    /// Directory that image paths are relative to.
    #[serde(skip)]
    root: PathBuf,
}

impl Project {
    /// Read a project file.
    ///
    /// A missing project file is not an error: you get an empty project rooted
    /// in the current directory, and everything has to come from the command
    /// line instead.
    pub fn read(filename: &str) -> io::Result<Self> {
        let project_file = match fs::File::open(filename) {
            Ok(file) => file,
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No project file at {}, using an empty project", filename);
                return Ok(Self::default());
            }
            Err(e) => return Err(e),
        };

        let mut project: Self = serde_json::from_reader(io::BufReader::new(project_file))?;
        project.root = Path::new(filename)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        for (name, prog) in project.programs.iter_mut() {
            prog.set_name(name);
        }

        Ok(project)
    }

    /// Parse a project from a string, rooted at the current directory.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let mut project: Self = serde_json::from_str(json)?;

        for (name, prog) in project.programs.iter_mut() {
            prog.set_name(name);
        }

        Ok(project)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the program with the given name within the project.
    pub fn program(&self, name: &str) -> Option<&Program> {
        self.programs.get(name)
    }

    /// Get the project's default program, which is the first by name.
    pub fn default_program(&self) -> Option<(&String, &Program)> {
        self.programs.iter().next()
    }

    pub fn iter_programs(&self) -> impl Iterator<Item = (&str, &Program)> {
        self.programs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Work out which program the user wants to run.
    ///
    /// Settings given on the command line in `overrides` win over the ones in
    /// the project file. If `name` is given it must exist in the project.
    pub fn resolve_program(&self, name: Option<&str>, overrides: &Program) -> io::Result<Program> {
        match name {
            Some(name) => match self.program(name) {
                Some(prog) => Ok(prog.apply_override(overrides)),
                None => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("The specified program {} does not exist.", name),
                )),
            },
            None => match self.default_program() {
                Some((_, prog)) => Ok(prog.apply_override(overrides)),
                None => Ok(overrides.clone()),
            },
        }
    }
}
