//! Program identifier

use crate::arch::PtrVal;
use crate::input::parse_ptr;
use crate::memory::{Image, ImageFormat};
use crate::reg::State;
use clap::{App, Arg, ArgMatches, ArgSettings};
use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::{fs, io};

/// Everything needed to bring up a machine with a given program in memory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Image files, relative to the project file. They are loaded back to
    /// back starting at `base`.
    images: Vec<RelativePathBuf>,

    format: Option<ImageFormat>,

    base: Option<PtrVal>,

    #[serde(skip)]
    name: Option<String>,

    /// Breakpoints to set before the program starts.
    #[serde(default)]
    breakpoints: Vec<PtrVal>,
}

impl Default for Program {
    fn default() -> Self {
        Program {
            images: Vec::new(),
            format: None,
            base: None,
            name: None,
            breakpoints: Vec::new(),
        }
    }
}

impl Program {
    pub fn configure_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(
            Arg::with_name("image")
                .long("image")
                .value_name("image.bin")
                .help("The program image file(s) to load.")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .value_name("FORMAT")
                .help("Image format: bin/binbe, binle, or hex.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("base")
                .long("base")
                .value_name("0000")
                .help("Address to load the first image at.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("break")
                .long("break")
                .value_name("ADDR")
                .help("Set a breakpoint before starting.")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .set(ArgSettings::Global),
        )
    }

    /// Construct a Program from clap ArgMatches
    ///
    /// Options that are present but do not parse are reported rather than
    /// ignored.
    pub fn from_arg_matches(args: &ArgMatches) -> io::Result<Program> {
        let mut prog = Program::default();

        for image in args.values_of("image").into_iter().flatten() {
            prog.add_image_path(image);
        }

        if let Some(format) = args.value_of("format") {
            prog.set_format(ImageFormat::from_str(format).map_err(|_| {
                invalid_input(format!("{} is not a valid image format", format))
            })?);
        }

        prog.base = args.value_of("base").map(address).transpose()?;

        for ptr in args.values_of("break").into_iter().flatten() {
            prog.breakpoints.push(address(ptr)?);
        }

        Ok(prog)
    }

    pub fn format(&self) -> ImageFormat {
        self.format.unwrap_or_default()
    }

    pub fn set_format(&mut self, format: ImageFormat) {
        self.format = Some(format);
    }

    pub fn base(&self) -> PtrVal {
        self.base.unwrap_or(0)
    }

    /// List all the image files related to a given program.
    pub fn iter_images(&self) -> impl Iterator<Item = &RelativePathBuf> {
        self.images.iter()
    }

    /// Add an image path.
    pub fn add_image_path(&mut self, path: &str) {
        self.images.push(RelativePathBuf::from(path));
    }

    pub fn iter_breakpoints(&self) -> impl Iterator<Item = PtrVal> + '_ {
        self.breakpoints.iter().copied()
    }

    pub fn as_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Merge user-provided settings over this program's settings.
    ///
    /// Breakpoints accumulate; everything else in `other` replaces ours.
    pub fn apply_override(&self, other: &Program) -> Program {
        Program {
            images: match other.images.len() {
                0 => self.images.clone(),
                _ => other.images.clone(),
            },
            format: other.format.or(self.format),
            base: other.base.or(self.base),
            name: other.name.clone().or_else(|| self.name.clone()),
            breakpoints: self
                .breakpoints
                .iter()
                .chain(other.breakpoints.iter())
                .copied()
                .collect(),
        }
    }

    /// Construct a fresh machine with every image of this program loaded.
    ///
    /// Image paths are resolved relative to `root`, which should be the
    /// directory containing the project file.
    pub fn load(&self, root: &Path) -> io::Result<State> {
        let mut state = State::default();
        let mut base = self.base() as usize;

        if self.images.is_empty() {
            return Err(invalid_input("Did not specify an image".to_string()));
        }

        for image_path in self.iter_images() {
            let path = image_path.to_path(root);
            let mut file = fs::File::open(&path)?;
            let image = Image::read(&mut file, self.format())?;

            if base > PtrVal::max_value() as usize {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("No room left in memory for {}", path.display()),
                ));
            }

            let count = state.memory_mut().load(base as PtrVal, image.as_words())?;
            log::info!(
                "Loaded {} words from {} at ${:04X}",
                count,
                path.display(),
                base
            );

            base += count;
        }

        Ok(state)
    }
}

fn invalid_input(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

fn address(text: &str) -> io::Result<PtrVal> {
    parse_ptr(text).ok_or_else(|| invalid_input(format!("{} is not a valid address", text)))
}
