//! CLI commands

mod common;
mod dis;
mod dump;
mod main;
mod monitor;
mod run;
mod trace;

pub use common::Command;
pub use dis::dis;
pub use dump::dump;
pub use main::main;
pub use monitor::monitor;
pub use run::run;
pub use trace::trace;
