//! Types which model architectural registers and the memory they operate on.

mod state;

pub use state::State;

#[cfg(test)]
mod tests;
