//! The DCPU-16, a 16-bit word-addressed virtual CPU.
//!
//! Execution happens one instruction at a time through `step`, which runs a
//! full fetch, decode, resolve and execute cycle on a `reg::State`. The rest
//! of this module is the machinery that cycle is built from:
//!
//!  * `instr` - pure bit-field decoding of instruction words, and the
//!    instruction width calculation that conditional skips rely on
//!  * `operand` - the six-bit addressing mode resolver
//!  * `exec` - opcode semantics
//!  * `dis` - rendering instructions as assembly text

mod dis;
mod exec;
mod instr;
mod operand;
mod types;

pub use dis::disassemble;
pub use exec::step;
pub use instr::*;
pub use operand::Operand;
pub use types::*;
