//! Three-address code intermediate representation
//!
//! - [`instr`]: the [`Instr`](instr::Instr) enum and its line-oriented
//!   textual form
//! - [`gen`]: [`TacGen`](gen::TacGen), the AST → TAC lowering walk with
//!   per-compilation temporary and label counters

pub mod gen;
pub mod instr;
