//! # Introduction
//!
//! minicc is the front-end of a small C-like language: it tokenizes source
//! text, parses it into an AST while collecting a flat symbol table, and
//! lowers the AST into linear three-address code with explicit temporaries
//! and jump labels.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST (+ symbol table) → TAC generator → Instructions
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds an AST; declarations
//!    record themselves into a [`symtab::SymbolTable`] as they parse.
//! 2. [`tac`] — walks the AST and emits the instruction list, allocating
//!    `t0, t1, …` temporaries and `L0, L1, …` labels.
//! 3. [`compile`] — one-shot sessions: [`compile::compile`] runs the whole
//!    pipeline with fresh state and returns tokens, AST, TAC, symbols, and
//!    diagnostics together.
//!
//! Lexical errors are recovered (skip one character, keep lexing); the
//! first syntax error halts parsing and suppresses lowering. The pipeline
//! holds no global state, so independent compilations can run on separate
//! threads.

pub mod compile;
pub mod parser;
pub mod symtab;
pub mod tac;

pub use compile::{compile, CompileResult, Diagnostic};
