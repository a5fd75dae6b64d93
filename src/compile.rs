//! One-shot compilation sessions
//!
//! [`compile`] runs the whole pipeline — lex, parse, symbol collection,
//! TAC lowering — over a single source string and returns every artifact
//! in a [`CompileResult`]. All state (lexer, parser, symbol table, counter
//! state) is constructed fresh inside the call and dropped with the
//! result, so concurrent compilations on separate threads cannot observe
//! each other.
//!
//! The call itself never fails: partial artifacts plus an ordered
//! diagnostics list are always returned. Tokens survive a syntax error;
//! the symbol table and TAC are empty when no AST was produced.

use crate::parser::ast::{self, Program};
use crate::parser::lexer::{LexError, Lexer, Token};
use crate::parser::parser::{Parser, SyntaxError};
use crate::symtab::SymbolTable;
use crate::tac::gen::TacGen;
use crate::tac::instr::Instr;
use std::fmt;

/// A lexical or syntactic diagnostic, in the order produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Lex(err) => write!(f, "{}", err),
            Diagnostic::Syntax(err) => write!(f, "{}", err),
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        Diagnostic::Lex(err)
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(err: SyntaxError) -> Self {
        Diagnostic::Syntax(err)
    }
}

/// Every artifact of one compilation.
#[derive(Debug, Clone, Default)]
pub struct CompileResult {
    /// The full token list, present even when parsing failed.
    pub tokens: Vec<Token>,
    /// The AST root; `None` when a syntax error halted the parse.
    pub ast: Option<Program>,
    /// Lowered instructions; empty when there is no AST.
    pub tac: Vec<Instr>,
    /// Symbol snapshot; empty when there is no AST.
    pub symbols: SymbolTable,
    /// Lex errors in source order, then the syntax error if any.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileResult {
    /// True when no diagnostics were produced.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The AST rendered as an indented tree, or an empty string without
    /// one.
    pub fn ast_text(&self) -> String {
        match &self.ast {
            Some(program) => ast::render(program),
            None => String::new(),
        }
    }

    /// The TAC rendered one instruction per line.
    pub fn tac_text(&self) -> Vec<String> {
        self.tac.iter().map(|instr| instr.to_string()).collect()
    }
}

/// Compile one source string end to end.
pub fn compile(source: &str) -> CompileResult {
    let (tokens, lex_errors) = Lexer::scan(source);
    let mut diagnostics: Vec<Diagnostic> =
        lex_errors.into_iter().map(Diagnostic::from).collect();

    let mut parser = Parser::new(tokens.clone());
    match parser.parse_program() {
        Ok(program) => {
            let symbols = parser.into_symbols();
            let tac = TacGen::new().lower(&program);
            CompileResult {
                tokens,
                ast: Some(program),
                tac,
                symbols,
                diagnostics,
            }
        }
        Err(err) => {
            diagnostics.push(err.into());
            CompileResult {
                tokens,
                ast: None,
                tac: Vec::new(),
                symbols: SymbolTable::new(),
                diagnostics,
            }
        }
    }
}
