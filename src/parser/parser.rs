//! Recursive descent parser for the mini-C grammar
//!
//! Consumes the token stream produced by [`Lexer`](super::lexer::Lexer) and
//! builds the AST defined in [`ast`](super::ast), recording every declared
//! name into a flat [`SymbolTable`] as the declaration is parsed.
//!
//! Parsing is halt-and-report: the first syntax error aborts the parse and
//! no statement-level recovery is attempted.
//!
//! Binary expressions use one method per precedence level, from
//! `simple_expression` (a single optional relational operator) down through
//! left-associative additive and multiplicative loops. `&&`, `||`, `!`,
//! `++`, `--`, and string literals are tokenized but belong to no
//! production; encountering one in expression position is a syntax error.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::symtab::{Symbol, SymbolKind, SymbolTable};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub message: String,
}

impl SyntaxError {
    fn unexpected(token: &Token) -> Self {
        SyntaxError {
            message: format!(
                "syntax error at token {} ('{}') at line {}",
                token.kind(),
                token.text(),
                token.line()
            ),
        }
    }

    fn end_of_input() -> Self {
        SyntaxError {
            message: "syntax error at end of input".to_string(),
        }
    }

    fn bad_array_size(line: usize) -> Self {
        SyntaxError {
            message: format!(
                "array size must be a positive integer at line {}",
                line
            ),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Recursive descent parser for the mini-C grammar
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    symbols: SymbolTable,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            symbols: SymbolTable::new(),
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// An empty stream yields an empty program, so whitespace- or
    /// comment-only source compiles without diagnostics.
    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut program = Program::new();

        while self.peek().is_some() {
            let decl = self.parse_declaration()?;
            program.declarations.push(decl);
        }

        Ok(program)
    }

    /// The symbol table populated during parsing.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consume the parser, yielding the populated symbol table.
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Parse a top-level declaration: variable, array, or function.
    ///
    /// All three start with `type ID`; the next token disambiguates.
    fn parse_declaration(&mut self) -> Result<Decl, SyntaxError> {
        let ty = self.parse_type_specifier()?;
        let name = self.expect_identifier()?;

        if self.check(&Token::LParen(0)) {
            self.advance();
            let params = self.parse_params()?;
            self.expect(&Token::RParen(0))?;
            let body = self.parse_compound()?;

            // Params were recorded as they parsed; the function entry
            // lands after its body.
            self.symbols.record(
                &name,
                Symbol {
                    ty,
                    kind: SymbolKind::Function {
                        params: params.clone(),
                    },
                },
            );

            return Ok(Decl::Fun {
                return_type: ty,
                name,
                params,
                body,
            });
        }

        self.parse_var_declaration_rest(ty, name)
    }

    /// Parse the tail of `type ID ...`: `;` or `[ NUMBER ] ;`.
    ///
    /// Side effect: records the variable or array symbol.
    fn parse_var_declaration_rest(
        &mut self,
        ty: TypeSpec,
        name: String,
    ) -> Result<Decl, SyntaxError> {
        if self.match_token(&Token::LBracket(0)) {
            let size = self.parse_array_size()?;
            self.expect(&Token::RBracket(0))?;
            self.expect(&Token::Semicolon(0))?;

            self.symbols.record(
                &name,
                Symbol {
                    ty,
                    kind: SymbolKind::Array { size },
                },
            );

            return Ok(Decl::Array { ty, name, size });
        }

        self.expect(&Token::Semicolon(0))?;

        self.symbols.record(
            &name,
            Symbol {
                ty,
                kind: SymbolKind::Variable,
            },
        );

        Ok(Decl::Var { ty, name })
    }

    /// Parse an array size: a positive integer literal.
    ///
    /// Zero or a float literal is rejected here and records no symbol.
    fn parse_array_size(&mut self) -> Result<u64, SyntaxError> {
        match self.peek() {
            Some(Token::Number(NumberValue::Int(n), line)) => {
                let (n, line) = (*n, *line);
                if n <= 0 {
                    return Err(SyntaxError::bad_array_size(line));
                }
                self.advance();
                Ok(n as u64)
            }
            Some(Token::Number(NumberValue::Float(_), line)) => {
                Err(SyntaxError::bad_array_size(*line))
            }
            _ => Err(self.error_here()),
        }
    }

    fn parse_type_specifier(&mut self) -> Result<TypeSpec, SyntaxError> {
        let ty = match self.peek() {
            Some(Token::Int(_)) => TypeSpec::Int,
            Some(Token::Float(_)) => TypeSpec::Float,
            Some(Token::Char(_)) => TypeSpec::Char,
            Some(Token::Void(_)) => TypeSpec::Void,
            _ => return Err(self.error_here()),
        };
        self.advance();
        Ok(ty)
    }

    /// Parse a parameter list: `param, param, ...`, a lone `void`, or
    /// nothing.
    fn parse_params(&mut self) -> Result<Vec<Param>, SyntaxError> {
        let mut params = Vec::new();

        if self.check(&Token::RParen(0)) {
            return Ok(params);
        }

        // `(void)` means no parameters; `void` followed by a name is an
        // ordinary parameter type.
        if self.check(&Token::Void(0))
            && matches!(self.peek_ahead(1), Some(Token::RParen(_)))
        {
            self.advance();
            return Ok(params);
        }

        loop {
            params.push(self.parse_param()?);

            if !self.match_token(&Token::Comma(0)) {
                break;
            }
        }

        Ok(params)
    }

    /// Parse one parameter: `type ID` or `type ID [ ]`.
    ///
    /// Side effect: records the parameter symbol.
    fn parse_param(&mut self) -> Result<Param, SyntaxError> {
        let ty = self.parse_type_specifier()?;
        let name = self.expect_identifier()?;

        let param = if self.match_token(&Token::LBracket(0)) {
            self.expect(&Token::RBracket(0))?;
            Param::Array { ty, name }
        } else {
            Param::Scalar { ty, name }
        };

        self.symbols.record(
            param.name(),
            Symbol {
                ty,
                kind: SymbolKind::Param,
            },
        );

        Ok(param)
    }

    /// Parse a compound statement: `{ var-declarations statements }`.
    ///
    /// Local declarations come strictly first; a type keyword after the
    /// first statement is a syntax error.
    fn parse_compound(&mut self) -> Result<Compound, SyntaxError> {
        self.expect(&Token::LBrace(0))?;

        let mut locals = Vec::new();
        while self.is_type_keyword() {
            let ty = self.parse_type_specifier()?;
            let name = self.expect_identifier()?;
            locals.push(self.parse_var_declaration_rest(ty, name)?);
        }

        let mut statements = Vec::new();
        while !self.check(&Token::RBrace(0)) {
            if self.peek().is_none() {
                return Err(SyntaxError::end_of_input());
            }
            statements.push(self.parse_statement()?);
        }

        self.expect(&Token::RBrace(0))?;

        Ok(Compound { locals, statements })
    }

    fn parse_statement(&mut self) -> Result<Stmt, SyntaxError> {
        match self.peek() {
            Some(Token::If(_)) => self.parse_selection(),
            Some(Token::While(_)) => self.parse_iteration(),
            Some(Token::Return(_)) => self.parse_return(),
            Some(Token::LBrace(_)) => {
                Ok(Stmt::Compound(self.parse_compound()?))
            }
            Some(Token::Semicolon(_)) => {
                self.advance();
                Ok(Stmt::Expr(None))
            }
            Some(_) => {
                let expr = self.parse_expression()?;
                self.expect(&Token::Semicolon(0))?;
                Ok(Stmt::Expr(Some(expr)))
            }
            None => Err(SyntaxError::end_of_input()),
        }
    }

    /// Parse `if ( expr ) statement [else statement]`.
    ///
    /// A dangling `else` binds to the nearest `if`.
    fn parse_selection(&mut self) -> Result<Stmt, SyntaxError> {
        self.advance(); // 'if'
        self.expect(&Token::LParen(0))?;
        let cond = self.parse_expression()?;
        self.expect(&Token::RParen(0))?;

        let then_body = Box::new(self.parse_statement()?);

        if self.match_token(&Token::Else(0)) {
            let else_body = Box::new(self.parse_statement()?);
            Ok(Stmt::IfElse {
                cond,
                then_body,
                else_body,
            })
        } else {
            Ok(Stmt::If { cond, then_body })
        }
    }

    fn parse_iteration(&mut self) -> Result<Stmt, SyntaxError> {
        self.advance(); // 'while'
        self.expect(&Token::LParen(0))?;
        let cond = self.parse_expression()?;
        self.expect(&Token::RParen(0))?;
        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::While { cond, body })
    }

    fn parse_return(&mut self) -> Result<Stmt, SyntaxError> {
        self.advance(); // 'return'

        if self.match_token(&Token::Semicolon(0)) {
            return Ok(Stmt::Return(None));
        }

        let expr = self.parse_expression()?;
        self.expect(&Token::Semicolon(0))?;
        Ok(Stmt::Return(Some(expr)))
    }

    /// Parse `expression : var = expression | simple_expression`.
    ///
    /// The assignment target must be syntactically a var (`x` or `x[i]`),
    /// so `(x) = 1` and `a + b = c` are rejected. Disambiguated with a
    /// saved-position probe: parse a var, and if no `=` follows, rewind and
    /// reparse as a simple expression.
    fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        if matches!(self.peek(), Some(Token::Ident(_, _))) {
            let saved = self.position;
            if let Ok(target) = self.parse_var() {
                if self.match_token(&Token::Assign(0)) {
                    let value = self.parse_expression()?;
                    return Ok(Expr::Assign {
                        target: Box::new(target),
                        value: Box::new(value),
                    });
                }
            }
            self.position = saved;
        }

        self.parse_simple_expression()
    }

    /// Parse `additive (relop additive)?` — at most one relational
    /// operator, matching the grammar's non-recursive production.
    fn parse_simple_expression(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.parse_additive()?;

        let op = match self.peek() {
            Some(Token::Le(_)) => BinOp::Le,
            Some(Token::Lt(_)) => BinOp::Lt,
            Some(Token::Gt(_)) => BinOp::Gt,
            Some(Token::Ge(_)) => BinOp::Ge,
            Some(Token::EqEq(_)) => BinOp::Eq,
            Some(Token::NotEq(_)) => BinOp::Ne,
            _ => return Ok(left),
        };
        self.advance();

        let right = self.parse_additive()?;
        Ok(Expr::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Parse additive expressions (`+ -`), left-associative.
    fn parse_additive(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.peek() {
                Some(Token::Plus(_)) => BinOp::Add,
                Some(Token::Minus(_)) => BinOp::Sub,
                _ => break,
            };
            self.advance();

            let right = self.parse_term()?;
            left = Expr::BinOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse terms (`* / %`), left-associative.
    fn parse_term(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_factor()?;

        loop {
            let op = match self.peek() {
                Some(Token::Star(_)) => BinOp::Mul,
                Some(Token::Slash(_)) => BinOp::Div,
                Some(Token::Percent(_)) => BinOp::Mod,
                _ => break,
            };
            self.advance();

            let right = self.parse_factor()?;
            left = Expr::BinOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse a factor: `( expression )`, a var, a call, or a number.
    fn parse_factor(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek() {
            Some(Token::LParen(_)) => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(&Token::RParen(0))?;
                Ok(expr)
            }
            Some(Token::Number(value, _)) => {
                let value = *value;
                self.advance();
                Ok(Expr::Number(value))
            }
            Some(Token::Ident(_, _)) => {
                if matches!(self.peek_ahead(1), Some(Token::LParen(_))) {
                    self.parse_call()
                } else {
                    self.parse_var()
                }
            }
            _ => Err(self.error_here()),
        }
    }

    /// Parse `var : ID | ID [ expression ]`.
    fn parse_var(&mut self) -> Result<Expr, SyntaxError> {
        let name = self.expect_identifier()?;

        if self.match_token(&Token::LBracket(0)) {
            let index = self.parse_expression()?;
            self.expect(&Token::RBracket(0))?;
            return Ok(Expr::ArrayRef {
                name,
                index: Box::new(index),
            });
        }

        Ok(Expr::Var(name))
    }

    /// Parse `call : ID ( args )`.
    fn parse_call(&mut self) -> Result<Expr, SyntaxError> {
        let name = self.expect_identifier()?;
        self.expect(&Token::LParen(0))?;

        let mut args = Vec::new();
        if !self.check(&Token::RParen(0)) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(&Token::Comma(0)) {
                    break;
                }
            }
        }

        self.expect(&Token::RParen(0))?;
        Ok(Expr::Call { name, args })
    }

    // ===== Helper methods =====

    fn is_type_keyword(&self) -> bool {
        matches!(
            self.peek(),
            Some(Token::Int(_))
                | Some(Token::Float(_))
                | Some(Token::Char(_))
                | Some(Token::Void(_))
        )
    }

    /// Consume the next token if its kind matches `sample` (lines are
    /// ignored in the comparison).
    fn match_token(&mut self, sample: &Token) -> bool {
        if self.check(sample) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, sample: &Token) -> bool {
        match self.peek() {
            Some(token) => {
                std::mem::discriminant(token) == std::mem::discriminant(sample)
            }
            None => false,
        }
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    /// The error for the current position: unexpected token, or end of
    /// input when the stream is exhausted.
    fn error_here(&self) -> SyntaxError {
        match self.peek() {
            Some(token) => SyntaxError::unexpected(token),
            None => SyntaxError::end_of_input(),
        }
    }

    fn expect(&mut self, sample: &Token) -> Result<(), SyntaxError> {
        if self.check(sample) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here())
        }
    }

    fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        if let Some(Token::Ident(name, _)) = self.peek() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.error_here())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn parse(source: &str) -> Result<(Program, SymbolTable), SyntaxError> {
        let (tokens, lex_errors) = Lexer::scan(source);
        assert!(lex_errors.is_empty(), "unexpected lex errors: {:?}", lex_errors);
        let mut parser = Parser::new(tokens);
        let program = parser.parse_program()?;
        Ok((program, parser.into_symbols()))
    }

    fn parse_err(source: &str) -> SyntaxError {
        let (tokens, _) = Lexer::scan(source);
        let mut parser = Parser::new(tokens);
        parser
            .parse_program()
            .expect_err("expected a syntax error")
    }

    #[test]
    fn test_parse_simple_function() {
        let source = "int main() { return 0; }";
        let (program, symbols) = parse(source).unwrap();

        assert_eq!(program.declarations.len(), 1);
        match &program.declarations[0] {
            Decl::Fun {
                return_type,
                name,
                params,
                body,
            } => {
                assert_eq!(*return_type, TypeSpec::Int);
                assert_eq!(name, "main");
                assert!(params.is_empty());
                assert_eq!(body.statements.len(), 1);
            }
            other => panic!("expected function declaration, got {:?}", other),
        }
        assert!(matches!(
            symbols.get("main"),
            Some(Symbol {
                kind: SymbolKind::Function { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_empty_input_parses_to_empty_program() {
        let (program, symbols) = parse("").unwrap();
        assert!(program.declarations.is_empty());
        assert!(symbols.is_empty());
    }

    #[test]
    fn test_precedence_mul_binds_tighter() {
        let (program, _) = parse("void f() { x = 2 + 3 * 4; }").unwrap();

        let body = match &program.declarations[0] {
            Decl::Fun { body, .. } => body,
            _ => unreachable!(),
        };
        let expr = match &body.statements[0] {
            Stmt::Expr(Some(expr)) => expr,
            other => panic!("expected expression statement, got {:?}", other),
        };
        let value = match expr {
            Expr::Assign { value, .. } => value,
            other => panic!("expected assignment, got {:?}", other),
        };
        match value.as_ref() {
            Expr::BinOp { op, left, right } => {
                assert_eq!(*op, BinOp::Add);
                assert!(matches!(
                    left.as_ref(),
                    Expr::Number(NumberValue::Int(2))
                ));
                assert!(matches!(
                    right.as_ref(),
                    Expr::BinOp { op: BinOp::Mul, .. }
                ));
            }
            other => panic!("expected binop, got {:?}", other),
        }
    }

    #[test]
    fn test_additive_left_associative() {
        let (program, _) = parse("void f() { x = 1 - 2 - 3; }").unwrap();

        let body = match &program.declarations[0] {
            Decl::Fun { body, .. } => body,
            _ => unreachable!(),
        };
        let value = match &body.statements[0] {
            Stmt::Expr(Some(Expr::Assign { value, .. })) => value,
            other => panic!("unexpected statement {:?}", other),
        };
        // (1 - 2) - 3
        match value.as_ref() {
            Expr::BinOp { op, left, right } => {
                assert_eq!(*op, BinOp::Sub);
                assert!(matches!(
                    left.as_ref(),
                    Expr::BinOp { op: BinOp::Sub, .. }
                ));
                assert!(matches!(
                    right.as_ref(),
                    Expr::Number(NumberValue::Int(3))
                ));
            }
            other => panic!("expected binop, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_right_associative() {
        let (program, _) = parse("void f() { x = y = 5; }").unwrap();

        let body = match &program.declarations[0] {
            Decl::Fun { body, .. } => body,
            _ => unreachable!(),
        };
        match &body.statements[0] {
            Stmt::Expr(Some(Expr::Assign { target, value })) => {
                assert!(matches!(target.as_ref(), Expr::Var(n) if n == "x"));
                assert!(matches!(value.as_ref(), Expr::Assign { .. }));
            }
            other => panic!("unexpected statement {:?}", other),
        }
    }

    #[test]
    fn test_chained_relop_rejected() {
        let err = parse_err("void f() { x = a < b < c; }");
        assert_eq!(
            err.message,
            "syntax error at token LT ('<') at line 1"
        );
    }

    #[test]
    fn test_parenthesized_assignment_target_rejected() {
        let err = parse_err("void f() { (x) = 5; }");
        assert_eq!(
            err.message,
            "syntax error at token ASSIGN ('=') at line 1"
        );
    }

    #[test]
    fn test_dangling_else_binds_to_nearest_if() {
        let source = "void f() { if (a) if (b) x = 1; else x = 2; }";
        let (program, _) = parse(source).unwrap();

        let body = match &program.declarations[0] {
            Decl::Fun { body, .. } => body,
            _ => unreachable!(),
        };
        match &body.statements[0] {
            Stmt::If { then_body, .. } => {
                assert!(matches!(then_body.as_ref(), Stmt::IfElse { .. }));
            }
            other => panic!("expected outer if without else, got {:?}", other),
        }
    }

    #[test]
    fn test_array_declaration_records_symbol() {
        let (_, symbols) = parse("int arr[10];").unwrap();

        match symbols.get("arr") {
            Some(Symbol {
                ty: TypeSpec::Int,
                kind: SymbolKind::Array { size: 10 },
            }) => {}
            other => panic!("unexpected symbol {:?}", other),
        }
    }

    #[test]
    fn test_zero_array_size_rejected() {
        let (tokens, _) = Lexer::scan("int arr[0];");
        let mut parser = Parser::new(tokens);
        let err = parser.parse_program().expect_err("expected error");

        assert_eq!(
            err.message,
            "array size must be a positive integer at line 1"
        );
        assert!(parser.symbols().get("arr").is_none());
    }

    #[test]
    fn test_float_array_size_rejected() {
        let err = parse_err("int arr[2.5];");
        assert_eq!(
            err.message,
            "array size must be a positive integer at line 1"
        );
    }

    #[test]
    fn test_redeclaration_overwrites_symbol() {
        let (_, symbols) = parse("int x; float x;").unwrap();

        match symbols.get("x") {
            Some(Symbol {
                ty: TypeSpec::Float,
                kind: SymbolKind::Variable,
            }) => {}
            other => panic!("unexpected symbol {:?}", other),
        }
    }

    #[test]
    fn test_void_params_and_array_param() {
        let (program, symbols) =
            parse("int sum(int values[], int n) { return 0; } void g(void) { }")
                .unwrap();

        match &program.declarations[0] {
            Decl::Fun { params, .. } => {
                assert_eq!(params.len(), 2);
                assert!(matches!(params[0], Param::Array { .. }));
                assert!(matches!(params[1], Param::Scalar { .. }));
            }
            _ => unreachable!(),
        }
        match &program.declarations[1] {
            Decl::Fun { params, .. } => assert!(params.is_empty()),
            _ => unreachable!(),
        }
        assert!(matches!(
            symbols.get("values"),
            Some(Symbol {
                kind: SymbolKind::Param,
                ..
            })
        ));
    }

    #[test]
    fn test_locals_must_precede_statements() {
        let err = parse_err("void f() { x = 1; int y; }");
        assert_eq!(
            err.message,
            "syntax error at token INT ('int') at line 1"
        );
    }

    #[test]
    fn test_unary_minus_not_in_grammar() {
        let err = parse_err("void f() { x = -5; }");
        assert_eq!(
            err.message,
            "syntax error at token MINUS ('-') at line 1"
        );
    }

    #[test]
    fn test_logical_and_not_in_grammar() {
        let err = parse_err("void f() { if (a && b) x = 1; }");
        assert_eq!(
            err.message,
            "syntax error at token AND ('&&') at line 1"
        );
    }

    #[test]
    fn test_string_literal_not_in_grammar() {
        let err = parse_err("void f() { x = \"hello\"; }");
        assert_eq!(
            err.message,
            "syntax error at token STRING ('hello') at line 1"
        );
    }

    #[test]
    fn test_end_of_input_error() {
        let err = parse_err("int x");
        assert_eq!(err.message, "syntax error at end of input");
    }

    #[test]
    fn test_call_with_arguments() {
        let (program, _) =
            parse("void f() { x = max(a, b + 1); }").unwrap();

        let body = match &program.declarations[0] {
            Decl::Fun { body, .. } => body,
            _ => unreachable!(),
        };
        let value = match &body.statements[0] {
            Stmt::Expr(Some(Expr::Assign { value, .. })) => value,
            other => panic!("unexpected statement {:?}", other),
        };
        match value.as_ref() {
            Expr::Call { name, args } => {
                assert_eq!(name, "max");
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_array_ref_assignment() {
        let (program, _) = parse("void f() { a[i + 1] = 5; }").unwrap();

        let body = match &program.declarations[0] {
            Decl::Fun { body, .. } => body,
            _ => unreachable!(),
        };
        match &body.statements[0] {
            Stmt::Expr(Some(Expr::Assign { target, .. })) => {
                assert!(matches!(
                    target.as_ref(),
                    Expr::ArrayRef { name, .. } if name == "a"
                ));
            }
            other => panic!("unexpected statement {:?}", other),
        }
    }

    #[test]
    fn test_return_forms_and_empty_statement() {
        let (program, _) =
            parse("void f() { ; return; } int g() { return 1; }").unwrap();

        let body = match &program.declarations[0] {
            Decl::Fun { body, .. } => body,
            _ => unreachable!(),
        };
        assert!(matches!(body.statements[0], Stmt::Expr(None)));
        assert!(matches!(body.statements[1], Stmt::Return(None)));
    }

    #[test]
    fn test_while_with_nested_compound() {
        let source = "void f() { while (n > 0) { n = n - 1; } }";
        let (program, _) = parse(source).unwrap();

        let body = match &program.declarations[0] {
            Decl::Fun { body, .. } => body,
            _ => unreachable!(),
        };
        match &body.statements[0] {
            Stmt::While { body, .. } => {
                assert!(matches!(body.as_ref(), Stmt::Compound(_)));
            }
            other => panic!("expected while, got {:?}", other),
        }
    }
}
