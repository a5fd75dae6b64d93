//! Lexer (tokenizer) for mini-C source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Tokens can be pulled one at a time ([`Lexer::next_token`], also
//! available through the [`Iterator`] impl) or collected eagerly with
//! [`Lexer::tokenize`].
//!
//! Lexing never aborts: an unrecognized character is recorded as a
//! [`LexError`] bound to the current line, exactly one character is skipped,
//! and scanning resumes.

use super::ast::NumberValue;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries the 1-based source line it starts on so that parse
/// errors can report an accurate line without a separate token→line table.
/// `++` and `--` are lexed but consumed by no grammar rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Number(NumberValue, usize),
    Str(String, usize),

    // Identifiers
    Ident(String, usize),

    // Keywords
    Int(usize),
    Float(usize),
    Char(usize),
    Void(usize),
    If(usize),
    Else(usize),
    While(usize),
    For(usize),
    Return(usize),

    // Arithmetic
    Plus(usize),    // +
    Minus(usize),   // -
    Star(usize),    // *
    Slash(usize),   // /
    Percent(usize), // %

    // Comparison
    EqEq(usize),  // ==
    NotEq(usize), // !=
    Lt(usize),    // <
    Le(usize),    // <=
    Gt(usize),    // >
    Ge(usize),    // >=

    // Logical (tokenized only; no grammar production consumes them)
    AndAnd(usize), // &&
    OrOr(usize),   // ||
    Bang(usize),   // !

    // Assignment
    Assign(usize), // =

    // Increment/Decrement (tokenized only)
    PlusPlus(usize),   // ++
    MinusMinus(usize), // --

    // Punctuation
    LParen(usize),    // (
    RParen(usize),    // )
    LBrace(usize),    // {
    RBrace(usize),    // }
    LBracket(usize),  // [
    RBracket(usize),  // ]
    Semicolon(usize), // ;
    Comma(usize),     // ,
}

impl Token {
    /// Returns the source line where this token appears.
    pub fn line(&self) -> usize {
        match self {
            Token::Number(_, line)
            | Token::Str(_, line)
            | Token::Ident(_, line)
            | Token::Int(line)
            | Token::Float(line)
            | Token::Char(line)
            | Token::Void(line)
            | Token::If(line)
            | Token::Else(line)
            | Token::While(line)
            | Token::For(line)
            | Token::Return(line)
            | Token::Plus(line)
            | Token::Minus(line)
            | Token::Star(line)
            | Token::Slash(line)
            | Token::Percent(line)
            | Token::EqEq(line)
            | Token::NotEq(line)
            | Token::Lt(line)
            | Token::Le(line)
            | Token::Gt(line)
            | Token::Ge(line)
            | Token::AndAnd(line)
            | Token::OrOr(line)
            | Token::Bang(line)
            | Token::Assign(line)
            | Token::PlusPlus(line)
            | Token::MinusMinus(line)
            | Token::LParen(line)
            | Token::RParen(line)
            | Token::LBrace(line)
            | Token::RBrace(line)
            | Token::LBracket(line)
            | Token::RBracket(line)
            | Token::Semicolon(line)
            | Token::Comma(line) => *line,
        }
    }

    /// The classic uppercase kind name, as used in diagnostics and the
    /// token listing: `ID`, `NUMBER`, `STRING`, `INT`, `PLUS`, `ASSIGN`, …
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Number(_, _) => "NUMBER",
            Token::Str(_, _) => "STRING",
            Token::Ident(_, _) => "ID",
            Token::Int(_) => "INT",
            Token::Float(_) => "FLOAT",
            Token::Char(_) => "CHAR",
            Token::Void(_) => "VOID",
            Token::If(_) => "IF",
            Token::Else(_) => "ELSE",
            Token::While(_) => "WHILE",
            Token::For(_) => "FOR",
            Token::Return(_) => "RETURN",
            Token::Plus(_) => "PLUS",
            Token::Minus(_) => "MINUS",
            Token::Star(_) => "TIMES",
            Token::Slash(_) => "DIVIDE",
            Token::Percent(_) => "MODULO",
            Token::EqEq(_) => "EQ",
            Token::NotEq(_) => "NE",
            Token::Lt(_) => "LT",
            Token::Le(_) => "LE",
            Token::Gt(_) => "GT",
            Token::Ge(_) => "GE",
            Token::AndAnd(_) => "AND",
            Token::OrOr(_) => "OR",
            Token::Bang(_) => "NOT",
            Token::Assign(_) => "ASSIGN",
            Token::PlusPlus(_) => "PLUSPLUS",
            Token::MinusMinus(_) => "MINUSMINUS",
            Token::LParen(_) => "LPAREN",
            Token::RParen(_) => "RPAREN",
            Token::LBrace(_) => "LBRACE",
            Token::RBrace(_) => "RBRACE",
            Token::LBracket(_) => "LBRACKET",
            Token::RBracket(_) => "RBRACKET",
            Token::Semicolon(_) => "SEMI",
            Token::Comma(_) => "COMMA",
        }
    }

    /// The token's lexeme (literal values rendered back to text).
    pub fn text(&self) -> String {
        match self {
            Token::Number(value, _) => value.to_string(),
            Token::Str(s, _) => s.clone(),
            Token::Ident(name, _) => name.clone(),
            Token::Int(_) => "int".to_string(),
            Token::Float(_) => "float".to_string(),
            Token::Char(_) => "char".to_string(),
            Token::Void(_) => "void".to_string(),
            Token::If(_) => "if".to_string(),
            Token::Else(_) => "else".to_string(),
            Token::While(_) => "while".to_string(),
            Token::For(_) => "for".to_string(),
            Token::Return(_) => "return".to_string(),
            Token::Plus(_) => "+".to_string(),
            Token::Minus(_) => "-".to_string(),
            Token::Star(_) => "*".to_string(),
            Token::Slash(_) => "/".to_string(),
            Token::Percent(_) => "%".to_string(),
            Token::EqEq(_) => "==".to_string(),
            Token::NotEq(_) => "!=".to_string(),
            Token::Lt(_) => "<".to_string(),
            Token::Le(_) => "<=".to_string(),
            Token::Gt(_) => ">".to_string(),
            Token::Ge(_) => ">=".to_string(),
            Token::AndAnd(_) => "&&".to_string(),
            Token::OrOr(_) => "||".to_string(),
            Token::Bang(_) => "!".to_string(),
            Token::Assign(_) => "=".to_string(),
            Token::PlusPlus(_) => "++".to_string(),
            Token::MinusMinus(_) => "--".to_string(),
            Token::LParen(_) => "(".to_string(),
            Token::RParen(_) => ")".to_string(),
            Token::LBrace(_) => "{".to_string(),
            Token::RBrace(_) => "}".to_string(),
            Token::LBracket(_) => "[".to_string(),
            Token::RBracket(_) => "]".to_string(),
            Token::Semicolon(_) => ";".to_string(),
            Token::Comma(_) => ",".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ('{}')", self.kind(), self.text())
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub message: String,
    pub line: usize,
}

impl LexError {
    fn illegal_char(ch: char, line: usize) -> Self {
        LexError {
            message: format!("illegal character '{}'", ch),
            line,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}", self.message, self.line)
    }
}

impl std::error::Error for LexError {}

/// Lexer for mini-C source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    errors: Vec<LexError>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            errors: Vec::new(),
        }
    }

    /// Tokenize the whole source eagerly, returning the token list and any
    /// accumulated errors.
    pub fn scan(input: &str) -> (Vec<Token>, Vec<LexError>) {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize();
        (tokens, lexer.errors)
    }

    /// Tokenize the remaining input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Errors accumulated so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consume the lexer, yielding its accumulated errors.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Pull the next token, skipping whitespace, comments, and (with a
    /// recorded error) unrecognized characters. Returns `None` at end of
    /// input.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace_and_comments();

            let line = self.line;
            let ch = self.peek()?;

            match ch {
                '"' => {
                    if let Some(token) = self.string_literal() {
                        return Some(token);
                    }
                    // No closing quote: the opening quote is reported and
                    // skipped, then scanning resumes.
                }
                '0'..='9' => {
                    if let Some(token) = self.number_literal() {
                        return Some(token);
                    }
                }
                'a'..='z' | 'A'..='Z' | '_' => {
                    return Some(self.identifier_or_keyword());
                }
                _ => {
                    if let Some(token) = self.operator_or_punct(line) {
                        return Some(token);
                    }
                }
            }
        }
    }

    /// Lex a single operator or punctuation token. On an unrecognized
    /// character, records the error, skips it, and returns `None`.
    fn operator_or_punct(&mut self, line: usize) -> Option<Token> {
        let ch = self.advance()?;
        match ch {
            '+' => {
                if self.peek() == Some('+') {
                    self.advance();
                    Some(Token::PlusPlus(line))
                } else {
                    Some(Token::Plus(line))
                }
            }
            '-' => {
                if self.peek() == Some('-') {
                    self.advance();
                    Some(Token::MinusMinus(line))
                } else {
                    Some(Token::Minus(line))
                }
            }
            '*' => Some(Token::Star(line)),
            '/' => Some(Token::Slash(line)),
            '%' => Some(Token::Percent(line)),
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Some(Token::EqEq(line))
                } else {
                    Some(Token::Assign(line))
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Some(Token::NotEq(line))
                } else {
                    Some(Token::Bang(line))
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Some(Token::Le(line))
                } else {
                    Some(Token::Lt(line))
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Some(Token::Ge(line))
                } else {
                    Some(Token::Gt(line))
                }
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    Some(Token::AndAnd(line))
                } else {
                    self.errors.push(LexError::illegal_char('&', line));
                    None
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    Some(Token::OrOr(line))
                } else {
                    self.errors.push(LexError::illegal_char('|', line));
                    None
                }
            }
            '(' => Some(Token::LParen(line)),
            ')' => Some(Token::RParen(line)),
            '{' => Some(Token::LBrace(line)),
            '}' => Some(Token::RBrace(line)),
            '[' => Some(Token::LBracket(line)),
            ']' => Some(Token::RBracket(line)),
            ';' => Some(Token::Semicolon(line)),
            ',' => Some(Token::Comma(line)),
            _ => {
                self.errors.push(LexError::illegal_char(ch, line));
                None
            }
        }
    }

    /// Lex a string literal. The delimiting quotes are stripped; escape
    /// sequences are preserved verbatim (no decoding). If no closing quote
    /// exists, the opening quote is reported as an illegal character and
    /// only it is consumed.
    fn string_literal(&mut self) -> Option<Token> {
        let line = self.line;
        let start = self.position;

        self.advance(); // opening quote
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '"' => {
                    self.advance();
                    return Some(Token::Str(value, line));
                }
                '\\' => {
                    // Keep the backslash and the escaped character as-is.
                    value.push(ch);
                    self.advance();
                    if let Some(escaped) = self.advance() {
                        value.push(escaped);
                    }
                }
                _ => {
                    value.push(ch);
                    self.advance();
                }
            }
        }

        // Unterminated: rewind past everything but the opening quote.
        self.position = start + 1;
        self.line = line;
        self.errors.push(LexError::illegal_char('"', line));
        None
    }

    /// Lex a numeric literal: digits with an optional `.`-delimited
    /// fraction. A `.` not followed by a digit is left in the input.
    fn number_literal(&mut self) -> Option<Token> {
        let line = self.line;
        let mut lexeme = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                lexeme.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let is_float = self.peek() == Some('.')
            && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit());
        if is_float {
            lexeme.push('.');
            self.advance();
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    lexeme.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        if is_float {
            match lexeme.parse::<f64>() {
                Ok(x) => Some(Token::Number(NumberValue::Float(x), line)),
                Err(_) => {
                    self.errors.push(LexError {
                        message: format!("invalid number literal '{}'", lexeme),
                        line,
                    });
                    None
                }
            }
        } else {
            match lexeme.parse::<i64>() {
                Ok(n) => Some(Token::Number(NumberValue::Int(n), line)),
                Err(_) => {
                    self.errors.push(LexError {
                        message: format!("invalid number literal '{}'", lexeme),
                        line,
                    });
                    None
                }
            }
        }
    }

    /// Lex an identifier, reclassifying against the reserved-word table.
    fn identifier_or_keyword(&mut self) -> Token {
        let line = self.line;
        let mut ident = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "int" => Token::Int(line),
            "float" => Token::Float(line),
            "char" => Token::Char(line),
            "void" => Token::Void(line),
            "if" => Token::If(line),
            "else" => Token::Else(line),
            "while" => Token::While(line),
            "for" => Token::For(line),
            "return" => Token::Return(line),
            _ => Token::Ident(ident, line),
        }
    }

    /// Skip whitespace and `//` line comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => {
                    self.skip_line_comment();
                }
                _ => break,
            }
        }
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
