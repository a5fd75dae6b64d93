// AST (Abstract Syntax Tree) definitions for the mini-C front-end

use std::fmt;

/// Type specifiers recognized by the grammar.
///
/// These are syntactic tags only; no type checking is performed on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSpec {
    Int,
    Float,
    Char,
    Void,
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Int => write!(f, "int"),
            TypeSpec::Float => write!(f, "float"),
            TypeSpec::Char => write!(f, "char"),
            TypeSpec::Void => write!(f, "void"),
        }
    }
}

/// A numeric literal value.
///
/// The lexer selects `Float` when the lexeme contains a decimal point and
/// `Int` otherwise, so `5` and `5.0` are distinct values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Int(i64),
    Float(f64),
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberValue::Int(n) => write!(f, "{}", n),
            // Keep a trailing ".0" on whole floats so the rendered value
            // round-trips the int/float distinction.
            NumberValue::Float(x) => {
                if x.fract() == 0.0 && x.is_finite() {
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
        };
        write!(f, "{}", s)
    }
}

/// Function parameter: `type name` or `type name[]`
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Scalar { ty: TypeSpec, name: String },
    Array { ty: TypeSpec, name: String },
}

impl Param {
    pub fn name(&self) -> &str {
        match self {
            Param::Scalar { name, .. } | Param::Array { name, .. } => name,
        }
    }

    pub fn ty(&self) -> TypeSpec {
        match self {
            Param::Scalar { ty, .. } | Param::Array { ty, .. } => *ty,
        }
    }
}

/// Top-level and local declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Var {
        ty: TypeSpec,
        name: String,
    },
    Array {
        ty: TypeSpec,
        name: String,
        size: u64,
    },
    Fun {
        return_type: TypeSpec,
        name: String,
        params: Vec<Param>,
        body: Compound,
    },
}

/// `{ local-declarations statements }`
///
/// The grammar places all local declarations before the first statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    pub locals: Vec<Decl>,
    pub statements: Vec<Stmt>,
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `expr ;` or the empty statement `;`
    Expr(Option<Expr>),
    Compound(Compound),
    If {
        cond: Expr,
        then_body: Box<Stmt>,
    },
    IfElse {
        cond: Expr,
        then_body: Box<Stmt>,
        else_body: Box<Stmt>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    Return(Option<Expr>),
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `var = expr`; the target is always `Var` or `ArrayRef`
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    BinOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Var(String),
    ArrayRef {
        name: String,
        index: Box<Expr>,
    },
    Call {
        name: String,
        args: Vec<Expr>,
    },
    Number(NumberValue),
}

/// Top-level program structure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub declarations: Vec<Decl>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}

/// Render a program as an indented tree, one node tag or leaf per line.
///
/// The matches below are exhaustive over every node variant.
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, "program");
    for decl in &program.declarations {
        render_decl(&mut out, 1, decl);
    }
    out
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str("  ");
    }
    out.push_str(text);
    out.push('\n');
}

fn render_decl(out: &mut String, indent: usize, decl: &Decl) {
    match decl {
        Decl::Var { ty, name } => {
            push_line(out, indent, "var_decl");
            push_line(out, indent + 1, &ty.to_string());
            push_line(out, indent + 1, name);
        }
        Decl::Array { ty, name, size } => {
            push_line(out, indent, "array_decl");
            push_line(out, indent + 1, &ty.to_string());
            push_line(out, indent + 1, name);
            push_line(out, indent + 1, &size.to_string());
        }
        Decl::Fun {
            return_type,
            name,
            params,
            body,
        } => {
            push_line(out, indent, "fun_decl");
            push_line(out, indent + 1, &return_type.to_string());
            push_line(out, indent + 1, name);
            for param in params {
                let tag = match param {
                    Param::Scalar { .. } => "param",
                    Param::Array { .. } => "array_param",
                };
                push_line(out, indent + 1, tag);
                push_line(out, indent + 2, &param.ty().to_string());
                push_line(out, indent + 2, param.name());
            }
            render_compound(out, indent + 1, body);
        }
    }
}

fn render_compound(out: &mut String, indent: usize, compound: &Compound) {
    push_line(out, indent, "compound");
    for local in &compound.locals {
        render_decl(out, indent + 1, local);
    }
    for stmt in &compound.statements {
        render_stmt(out, indent + 1, stmt);
    }
}

fn render_stmt(out: &mut String, indent: usize, stmt: &Stmt) {
    match stmt {
        Stmt::Expr(Some(expr)) => {
            push_line(out, indent, "expr_stmt");
            render_expr(out, indent + 1, expr);
        }
        Stmt::Expr(None) => push_line(out, indent, "empty_stmt"),
        Stmt::Compound(compound) => render_compound(out, indent, compound),
        Stmt::If { cond, then_body } => {
            push_line(out, indent, "if");
            render_expr(out, indent + 1, cond);
            render_stmt(out, indent + 1, then_body);
        }
        Stmt::IfElse {
            cond,
            then_body,
            else_body,
        } => {
            push_line(out, indent, "if_else");
            render_expr(out, indent + 1, cond);
            render_stmt(out, indent + 1, then_body);
            render_stmt(out, indent + 1, else_body);
        }
        Stmt::While { cond, body } => {
            push_line(out, indent, "while");
            render_expr(out, indent + 1, cond);
            render_stmt(out, indent + 1, body);
        }
        Stmt::Return(Some(expr)) => {
            push_line(out, indent, "return");
            render_expr(out, indent + 1, expr);
        }
        Stmt::Return(None) => push_line(out, indent, "return"),
    }
}

fn render_expr(out: &mut String, indent: usize, expr: &Expr) {
    match expr {
        Expr::Assign { target, value } => {
            push_line(out, indent, "assign");
            render_expr(out, indent + 1, target);
            render_expr(out, indent + 1, value);
        }
        Expr::BinOp { op, left, right } => {
            push_line(out, indent, "binop");
            push_line(out, indent + 1, &op.to_string());
            render_expr(out, indent + 1, left);
            render_expr(out, indent + 1, right);
        }
        Expr::Var(name) => {
            push_line(out, indent, "var");
            push_line(out, indent + 1, name);
        }
        Expr::ArrayRef { name, index } => {
            push_line(out, indent, "array_ref");
            push_line(out, indent + 1, name);
            render_expr(out, indent + 1, index);
        }
        Expr::Call { name, args } => {
            push_line(out, indent, "call");
            push_line(out, indent + 1, name);
            for arg in args {
                render_expr(out, indent + 1, arg);
            }
        }
        Expr::Number(value) => {
            push_line(out, indent, "number");
            push_line(out, indent + 1, &value.to_string());
        }
    }
}
