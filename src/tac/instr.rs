//! Three-address code instructions
//!
//! A compilation lowers to an ordered `Vec<Instr>`; each instruction
//! renders to one line of the classic textual form through its `Display`
//! impl (`t0 = a + b`, `ifnot t0 goto L1`, …).
//!
//! Operands are reference strings produced by the generator: declared
//! names, temporaries (`t0, t1, …`), literal text, or an indexed form
//! (`a[t2]`). Labels are `L0, L1, …`.

use crate::parser::ast::{BinOp, TypeSpec};
use std::fmt;

/// One three-address instruction.
///
/// `ParamDecl` and `ParamPush` render identically — the mnemonic is
/// overloaded between declaring a function parameter and passing a call
/// argument — but they are distinct kinds and must not be merged.
#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
    /// `declare NAME as TYPE`
    Declare { name: String, ty: TypeSpec },
    /// `declare NAME[SIZE] as TYPE`
    DeclareArray {
        name: String,
        size: u64,
        ty: TypeSpec,
    },
    /// `function NAME:`
    Function { name: String },
    /// `param NAME` — a function-parameter declaration
    ParamDecl { name: String },
    /// `param ARG` — a call argument push, in evaluation order
    ParamPush { arg: String },
    /// `DEST = SRC`
    Copy { dest: String, src: String },
    /// `DEST = LEFT op RIGHT`
    Binary {
        dest: String,
        left: String,
        op: BinOp,
        right: String,
    },
    /// `ifnot COND goto LABEL`
    IfNot { cond: String, label: String },
    /// `goto LABEL`
    Goto { label: String },
    /// `LABEL:`
    Label { name: String },
    /// `DEST = call NAME ARGC`
    Call {
        dest: String,
        func: String,
        argc: usize,
    },
    /// `return` or `return VALUE`
    Return { value: Option<String> },
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Declare { name, ty } => {
                write!(f, "declare {} as {}", name, ty)
            }
            Instr::DeclareArray { name, size, ty } => {
                write!(f, "declare {}[{}] as {}", name, size, ty)
            }
            Instr::Function { name } => write!(f, "function {}:", name),
            Instr::ParamDecl { name } => write!(f, "param {}", name),
            Instr::ParamPush { arg } => write!(f, "param {}", arg),
            Instr::Copy { dest, src } => write!(f, "{} = {}", dest, src),
            Instr::Binary {
                dest,
                left,
                op,
                right,
            } => write!(f, "{} = {} {} {}", dest, left, op, right),
            Instr::IfNot { cond, label } => {
                write!(f, "ifnot {} goto {}", cond, label)
            }
            Instr::Goto { label } => write!(f, "goto {}", label),
            Instr::Label { name } => write!(f, "{}:", name),
            Instr::Call { dest, func, argc } => {
                write!(f, "{} = call {} {}", dest, func, argc)
            }
            Instr::Return { value: Some(v) } => write!(f, "return {}", v),
            Instr::Return { value: None } => write!(f, "return"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        let cases = [
            (
                Instr::Declare {
                    name: "x".into(),
                    ty: TypeSpec::Int,
                },
                "declare x as int",
            ),
            (
                Instr::DeclareArray {
                    name: "a".into(),
                    size: 10,
                    ty: TypeSpec::Float,
                },
                "declare a[10] as float",
            ),
            (
                Instr::Function {
                    name: "main".into(),
                },
                "function main:",
            ),
            (Instr::ParamDecl { name: "n".into() }, "param n"),
            (Instr::ParamPush { arg: "t0".into() }, "param t0"),
            (
                Instr::Copy {
                    dest: "x".into(),
                    src: "t0".into(),
                },
                "x = t0",
            ),
            (
                Instr::Binary {
                    dest: "t1".into(),
                    left: "x".into(),
                    op: BinOp::Mul,
                    right: "5".into(),
                },
                "t1 = x * 5",
            ),
            (
                Instr::IfNot {
                    cond: "t1".into(),
                    label: "L0".into(),
                },
                "ifnot t1 goto L0",
            ),
            (Instr::Goto { label: "L1".into() }, "goto L1"),
            (Instr::Label { name: "L1".into() }, "L1:"),
            (
                Instr::Call {
                    dest: "t2".into(),
                    func: "max".into(),
                    argc: 2,
                },
                "t2 = call max 2",
            ),
            (Instr::Return { value: None }, "return"),
            (
                Instr::Return {
                    value: Some("t2".into()),
                },
                "return t2",
            ),
        ];

        for (instr, expected) in cases {
            assert_eq!(instr.to_string(), expected);
        }
    }

    #[test]
    fn test_param_kinds_stay_distinct() {
        let decl = Instr::ParamDecl { name: "x".into() };
        let push = Instr::ParamPush { arg: "x".into() };

        assert_eq!(decl.to_string(), push.to_string());
        assert_ne!(decl, push);
    }
}
