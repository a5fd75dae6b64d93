//! Three-address code generation
//!
//! [`TacGen`] walks a parsed [`Program`] and emits a linear instruction
//! sequence, allocating temporaries (`t0, t1, …`) and labels (`L0, L1, …`)
//! from counters it owns. Construct a fresh generator per compilation;
//! counters are never shared or reused within a run.
//!
//! The generator is total over any syntactically valid AST. It performs no
//! semantic checks: lowering a call to an undeclared function succeeds.

use crate::parser::ast::{Compound, Decl, Expr, Program, Stmt};
use crate::tac::instr::Instr;

/// AST → TAC lowering state for one compilation.
pub struct TacGen {
    instrs: Vec<Instr>,
    temp_count: usize,
    label_count: usize,
}

impl TacGen {
    pub fn new() -> Self {
        Self {
            instrs: Vec::new(),
            temp_count: 0,
            label_count: 0,
        }
    }

    /// Lower a whole program, consuming the generator.
    pub fn lower(mut self, program: &Program) -> Vec<Instr> {
        for decl in &program.declarations {
            self.lower_decl(decl);
        }
        self.instrs
    }

    fn fresh_temp(&mut self) -> String {
        let temp = format!("t{}", self.temp_count);
        self.temp_count += 1;
        temp
    }

    fn fresh_label(&mut self) -> String {
        let label = format!("L{}", self.label_count);
        self.label_count += 1;
        label
    }

    /// Declarations lower to marker instructions; a function's body
    /// follows its header and parameter markers immediately.
    fn lower_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Var { ty, name } => {
                self.instrs.push(Instr::Declare {
                    name: name.clone(),
                    ty: *ty,
                });
            }
            Decl::Array { ty, name, size } => {
                self.instrs.push(Instr::DeclareArray {
                    name: name.clone(),
                    size: *size,
                    ty: *ty,
                });
            }
            Decl::Fun {
                name, params, body, ..
            } => {
                self.instrs.push(Instr::Function { name: name.clone() });
                for param in params {
                    self.instrs.push(Instr::ParamDecl {
                        name: param.name().to_string(),
                    });
                }
                self.lower_compound(body);
            }
        }
    }

    fn lower_compound(&mut self, compound: &Compound) {
        for local in &compound.locals {
            self.lower_decl(local);
        }
        for stmt in &compound.statements {
            self.lower_stmt(stmt);
        }
    }

    fn lower_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(Some(expr)) => {
                // Lowered for effect; the reference is discarded.
                let _ = self.lower_expr(expr);
            }
            Stmt::Expr(None) => {}
            Stmt::Compound(compound) => self.lower_compound(compound),
            Stmt::If { cond, then_body } => {
                let cond_ref = self.lower_expr(cond);
                let l_false = self.fresh_label();
                self.instrs.push(Instr::IfNot {
                    cond: cond_ref,
                    label: l_false.clone(),
                });
                self.lower_stmt(then_body);
                self.instrs.push(Instr::Label { name: l_false });
            }
            Stmt::IfElse {
                cond,
                then_body,
                else_body,
            } => {
                let cond_ref = self.lower_expr(cond);
                let l_false = self.fresh_label();
                let l_end = self.fresh_label();
                self.instrs.push(Instr::IfNot {
                    cond: cond_ref,
                    label: l_false.clone(),
                });
                self.lower_stmt(then_body);
                self.instrs.push(Instr::Goto {
                    label: l_end.clone(),
                });
                self.instrs.push(Instr::Label { name: l_false });
                self.lower_stmt(else_body);
                self.instrs.push(Instr::Label { name: l_end });
            }
            Stmt::While { cond, body } => {
                let l_start = self.fresh_label();
                let l_end = self.fresh_label();
                self.instrs.push(Instr::Label {
                    name: l_start.clone(),
                });
                let cond_ref = self.lower_expr(cond);
                self.instrs.push(Instr::IfNot {
                    cond: cond_ref,
                    label: l_end.clone(),
                });
                self.lower_stmt(body);
                self.instrs.push(Instr::Goto { label: l_start });
                self.instrs.push(Instr::Label { name: l_end });
            }
            Stmt::Return(Some(expr)) => {
                let value = self.lower_expr(expr);
                self.instrs.push(Instr::Return { value: Some(value) });
            }
            Stmt::Return(None) => {
                self.instrs.push(Instr::Return { value: None });
            }
        }
    }

    /// Lower an expression, returning the reference that names its value.
    ///
    /// Operands are evaluated left to right; the instruction order is part
    /// of the contract.
    fn lower_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Number(value) => value.to_string(),
            Expr::Var(name) => name.clone(),
            Expr::ArrayRef { name, index } => {
                // No load is emitted; the bracketed form is itself an
                // addressable reference.
                let index_ref = self.lower_expr(index);
                format!("{}[{}]", name, index_ref)
            }
            Expr::BinOp { op, left, right } => {
                let left_ref = self.lower_expr(left);
                let right_ref = self.lower_expr(right);
                let temp = self.fresh_temp();
                self.instrs.push(Instr::Binary {
                    dest: temp.clone(),
                    left: left_ref,
                    op: *op,
                    right: right_ref,
                });
                temp
            }
            Expr::Assign { target, value } => {
                // Value before target: an indexed target's subscript is
                // computed after the assigned value.
                let value_ref = self.lower_expr(value);
                let target_ref = self.lower_expr(target);
                self.instrs.push(Instr::Copy {
                    dest: target_ref.clone(),
                    src: value_ref,
                });
                target_ref
            }
            Expr::Call { name, args } => {
                let arg_refs: Vec<String> =
                    args.iter().map(|arg| self.lower_expr(arg)).collect();
                for arg_ref in &arg_refs {
                    self.instrs.push(Instr::ParamPush {
                        arg: arg_ref.clone(),
                    });
                }
                let temp = self.fresh_temp();
                self.instrs.push(Instr::Call {
                    dest: temp.clone(),
                    func: name.clone(),
                    argc: arg_refs.len(),
                });
                temp
            }
        }
    }
}

impl Default for TacGen {
    fn default() -> Self {
        Self::new()
    }
}
