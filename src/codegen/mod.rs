//! JavaScript code generation
//!
//! This module turns a parsed Scrawl program into JavaScript source text:
//! - [`generate`]: statement emission with block indentation
//! - [`expressions`]: expression emission with host-precedence parentheses
//! - [`stdlib`]: templates for the `print` and `input` built-ins
//!
//! Generation is a pure function of the AST. Every node kind is covered by an
//! exhaustive `match`, so there is no failure path.
//!
//! # Bindings
//!
//! Scrawl has no declaration syntax: the first assignment to a name creates
//! it. The generator keeps one scope per block (program, function body, `if`
//! branch) and emits `let` only when no enclosing scope has bound the name
//! yet. Later assignments become plain `x = ...;`, which JavaScript accepts
//! where a second `let` would be a redeclaration error. Parameters and
//! function names count as bound in the scope that introduces them. A
//! function declared under a name that is already bound is emitted as
//! `name = function name(...) { ... };` for the same reason.
//!
//! # Example
//!
//! ```text
//! function greet(name) {           function greet(name) {
//!   print("hi", name)                console.log("hi", name);
//! }                                }
//! n = input("name: ");             let n = input("name: ");
//! greet(n)                         greet(n);
//! ```

pub mod expressions;
pub mod stdlib;

use crate::parser::ast::*;
use expressions::{emit_arguments, emit_call, emit_expression, mangle};
use rustc_hash::FxHashSet;
use stdlib::StdLib;

const INDENT: &str = "  ";

/// Generate JavaScript for a statement sequence
pub fn generate(statements: &[Statement]) -> String {
    let mut generator = CodeGenerator::new();
    generator.emit_block(statements);
    generator.finish()
}

/// Generate JavaScript for a whole program
pub fn generate_program(program: &Program) -> String {
    generate(&program.body)
}

pub struct CodeGenerator {
    output: String,
    depth: usize,
    stdlib: StdLib,
    /// Names bound in each enclosing block, innermost last
    scopes: Vec<FxHashSet<String>>,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            depth: 0,
            stdlib: StdLib::new(),
            scopes: vec![FxHashSet::default()],
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn emit_block(&mut self, statements: &[Statement]) {
        for statement in statements {
            self.emit_statement(statement);
        }
    }

    /// Emit a block body one level deeper, in a new scope holding `bound`
    fn emit_nested(&mut self, statements: &[Statement], bound: FxHashSet<String>) {
        self.depth += 1;
        self.scopes.push(bound);
        self.emit_block(statements);
        self.scopes.pop();
        self.depth -= 1;
    }

    fn is_bound(&self, name: &str) -> bool {
        self.scopes.iter().any(|scope| scope.contains(name))
    }

    /// Left-hand side for an assignment to `name`, binding it on first use
    fn assignment_target(&mut self, name: String) -> String {
        if self.is_bound(&name) {
            name
        } else {
            let target = format!("let {}", name);
            if let Some(scope) = self.scopes.last_mut() {
                scope.insert(name);
            }
            target
        }
    }

    fn emit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::VariableAssignment {
                identifier,
                expression,
            } => {
                let text = self.assignment(identifier, expression);
                self.line(&text);
            }
            Statement::FunctionCall(call) => {
                let text = match self.stdlib.statement(&call.callee) {
                    Some(template) => template(&emit_arguments(&call.args), None),
                    None => format!("{};", emit_call(call)),
                };
                self.line(&text);
            }
            Statement::FunctionDeclaration { name, params, body } => {
                let name = mangle(name);
                let params: Vec<String> = params.iter().map(|p| mangle(p)).collect();
                let header = format!("function {}({}) {{", name, params.join(", "));

                // A declaration would clash with an existing `let`, so an
                // already bound name is reassigned to a function expression
                if self.is_bound(&name) {
                    self.line(&format!("{} = {}", name, header));
                    self.emit_nested(body, params.into_iter().collect());
                    self.line("};");
                } else {
                    self.line(&header);
                    if let Some(scope) = self.scopes.last_mut() {
                        scope.insert(name);
                    }
                    self.emit_nested(body, params.into_iter().collect());
                    self.line("}");
                }
            }
            Statement::If(if_statement) => self.emit_if(if_statement),
            Statement::Return { expression } => {
                self.line(&format!("return {};", emit_expression(expression)));
            }
        }
    }

    fn assignment(&mut self, identifier: &str, expression: &Expression) -> String {
        let target = self.assignment_target(mangle(identifier));

        if let Expression::FunctionCall(call) = expression {
            if let Some(template) = self.stdlib.binding(&call.callee) {
                return template(&emit_arguments(&call.args), Some(&target));
            }
        }

        format!("{} = {};", target, emit_expression(expression))
    }

    fn emit_if(&mut self, if_statement: &IfStatement) {
        self.line(&format!("if ({}) {{", emit_expression(&if_statement.condition)));
        self.emit_nested(&if_statement.consequent, FxHashSet::default());

        for alternate in &if_statement.alternate {
            match alternate {
                Alternate::ElseIf {
                    condition,
                    consequent,
                } => {
                    self.line(&format!("}} else if ({}) {{", emit_expression(condition)));
                    self.emit_nested(consequent, FxHashSet::default());
                }
                Alternate::Else { body } => {
                    self.line("} else {");
                    self.emit_nested(body, FxHashSet::default());
                }
            }
        }

        self.line("}");
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
