//! Scrawl front end
//!
//! This module turns Scrawl source text into an Abstract Syntax Tree (AST):
//! - [`chars`]: character classification predicates
//! - [`scanner`]: character cursor with bounded lookahead
//! - [`lexer`]: tokenization (source text → tokens)
//! - [`parse`]: parsing (tokens → AST), split across `statements`,
//!   `declarations` and `expressions`
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - Statements: assignments, calls, function declarations, `if` / `elseif` /
//!   `else` chains, `return`
//! - Expressions: `|| && !`, comparisons, `+ - * /`, unary sign, calls and
//!   parenthesized groups
//! - Literals: numbers with at most one decimal point, double-quoted strings
//!   without escapes, `true` and `false`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one method per precedence level.
//! No external parser generator dependencies.

pub mod ast;
pub mod chars;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod scanner;
mod statements;

pub use lexer::lex;
pub use parse::parse;
