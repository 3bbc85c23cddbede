//! # Introduction
//!
//! Scrawl is a small scripting language compiled to JavaScript. This crate
//! holds the whole front end, a code generator, an execution harness that
//! runs the result under Node.js, and a terminal UI that shows every stage of
//! one compilation side by side. The UI is built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Code generator → JavaScript → Harness
//! ```
//!
//! 1. [`parser`] tokenises the source and builds an AST.
//! 2. [`codegen`] emits indented JavaScript, with `print` and `input`
//!    rendered through built-in templates.
//! 3. [`harness`] wraps the code with a small prelude and runs it in a child
//!    process.
//! 4. [`ui`] is the ratatui pipeline inspector; not part of the stable
//!    library API.
//!
//! ## Language
//!
//! Statements: assignment, calls, `function`, `if` / `elseif` / `else`,
//! `return`. Expressions: `|| && !`, `== < > <= >=`, `+ - * /`, unary sign,
//! calls, parentheses. Literals: numbers, double-quoted strings, booleans.

pub mod codegen;
pub mod error;
pub mod harness;
pub mod parser;
pub mod ui;

pub use error::{CompileError, CompileResult};

use parser::ast::Program;
use parser::lexer::Token;

/// Compile Scrawl source text to JavaScript
pub fn compile(source: &str) -> CompileResult<String> {
    let tokens = parser::lex(source)?;
    let program = parser::parse(tokens)?;
    Ok(codegen::generate_program(&program))
}

/// One compilation with every intermediate artifact kept
#[derive(Debug, Clone)]
pub struct Compilation {
    pub source: String,
    pub tokens: Vec<Token>,
    pub program: Program,
    pub code: String,
}

impl Compilation {
    pub fn new(source: impl Into<String>) -> CompileResult<Self> {
        let source = source.into();
        let tokens = parser::lex(&source)?;
        let program = parser::parse(tokens.clone())?;
        let code = codegen::generate_program(&program);

        Ok(Self {
            source,
            tokens,
            program,
            code,
        })
    }
}
