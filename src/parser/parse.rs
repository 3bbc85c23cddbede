//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the token cursor helpers and
//! the [`parse`] entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and the program loop
//! - `statements`: assignments, calls, `if` chains, `return`, blocks
//! - `declarations`: function declarations
//! - `expressions`: the six-level precedence ladder and primaries
//!
//! # Token cursor
//!
//! The parser owns the whole token vector and walks it with an index. Every
//! lookahead is a peek, so a token is never removed and never needs to be put
//! back.

use crate::error::{CompileError, CompileResult};
use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};

/// Parse a token sequence into a [`Program`], consuming the sequence
pub fn parse(tokens: Vec<Token>) -> CompileResult<Program> {
    Parser::new(tokens).parse_program()
}

/// Deepest nesting of parenthesized groups, call arguments and blocks
pub const MAX_NESTING: usize = 100;

/// Deepest expression tree the parser builds. Later stages walk the tree
/// recursively, so a long operator chain is rejected here instead.
pub const MAX_EXPRESSION_DEPTH: usize = 500;

/// Recursive descent parser for Scrawl
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Groups, argument lists and blocks currently open
    pub(crate) nesting: usize,
    /// Depth of the expression most recently returned by a parsing method
    pub(crate) expression_depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            tokens.push(Token::eof());
        }
        Self {
            tokens,
            position: 0,
            nesting: 0,
            expression_depth: 0,
        }
    }

    /// Parse the entire program.
    ///
    /// The loop stops as soon as the current token or the one after it is end
    /// of input, so a single trailing token such as a final `;` is tolerated.
    pub fn parse_program(&mut self) -> CompileResult<Program> {
        let mut program = Program::new();

        while !self.is_at_end() && !self.check_ahead(1, TokenKind::Eof) {
            if self.match_token(TokenKind::Semicolon) {
                continue;
            }
            program.body.push(self.parse_statement()?);
        }

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// A cursor that runs past the end sits on end of input
    pub(crate) fn check_ahead(&self, n: usize, kind: TokenKind) -> bool {
        match self.peek_ahead(n) {
            Some(token) => token.kind == kind,
            None => kind == TokenKind::Eof,
        }
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Move past the current token and return it. The cursor never moves past
    /// end of input.
    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
            &self.tokens[self.position - 1]
        } else {
            self.peek()
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Open one level of nesting
    pub(crate) fn enter(&mut self) -> CompileResult<()> {
        if self.nesting >= MAX_NESTING {
            return Err(CompileError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.nesting += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    /// Depth of a new node whose deepest child has depth `children`
    pub(crate) fn node_depth(&self, children: usize) -> CompileResult<usize> {
        let depth = children + 1;
        if depth > MAX_EXPRESSION_DEPTH {
            return Err(CompileError::NestingTooDeep {
                limit: MAX_EXPRESSION_DEPTH,
            });
        }
        Ok(depth)
    }

    /// Depth of a binary node over a left operand of depth `left` and the
    /// expression just parsed
    pub(crate) fn combine_depth(&self, left: usize) -> CompileResult<usize> {
        self.node_depth(left.max(self.expression_depth))
    }

    /// Error describing why the current token does not fit
    pub(crate) fn mismatch(&self, expected: &str) -> CompileError {
        if self.is_at_end() {
            CompileError::UnexpectedEndOfInput {
                expected: expected.to_string(),
            }
        } else {
            CompileError::SyntaxMismatch {
                expected: expected.to_string(),
                found: self.peek().to_string(),
            }
        }
    }

    pub(crate) fn expect_token(&mut self, kind: TokenKind, expected: &str) -> CompileResult<()> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.mismatch(expected))
        }
    }

    pub(crate) fn expect_identifier(&mut self, expected: &str) -> CompileResult<String> {
        if self.check(TokenKind::Identifier) {
            Ok(self.advance().text.clone())
        } else {
            Err(self.mismatch(expected))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::lex;

    fn parse_source(source: &str) -> CompileResult<Program> {
        parse(lex(source)?)
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(parse_source("").unwrap(), Program::new());
        assert_eq!(parse(Vec::new()).unwrap(), Program::new());
    }

    #[test]
    fn test_semicolons_between_statements_are_skipped() {
        let program = parse_source(";; x = 1;;; y = 2;").unwrap();
        assert_eq!(program.body.len(), 2);
    }

    #[test]
    fn test_single_trailing_token_is_tolerated() {
        let program = parse_source("x = 1; y").unwrap();
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_cursor_stays_on_eof() {
        let mut parser = Parser::new(vec![Token::eof()]);
        assert!(parser.is_at_end());
        assert_eq!(parser.advance().kind, TokenKind::Eof);
        assert_eq!(parser.position, 0);
        assert!(parser.check_ahead(5, TokenKind::Eof));
    }

    #[test]
    fn test_nesting_is_balanced() {
        let mut parser = Parser::new(vec![Token::eof()]);
        for _ in 0..MAX_NESTING {
            parser.enter().unwrap();
        }
        assert_eq!(
            parser.enter(),
            Err(CompileError::NestingTooDeep { limit: MAX_NESTING })
        );
        parser.leave();
        assert!(parser.enter().is_ok());
    }

    #[test]
    fn test_deep_blocks_are_rejected() {
        let depth = MAX_NESTING + 1;
        let source = format!("{}{}", "if (a) { ".repeat(depth), "} ".repeat(depth));
        assert_eq!(
            parse_source(&source),
            Err(CompileError::NestingTooDeep { limit: MAX_NESTING })
        );

        let depth = MAX_NESTING - 1;
        let source = format!("{}{}", "if (a) { ".repeat(depth), "} ".repeat(depth));
        assert!(parse_source(&source).is_ok());
    }

    #[test]
    fn test_missing_token_at_end_reports_end_of_input() {
        let mut parser = Parser::new(vec![Token::eof()]);
        assert_eq!(
            parser.expect_token(TokenKind::Semicolon, "';'"),
            Err(CompileError::UnexpectedEndOfInput {
                expected: "';'".to_string()
            })
        );
    }
}
