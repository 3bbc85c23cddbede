//! Expression parsing implementation
//!
//! Expressions are parsed with one method per precedence level, lowest first.
//! Every binary level is left-associative: the loop folds the accumulated
//! left operand with each new right operand while the current token belongs
//! to that level's operator set.
//!
//! # Grammar
//!
//! ```text
//! expression     ::= or
//! or             ::= and ( "||" and )*
//! and            ::= not ( "&&" not )*
//! not            ::= "!" comparison | comparison
//! comparison     ::= additive ( ( "==" | "<" | ">" | "<=" | ">=" ) additive )*
//! additive       ::= multiplicative ( ( "+" | "-" ) multiplicative )*
//! multiplicative ::= unary ( ( "*" | "/" ) unary )*
//! unary          ::= ( "+" | "-" ) primary | primary
//! primary        ::= number | string | boolean | identifier
//!                  | identifier "(" arguments ")" | "(" expression ")"
//! arguments      ::= ( expression ( "," expression )* )?
//! ```
//!
//! `!` binds looser than comparison, so `!a == b` reads as `!(a == b)`.
//! Neither `!` nor the sign operators nest directly: `!!a` and `--a` are
//! rejected, while `-(-a)` is accepted through the parenthesized primary.
//!
//! Each method leaves the depth of the tree it returned in
//! `Parser::expression_depth`, so an operator chain longer than
//! [`MAX_EXPRESSION_DEPTH`] fails here rather than overflowing the stack of
//! whatever walks the tree later. Groups and argument lists count towards
//! [`MAX_NESTING`].
//!
//! [`MAX_EXPRESSION_DEPTH`]: crate::parser::parse::MAX_EXPRESSION_DEPTH
//! [`MAX_NESTING`]: crate::parser::parse::MAX_NESTING
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::error::CompileResult;
use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse an expression
    pub(crate) fn parse_expression(&mut self) -> CompileResult<Expression> {
        self.enter()?;
        let expression = self.parse_or()?;
        self.leave();
        Ok(expression)
    }

    fn parse_or(&mut self) -> CompileResult<Expression> {
        let mut left = self.parse_and()?;
        let mut depth = self.expression_depth;

        while self.match_token(TokenKind::LogicalOr) {
            let right = self.parse_and()?;
            depth = self.combine_depth(depth)?;
            left = Expression::Or {
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.expression_depth = depth;
        Ok(left)
    }

    fn parse_and(&mut self) -> CompileResult<Expression> {
        let mut left = self.parse_not()?;
        let mut depth = self.expression_depth;

        while self.match_token(TokenKind::LogicalAnd) {
            let right = self.parse_not()?;
            depth = self.combine_depth(depth)?;
            left = Expression::And {
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.expression_depth = depth;
        Ok(left)
    }

    fn parse_not(&mut self) -> CompileResult<Expression> {
        if self.match_token(TokenKind::LogicalNot) {
            let expression = self.parse_comparison()?;
            self.expression_depth = self.node_depth(self.expression_depth)?;
            return Ok(Expression::Not {
                expression: Box::new(expression),
            });
        }

        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> CompileResult<Expression> {
        let mut left = self.parse_additive()?;
        let mut depth = self.expression_depth;

        loop {
            let operator = match self.peek().kind {
                TokenKind::Equality => ComparisonOp::Equal,
                TokenKind::LessThan => ComparisonOp::Less,
                TokenKind::GreaterThan => ComparisonOp::Greater,
                TokenKind::LessThanOrEqual => ComparisonOp::LessEqual,
                TokenKind::GreaterThanOrEqual => ComparisonOp::GreaterEqual,
                _ => break,
            };
            self.advance();

            let right = self.parse_additive()?;
            depth = self.combine_depth(depth)?;
            left = Expression::Comparison {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.expression_depth = depth;
        Ok(left)
    }

    fn parse_additive(&mut self) -> CompileResult<Expression> {
        let mut left = self.parse_multiplicative()?;
        let mut depth = self.expression_depth;

        loop {
            let operator = match self.peek().kind {
                TokenKind::Plus => AdditiveOp::Add,
                TokenKind::Minus => AdditiveOp::Subtract,
                _ => break,
            };
            self.advance();

            let right = self.parse_multiplicative()?;
            depth = self.combine_depth(depth)?;
            left = Expression::Additive {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.expression_depth = depth;
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> CompileResult<Expression> {
        let mut left = self.parse_unary()?;
        let mut depth = self.expression_depth;

        loop {
            let operator = match self.peek().kind {
                TokenKind::Multiply => MultiplicativeOp::Multiply,
                TokenKind::Divide => MultiplicativeOp::Divide,
                _ => break,
            };
            self.advance();

            let right = self.parse_unary()?;
            depth = self.combine_depth(depth)?;
            left = Expression::Multiplicative {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.expression_depth = depth;
        Ok(left)
    }

    fn parse_unary(&mut self) -> CompileResult<Expression> {
        let operator = match self.peek().kind {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Minus,
            _ => return self.parse_primary(),
        };
        self.advance();

        let expression = self.parse_primary()?;
        self.expression_depth = self.node_depth(self.expression_depth)?;
        Ok(Expression::Unary {
            operator,
            expression: Box::new(expression),
        })
    }

    fn parse_primary(&mut self) -> CompileResult<Expression> {
        self.expression_depth = 1;
        match self.peek().kind {
            TokenKind::Number => Ok(Expression::NumberLiteral(self.advance().text.clone())),
            TokenKind::String => Ok(Expression::StringLiteral(self.advance().text.clone())),
            TokenKind::Boolean => {
                let value = self.advance().text == "true";
                Ok(Expression::BooleanLiteral(value))
            }
            TokenKind::Identifier => {
                let name = self.advance().text.clone();
                if self.match_token(TokenKind::LeftParen) {
                    Ok(Expression::FunctionCall(self.parse_call_arguments(name)?))
                } else {
                    Ok(Expression::Identifier { name })
                }
            }
            TokenKind::LeftParen => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect_token(TokenKind::RightParen, "')' after the grouped expression")?;
                Ok(expression)
            }
            _ => Err(self.mismatch("an expression")),
        }
    }

    // ===== Helper methods =====

    /// Parse the argument list of a call whose callee and `(` are already
    /// consumed, up to and including the closing `)`
    pub(crate) fn parse_call_arguments(&mut self, callee: String) -> CompileResult<FunctionCall> {
        let mut args = Vec::new();
        let mut depth = 0;

        if !self.match_token(TokenKind::RightParen) {
            loop {
                args.push(self.parse_expression()?);
                depth = depth.max(self.expression_depth);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
            self.expect_token(
                TokenKind::RightParen,
                &format!("')' after the arguments to '{}'", callee),
            )?;
        }

        self.expression_depth = self.node_depth(depth)?;
        Ok(FunctionCall { callee, args })
    }
}
