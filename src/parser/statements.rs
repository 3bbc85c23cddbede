//! Statement parsing implementation
//!
//! This module handles parsing of all Scrawl statement types:
//!
//! - Variable assignments: `x = 1 + 2;`
//! - Function calls: `print("hi");` (no terminator required)
//! - Conditionals: `if (...) { } elseif (...) { } else { }`
//! - Returns: `return x;`
//!
//! # Grammar
//!
//! ```text
//! statement  ::= assignment | call | function_decl | if_stmt | return_stmt
//! assignment ::= identifier "=" expression ";"
//! call       ::= identifier "(" arguments ")"
//! if_stmt    ::= "if" "(" expression ")" block
//!                ( "elseif" "(" expression ")" block )*
//!                ( "else" block )?
//! return_stmt ::= "return" expression ";"
//! block      ::= "{" ( statement | ";" )* "}"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::error::{CompileError, CompileResult};
use crate::parser::ast::*;
use crate::parser::lexer::{Keyword, TokenKind};
use crate::parser::parse::Parser;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> CompileResult<Statement> {
        match self.peek().kind {
            TokenKind::Identifier => {
                if self.check_ahead(1, TokenKind::LeftParen) {
                    let callee = self.advance().text.clone();
                    self.advance(); // consume '('
                    Ok(Statement::FunctionCall(self.parse_call_arguments(callee)?))
                } else {
                    self.parse_variable_assignment()
                }
            }
            TokenKind::Keyword(Keyword::Function) => {
                self.advance();
                self.parse_function_declaration()
            }
            TokenKind::Keyword(Keyword::If) => {
                self.advance();
                self.parse_if_statement()
            }
            TokenKind::Keyword(Keyword::Return) => {
                self.advance();
                self.parse_return_statement()
            }
            TokenKind::Eof => Err(CompileError::UnexpectedEndOfInput {
                expected: "a statement".to_string(),
            }),
            _ => Err(CompileError::UnexpectedToken {
                token: self.peek().to_string(),
            }),
        }
    }

    /// Parse `identifier = expression ;`
    fn parse_variable_assignment(&mut self) -> CompileResult<Statement> {
        let identifier = self.expect_identifier("an identifier")?;
        self.expect_token(
            TokenKind::Assignment,
            &format!("'=' after identifier '{}'", identifier),
        )?;

        let expression = self.parse_expression()?;
        self.expect_token(TokenKind::Semicolon, "';' after the expression")?;

        Ok(Statement::VariableAssignment {
            identifier,
            expression,
        })
    }

    /// Parse `return expression ;` (keyword already consumed)
    fn parse_return_statement(&mut self) -> CompileResult<Statement> {
        let expression = self.parse_expression()?;
        self.expect_token(TokenKind::Semicolon, "';' after the return value")?;

        Ok(Statement::Return { expression })
    }

    /// Parse an `if` chain (keyword already consumed)
    fn parse_if_statement(&mut self) -> CompileResult<Statement> {
        let condition = self.parse_condition("if")?;
        let consequent = self.parse_block("the if condition")?;

        let mut alternate = Vec::new();
        while self.match_token(TokenKind::Keyword(Keyword::ElseIf)) {
            let condition = self.parse_condition("elseif")?;
            let consequent = self.parse_block("the elseif condition")?;
            alternate.push(Alternate::ElseIf {
                condition,
                consequent,
            });
        }

        if self.match_token(TokenKind::Keyword(Keyword::Else)) {
            let body = self.parse_block("the else keyword")?;
            alternate.push(Alternate::Else { body });
        }

        Ok(Statement::If(IfStatement {
            condition,
            consequent,
            alternate,
        }))
    }

    /// Parse `( expression )` after `if` or `elseif`
    fn parse_condition(&mut self, keyword: &str) -> CompileResult<Expression> {
        self.expect_token(
            TokenKind::LeftParen,
            &format!("'(' after the {} keyword", keyword),
        )?;
        let condition = self.parse_expression()?;
        self.expect_token(
            TokenKind::RightParen,
            &format!("')' after the {} condition", keyword),
        )?;
        Ok(condition)
    }

    /// Parse `{ statements }`. Semicolons between statements are skipped.
    pub(crate) fn parse_block(&mut self, after: &str) -> CompileResult<Vec<Statement>> {
        self.expect_token(TokenKind::LeftBrace, &format!("'{{' after {}", after))?;
        self.enter()?;

        let mut statements = Vec::new();
        loop {
            if self.match_token(TokenKind::RightBrace) {
                self.leave();
                return Ok(statements);
            }
            if self.match_token(TokenKind::Semicolon) {
                continue;
            }
            if self.is_at_end() {
                return Err(CompileError::UnexpectedEndOfInput {
                    expected: "'}' to close the block".to_string(),
                });
            }
            statements.push(self.parse_statement()?);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CompileError;
    use crate::parser::ast::*;
    use crate::parser::lexer::lex;
    use crate::parser::parse::parse;

    fn parse_source(source: &str) -> Result<Program, CompileError> {
        parse(lex(source)?)
    }

    #[test]
    fn test_parse_assignment() {
        let program = parse_source("x = 1 + 2;").unwrap();

        assert_eq!(
            program.body,
            vec![Statement::VariableAssignment {
                identifier: "x".to_string(),
                expression: Expression::Additive {
                    operator: AdditiveOp::Add,
                    left: Box::new(Expression::number("1")),
                    right: Box::new(Expression::number("2")),
                },
            }]
        );
    }

    #[test]
    fn test_assignment_requires_equals_sign() {
        assert_eq!(
            parse_source("x 5;"),
            Err(CompileError::SyntaxMismatch {
                expected: "'=' after identifier 'x'".to_string(),
                found: "number 5".to_string(),
            })
        );
    }

    #[test]
    fn test_assignment_requires_semicolon() {
        assert!(matches!(
            parse_source("x = 1 y = 2;"),
            Err(CompileError::SyntaxMismatch { .. })
        ));
    }

    #[test]
    fn test_call_statement_needs_no_semicolon() {
        let program = parse_source("print(\"a\") print(\"b\")").unwrap();
        assert_eq!(program.body.len(), 2);
        assert!(program
            .body
            .iter()
            .all(|s| matches!(s, Statement::FunctionCall(call) if call.callee == "print")));
    }

    #[test]
    fn test_parse_if_else() {
        let program = parse_source(r#"if (a > b) { print("hi"); } else { print("lo"); }"#).unwrap();

        match &program.body[0] {
            Statement::If(if_statement) => {
                assert!(matches!(
                    if_statement.condition,
                    Expression::Comparison {
                        operator: ComparisonOp::Greater,
                        ..
                    }
                ));
                assert_eq!(if_statement.consequent.len(), 1);
                assert_eq!(if_statement.alternate.len(), 1);
                match &if_statement.alternate[0] {
                    Alternate::Else { body } => assert_eq!(body.len(), 1),
                    other => panic!("Expected else branch, got {:?}", other),
                }
            }
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_elseif_chain_keeps_order() {
        let source = r#"
            if (n == 1) { a = 1; }
            elseif (n == 2) { a = 2; }
            elseif (n == 3) { a = 3; }
            else { a = 0; }
            done = true;
        "#;
        let program = parse_source(source).unwrap();

        assert_eq!(program.body.len(), 2);
        let Statement::If(if_statement) = &program.body[0] else {
            panic!("Expected if statement");
        };
        assert_eq!(if_statement.alternate.len(), 3);
        assert!(matches!(if_statement.alternate[0], Alternate::ElseIf { .. }));
        assert!(matches!(if_statement.alternate[1], Alternate::ElseIf { .. }));
        assert!(matches!(if_statement.alternate[2], Alternate::Else { .. }));
    }

    #[test]
    fn test_if_without_alternate() {
        let program = parse_source("if (ok) { } x = 1;").unwrap();
        let Statement::If(if_statement) = &program.body[0] else {
            panic!("Expected if statement");
        };
        assert!(if_statement.consequent.is_empty());
        assert!(if_statement.alternate.is_empty());
    }

    #[test]
    fn test_unclosed_block() {
        assert_eq!(
            parse_source("if (a) { x = 1;"),
            Err(CompileError::UnexpectedEndOfInput {
                expected: "'}' to close the block".to_string()
            })
        );
    }

    #[test]
    fn test_return_statement() {
        let program = parse_source("return a * 2; ;").unwrap();
        assert!(matches!(
            &program.body[0],
            Statement::Return {
                expression: Expression::Multiplicative { .. }
            }
        ));
    }

    #[test]
    fn test_invalid_statement_starts() {
        for source in ["else { x = 1; }", "while (a) { }", "5 + 5;", "} x = 1;"] {
            assert!(
                matches!(parse_source(source), Err(CompileError::UnexpectedToken { .. })),
                "expected UnexpectedToken for {:?}",
                source
            );
        }
    }
}
