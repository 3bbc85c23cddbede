//! Function declaration parsing
//!
//! ```text
//! function_decl ::= "function" identifier "(" ( identifier ( "," identifier )* )? ")" block
//! ```

use crate::error::CompileResult;
use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse a function declaration (the `function` keyword is already consumed)
    pub(crate) fn parse_function_declaration(&mut self) -> CompileResult<Statement> {
        let name = self.expect_identifier("a function name")?;
        self.expect_token(TokenKind::LeftParen, "'(' after the function name")?;

        let params = self.parse_parameter_list()?;
        let body = self.parse_block("the parameters")?;

        Ok(Statement::FunctionDeclaration { name, params, body })
    }

    /// Parse parameter names up to and including the closing `)`
    fn parse_parameter_list(&mut self) -> CompileResult<Vec<String>> {
        let mut params = Vec::new();

        if self.match_token(TokenKind::RightParen) {
            return Ok(params);
        }

        loop {
            params.push(self.expect_identifier("a parameter name")?);

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        self.expect_token(TokenKind::RightParen, "')' after the parameters")?;
        Ok(params)
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
    fn test_parse_function_with_params() {
        let program = parse_source("function add(a, b) { return a + b; }").unwrap();

        match &program.body[0] {
            Statement::FunctionDeclaration { name, params, body } => {
                assert_eq!(name, "add");
                assert_eq!(params, &vec!["a".to_string(), "b".to_string()]);
                assert_eq!(body.len(), 1);
                assert!(matches!(body[0], Statement::Return { .. }));
            }
            other => panic!("Expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_function_without_params() {
        let program = parse_source("function hello() { print(\"hello\"); }").unwrap();

        match &program.body[0] {
            Statement::FunctionDeclaration { params, body, .. } => {
                assert!(params.is_empty());
                assert_eq!(body.len(), 1);
            }
            other => panic!("Expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_declarations() {
        let source = "function outer() { function inner(x) { return x; } return inner(1); }";
        let program = parse_source(source).unwrap();

        let Statement::FunctionDeclaration { body, .. } = &program.body[0] else {
            panic!("Expected function declaration");
        };
        assert!(matches!(body[0], Statement::FunctionDeclaration { .. }));
        assert!(matches!(body[1], Statement::Return { .. }));
    }

    #[test]
    fn test_parameter_must_be_identifier() {
        assert_eq!(
            parse_source("function f(1) { }"),
            Err(CompileError::SyntaxMismatch {
                expected: "a parameter name".to_string(),
                found: "number 1".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_function_name() {
        assert!(matches!(
            parse_source("function (a) { }"),
            Err(CompileError::SyntaxMismatch { ref expected, .. }) if expected == "a function name"
        ));
    }

    #[test]
    fn test_missing_body() {
        assert_eq!(
            parse_source("function f(a) return a;"),
            Err(CompileError::SyntaxMismatch {
                expected: "'{' after the parameters".to_string(),
                found: "'return'".to_string(),
            })
        );
    }
}
