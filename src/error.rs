//! Compile error types shared by the lexer and the parser
//!
//! Every stage of the pipeline fails fast: the first [`CompileError`] is
//! returned to the caller and no output is produced for that compilation.
//!
//! There is no `UnknownNode` variant. The syntax tree is a closed set of
//! enums and the code generator matches on them exhaustively, so an unknown
//! node kind is rejected when the crate is built.

/// Errors produced while turning source text into a syntax tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A character outside every recognized class, or a token that cannot
    /// start a statement
    #[error("Unexpected token {token}")]
    UnexpectedToken { token: String },

    /// A string literal reached the end of input before its closing quote
    #[error("Unterminated string literal")]
    UnterminatedString,

    /// A numeric literal with more than one decimal point
    #[error("Invalid number '{text}': more than one decimal point")]
    InvalidNumber { text: String },

    /// The parser needed another token but only end of input was left
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    /// The parser found a token of the wrong kind
    #[error("Expected {expected}, found {found}")]
    SyntaxMismatch { expected: String, found: String },

    /// Groups, blocks or operator chains nested past what the compiler walks
    #[error("Nesting too deep: more than {limit} levels")]
    NestingTooDeep { limit: usize },
}

pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = CompileError::SyntaxMismatch {
            expected: "';' after the expression".to_string(),
            found: "identifier 'y'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Expected ';' after the expression, found identifier 'y'"
        );

        let err = CompileError::InvalidNumber {
            text: "1.2.3".to_string(),
        };
        assert!(err.to_string().contains("1.2.3"));
    }
}
