//! Lexer (tokenizer) for Scrawl source code
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! parser. The sequence always ends with exactly one [`TokenKind::Eof`].
//!
//! Dispatch order matters where character classes overlap: `==` is tested
//! before `=`, and `&&`/`||` before a lone `!`.

use super::chars;
use super::scanner::Scanner;
use crate::error::{CompileError, CompileResult};
use std::fmt;

/// Reserved words. Each one gets its own kind so the parser never compares
/// token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    If,
    Else,
    ElseIf,
    While,
    For,
    Function,
    Return,
}

impl Keyword {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "if" => Some(Keyword::If),
            "else" => Some(Keyword::Else),
            "elseif" => Some(Keyword::ElseIf),
            "while" => Some(Keyword::While),
            "for" => Some(Keyword::For),
            "function" => Some(Keyword::Function),
            "return" => Some(Keyword::Return),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::ElseIf => "elseif",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::Return => "return",
        }
    }
}

/// Token categories produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Semicolon,

    // Literals
    String,
    Number,
    Boolean,

    Identifier,
    Keyword(Keyword),

    Assignment, // =
    Equality,   // ==

    // Comparison
    LessThan,           // <
    GreaterThan,        // >
    LessThanOrEqual,    // <=
    GreaterThanOrEqual, // >=

    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,

    // Logical
    LogicalAnd, // &&
    LogicalOr,  // ||
    LogicalNot, // !

    Eof,
}

impl TokenKind {
    /// Canonical text for kinds whose spelling is fixed
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Keyword(keyword) => keyword.as_str(),
            TokenKind::Assignment => "=",
            TokenKind::Equality => "==",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThanOrEqual => "<=",
            TokenKind::GreaterThanOrEqual => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::LogicalAnd => "&&",
            TokenKind::LogicalOr => "||",
            TokenKind::LogicalNot => "!",
            TokenKind::Eof => "EOF",
            TokenKind::String | TokenKind::Number | TokenKind::Boolean | TokenKind::Identifier => {
                return None;
            }
        };
        Some(text)
    }

    /// Short lowercase name, used by the token dump and the inspector
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "leftParen",
            TokenKind::RightParen => "rightParen",
            TokenKind::LeftBracket => "leftBracket",
            TokenKind::RightBracket => "rightBracket",
            TokenKind::LeftBrace => "leftBrace",
            TokenKind::RightBrace => "rightBrace",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Assignment => "assignment",
            TokenKind::Equality => "equality",
            TokenKind::LessThan => "lessThan",
            TokenKind::GreaterThan => "greaterThan",
            TokenKind::LessThanOrEqual => "lessThanOrEqual",
            TokenKind::GreaterThanOrEqual => "greaterThanOrEqual",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Multiply => "multiply",
            TokenKind::Divide => "divide",
            TokenKind::LogicalAnd => "logicalAnd",
            TokenKind::LogicalOr => "logicalOr",
            TokenKind::LogicalNot => "logicalNot",
            TokenKind::Eof => "EOF",
        }
    }
}

/// A classified lexical unit. Tokens carry no source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Token of a fixed-spelling kind, e.g. `Token::fixed(TokenKind::Comma)`
    pub fn fixed(kind: TokenKind) -> Self {
        Self::new(kind, kind.fixed_text().unwrap_or_default())
    }

    pub fn eof() -> Self {
        Self::fixed(TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::Boolean => write!(f, "boolean {}", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Tokenize a whole source text
pub fn lex(source: &str) -> CompileResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}

/// Lexer for Scrawl source code
pub struct Lexer {
    scanner: Scanner,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> CompileResult<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.scanner.current() {
            if chars::is_whitespace(ch) {
                self.scanner.advance();
                continue;
            }
            tokens.push(self.next_token(ch)?);
        }

        tokens.push(Token::eof());
        Ok(tokens)
    }

    /// Dispatch on the character under the cursor. The scanner always sits on
    /// the first unconsumed character when this is called.
    fn next_token(&mut self, ch: char) -> CompileResult<Token> {
        if chars::is_paren(ch) {
            return Ok(self.single(if ch == '(' {
                TokenKind::LeftParen
            } else {
                TokenKind::RightParen
            }));
        }
        if chars::is_quote(ch) {
            return self.string_literal();
        }
        if chars::is_digit(ch) {
            return self.number_literal();
        }
        if chars::is_letter(ch) {
            return Ok(self.word());
        }
        if chars::is_brace(ch) {
            return Ok(self.single(if ch == '{' {
                TokenKind::LeftBrace
            } else {
                TokenKind::RightBrace
            }));
        }
        if chars::is_comma(ch) {
            return Ok(self.single(TokenKind::Comma));
        }
        if chars::is_equality(&self.scanner.lookahead(2)) {
            self.scanner.advance();
            self.scanner.advance();
            return Ok(Token::fixed(TokenKind::Equality));
        }
        if chars::is_assignment(ch) {
            return Ok(self.single(TokenKind::Assignment));
        }
        if chars::is_angle_bracket(ch) {
            return Ok(self.comparison(ch));
        }
        if chars::is_semicolon(ch) {
            return Ok(self.single(TokenKind::Semicolon));
        }
        if chars::is_math_operator(ch) {
            let kind = match ch {
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Multiply,
                _ => TokenKind::Divide,
            };
            return Ok(self.single(kind));
        }
        if let Some(token) = self.logical_operator() {
            return Ok(token);
        }
        if chars::is_bracket(ch) {
            return Ok(self.single(if ch == '[' {
                TokenKind::LeftBracket
            } else {
                TokenKind::RightBracket
            }));
        }

        Err(CompileError::UnexpectedToken {
            token: format!("'{}'", ch),
        })
    }

    /// Consume one character and produce a fixed token
    fn single(&mut self, kind: TokenKind) -> Token {
        self.scanner.advance();
        Token::fixed(kind)
    }

    /// String literal: verbatim up to the next quote, no escape processing
    fn string_literal(&mut self) -> CompileResult<Token> {
        self.scanner.advance(); // opening quote
        let text = self.scanner.advance_while(|ch| !chars::is_quote(ch));

        if self.scanner.is_at_end() {
            return Err(CompileError::UnterminatedString);
        }
        self.scanner.advance(); // closing quote

        Ok(Token::new(TokenKind::String, text))
    }

    /// Numeric literal kept as raw text. Digits and decimal points are
    /// consumed as one run, which may contain at most one point.
    fn number_literal(&mut self) -> CompileResult<Token> {
        let text = self
            .scanner
            .advance_while(|ch| chars::is_digit(ch) || chars::is_decimal_point(ch));

        if text.chars().filter(|&ch| chars::is_decimal_point(ch)).count() > 1 {
            return Err(CompileError::InvalidNumber { text });
        }

        Ok(Token::new(TokenKind::Number, text))
    }

    /// Identifier, keyword or boolean literal
    fn word(&mut self) -> Token {
        let word = self.scanner.advance_while(chars::is_word_char);

        if chars::is_boolean_literal(&word) {
            Token::new(TokenKind::Boolean, word)
        } else if let Some(keyword) = Keyword::from_word(&word) {
            Token::new(TokenKind::Keyword(keyword), word)
        } else {
            Token::new(TokenKind::Identifier, word)
        }
    }

    /// `<` `>` `<=` `>=`
    fn comparison(&mut self, first: char) -> Token {
        self.scanner.advance();
        let or_equal = self.scanner.current() == Some('=');
        if or_equal {
            self.scanner.advance();
        }

        let kind = match (first, or_equal) {
            ('<', false) => TokenKind::LessThan,
            ('<', true) => TokenKind::LessThanOrEqual,
            (_, false) => TokenKind::GreaterThan,
            (_, true) => TokenKind::GreaterThanOrEqual,
        };
        Token::fixed(kind)
    }

    /// `&&` and `||` are checked before the single-character `!`
    fn logical_operator(&mut self) -> Option<Token> {
        let pair = self.scanner.lookahead(2);
        let kind = if chars::is_logical_operator(&pair) {
            if pair == "&&" {
                TokenKind::LogicalAnd
            } else {
                TokenKind::LogicalOr
            }
        } else if chars::is_logical_operator(&self.scanner.lookahead(1)) {
            TokenKind::LogicalNot
        } else {
            return None;
        };

        for _ in 0..kind.fixed_text().map_or(0, str::len) {
            self.scanner.advance();
        }
        Some(Token::fixed(kind))
    }
}
