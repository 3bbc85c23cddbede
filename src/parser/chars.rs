//! Character classifiers used by the lexer
//!
//! Pure predicates over a single character or a short lookahead slice.

pub const DOUBLE_QUOTE: char = '"';
pub const DECIMAL_POINT: char = '.';

pub const TRUE: &str = "true";
pub const FALSE: &str = "false";

pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Characters allowed after the first letter of an identifier or keyword
pub fn is_word_char(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}

pub fn is_quote(ch: char) -> bool {
    ch == DOUBLE_QUOTE
}

pub fn is_decimal_point(ch: char) -> bool {
    ch == DECIMAL_POINT
}

pub fn is_paren(ch: char) -> bool {
    matches!(ch, '(' | ')')
}

pub fn is_brace(ch: char) -> bool {
    matches!(ch, '{' | '}')
}

pub fn is_bracket(ch: char) -> bool {
    matches!(ch, '[' | ']')
}

pub fn is_comma(ch: char) -> bool {
    ch == ','
}

pub fn is_semicolon(ch: char) -> bool {
    ch == ';'
}

pub fn is_assignment(ch: char) -> bool {
    ch == '='
}

pub fn is_equality(pair: &str) -> bool {
    pair == "=="
}

pub fn is_angle_bracket(ch: char) -> bool {
    matches!(ch, '<' | '>')
}

pub fn is_math_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

/// `&&`, `||` or a lone `!`
pub fn is_logical_operator(text: &str) -> bool {
    matches!(text, "&&" | "||" | "!")
}

pub fn is_boolean_literal(word: &str) -> bool {
    word == TRUE || word == FALSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_classes() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(!is_letter('_'));
        assert!(!is_letter('é'));
        assert!(is_word_char('7'));
        assert!(is_digit('0'));
        assert!(!is_digit('.'));
    }

    #[test]
    fn test_operator_classes() {
        assert!(is_logical_operator("&&"));
        assert!(is_logical_operator("||"));
        assert!(is_logical_operator("!"));
        assert!(!is_logical_operator("&"));
        assert!(!is_logical_operator("!!"));
        assert!(is_equality("=="));
        assert!(!is_equality("=<"));
        assert!(is_math_operator('/'));
        assert!(!is_math_operator('%'));
    }

    #[test]
    fn test_booleans() {
        assert!(is_boolean_literal("true"));
        assert!(is_boolean_literal("false"));
        assert!(!is_boolean_literal("True"));
        assert!(!is_boolean_literal("truth"));
    }
}
