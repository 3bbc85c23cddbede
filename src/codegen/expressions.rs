//! Expression emission
//!
//! Scrawl and JavaScript agree on operator meaning but not on precedence:
//! Scrawl's `!` binds looser than comparison, JavaScript's binds tighter than
//! anything binary. Expressions are therefore emitted with explicit
//! precedence bookkeeping instead of mirroring the source text. A child is
//! wrapped in parentheses whenever its JavaScript precedence is lower than
//! the slot it sits in requires.
//!
//! Binary slots: the left operand needs at least the parent's precedence,
//! the right operand strictly more (all operators here are left-associative).
//! Prefix slots need more than prefix precedence, so `-(-a)` never collapses
//! into the decrement operator.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

use crate::parser::ast::*;

// JavaScript precedence levels, higher binds tighter
const LOWEST: u8 = 0;
const OR: u8 = 3;
const AND: u8 = 4;
const EQUALITY: u8 = 8;
const RELATIONAL: u8 = 9;
const ADDITIVE: u8 = 11;
const MULTIPLICATIVE: u8 = 12;
const PREFIX: u8 = 14;
const ATOM: u8 = 20;

/// Words that cannot be JavaScript binding names, plus the globals the
/// emitted code relies on
const RESERVED: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "enum",
    "export",
    "extends",
    "finally",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "with",
    "yield",
    "console",
];

fn reserved_words() -> &'static FxHashSet<&'static str> {
    static WORDS: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| RESERVED.iter().copied().collect())
}

/// Rename a Scrawl identifier that would clash with JavaScript
pub fn mangle(name: &str) -> String {
    if reserved_words().contains(name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// Emit an expression in a slot with no precedence requirement
pub fn emit_expression(expr: &Expression) -> String {
    emit_operand(expr, LOWEST)
}

/// Emit a call as `callee(args)`
pub fn emit_call(call: &FunctionCall) -> String {
    format!("{}({})", mangle(&call.callee), emit_arguments(&call.args).join(", "))
}

pub fn emit_arguments(args: &[Expression]) -> Vec<String> {
    args.iter().map(emit_expression).collect()
}

/// Re-quote a string literal. Scrawl strings have no escapes, so the text is
/// taken literally: backslashes are doubled and line breaks, which a
/// JavaScript string literal cannot span, become escapes.
pub fn quote_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// Drop leading zeros, which JavaScript would read as a legacy octal prefix
pub fn number_text(text: &str) -> String {
    let trimmed = text.trim_start_matches('0');
    if trimmed.is_empty() || trimmed.starts_with('.') {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

fn emit_operand(expr: &Expression, min_precedence: u8) -> String {
    let (text, precedence) = emit_with_precedence(expr);
    if precedence < min_precedence {
        format!("({})", text)
    } else {
        text
    }
}

fn emit_binary(operator: &str, precedence: u8, left: &Expression, right: &Expression) -> (String, u8) {
    let left = emit_operand(left, precedence);
    let right = emit_operand(right, precedence + 1);
    (format!("{} {} {}", left, operator, right), precedence)
}

fn emit_prefix(operator: &str, operand: &Expression) -> (String, u8) {
    let operand = emit_operand(operand, PREFIX + 1);
    (format!("{}{}", operator, operand), PREFIX)
}

fn emit_with_precedence(expr: &Expression) -> (String, u8) {
    match expr {
        Expression::Or { left, right } => emit_binary("||", OR, left, right),
        Expression::And { left, right } => emit_binary("&&", AND, left, right),
        Expression::Not { expression } => emit_prefix("!", expression),
        Expression::Comparison {
            operator,
            left,
            right,
        } => match operator {
            ComparisonOp::Equal => emit_binary("===", EQUALITY, left, right),
            _ => emit_binary(operator.symbol(), RELATIONAL, left, right),
        },
        Expression::Additive {
            operator,
            left,
            right,
        } => emit_binary(operator.symbol(), ADDITIVE, left, right),
        Expression::Multiplicative {
            operator,
            left,
            right,
        } => emit_binary(operator.symbol(), MULTIPLICATIVE, left, right),
        Expression::Unary {
            operator,
            expression,
        } => emit_prefix(operator.symbol(), expression),
        Expression::NumberLiteral(text) => (number_text(text), ATOM),
        Expression::StringLiteral(text) => (quote_string(text), ATOM),
        Expression::BooleanLiteral(value) => (value.to_string(), ATOM),
        Expression::Identifier { name } => (mangle(name), ATOM),
        Expression::FunctionCall(call) => (emit_call(call), ATOM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{lex, parse};

    fn js(source: &str) -> String {
        let program = parse(lex(&format!("x = {};", source)).unwrap()).unwrap();
        match &program.body[0] {
            Statement::VariableAssignment { expression, .. } => emit_expression(expression),
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_no_redundant_parentheses() {
        assert_eq!(js("1 + 2 * 3"), "1 + 2 * 3");
        assert_eq!(js("a || b && c"), "a || b && c");
        assert_eq!(js("a < b == c"), "a < b === c");
        assert_eq!(js("a == (b < c)"), "a === b < c");
    }

    #[test]
    fn test_grouping_is_preserved() {
        assert_eq!(js("(1 + 2) * 3"), "(1 + 2) * 3");
        assert_eq!(js("1 - (2 - 3)"), "1 - (2 - 3)");
        assert_eq!(js("(a || b) && c"), "(a || b) && c");
        assert_eq!(js("8 / (4 * 2)"), "8 / (4 * 2)");
    }

    #[test]
    fn test_left_nesting_needs_no_parentheses() {
        assert_eq!(js("(1 - 2) - 3"), "1 - 2 - 3");
    }

    #[test]
    fn test_chained_comparison_keeps_scrawl_grouping() {
        // Scrawl folds all comparisons at one level, JavaScript splits them in two
        assert_eq!(js("a < b == c > d"), "(a < b === c) > d");
        assert_eq!(js("a == b < c"), "(a === b) < c");
    }

    #[test]
    fn test_equality_is_strict() {
        assert_eq!(js("a == 1"), "a === 1");
    }

    #[test]
    fn test_not_wraps_comparison() {
        assert_eq!(js("!a > b"), "!(a > b)");
        assert_eq!(js("!done"), "!done");
        assert_eq!(js("!a && b"), "!a && b");
    }

    #[test]
    fn test_sign_operators() {
        assert_eq!(js("-5"), "-5");
        assert_eq!(js("-(-5)"), "-(-5)");
        assert_eq!(js("2 - -3"), "2 - -3");
        assert_eq!(js("-(a + b)"), "-(a + b)");
    }

    #[test]
    fn test_literals_and_calls() {
        assert_eq!(js("\"hi there\""), "\"hi there\"");
        assert_eq!(js("true"), "true");
        assert_eq!(js("3.25"), "3.25");
        assert_eq!(js("max(a, b + 1) * 2"), "max(a, b + 1) * 2");
    }

    #[test]
    fn test_reserved_identifiers_are_renamed() {
        assert_eq!(mangle("in"), "in_");
        assert_eq!(mangle("new"), "new_");
        assert_eq!(mangle("console"), "console_");
        assert_eq!(mangle("total"), "total");
        assert_eq!(js("in + class(new)"), "in_ + class_(new_)");
    }

    #[test]
    fn test_leading_zeros_are_dropped() {
        assert_eq!(number_text("010"), "10");
        assert_eq!(number_text("0"), "0");
        assert_eq!(number_text("000"), "0");
        assert_eq!(number_text("00.5"), "0.5");
        assert_eq!(number_text("2.50"), "2.50");
    }

    #[test]
    fn test_multiline_string_is_escaped() {
        assert_eq!(quote_string("a\nb\r"), "\"a\\nb\\r\"");
        assert_eq!(quote_string(""), "\"\"");
    }

    #[test]
    fn test_backslashes_are_literal() {
        assert_eq!(quote_string("C:\\"), "\"C:\\\\\"");
        assert_eq!(quote_string("a\\nb"), "\"a\\\\nb\"");
        assert_eq!(js(r#""\u""#), r#""\\u""#);
    }
}
