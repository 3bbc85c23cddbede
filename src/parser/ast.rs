// AST (Abstract Syntax Tree) definitions for Scrawl

use std::fmt;

/// Root of one compilation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self { body: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableAssignment {
        identifier: String,
        expression: Expression,
    },
    FunctionCall(FunctionCall),
    FunctionDeclaration {
        name: String,
        params: Vec<String>,
        body: Vec<Statement>,
    },
    If(IfStatement),
    Return {
        expression: Expression,
    },
}

/// A call, usable both as a statement and as a primary expression
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub callee: String,
    pub args: Vec<Expression>,
}

/// `if (...) { } elseif (...) { } else { }`
///
/// `alternate` holds zero or more `ElseIf` entries followed by at most one
/// `Else`, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub consequent: Vec<Statement>,
    pub alternate: Vec<Alternate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Alternate {
    ElseIf {
        condition: Expression,
        consequent: Vec<Statement>,
    },
    Else {
        body: Vec<Statement>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Equal,        // ==
    Less,         // <
    Greater,      // >
    LessEqual,    // <=
    GreaterEqual, // >=
}

impl ComparisonOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::Less => "<",
            ComparisonOp::Greater => ">",
            ComparisonOp::LessEqual => "<=",
            ComparisonOp::GreaterEqual => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditiveOp {
    Add,
    Subtract,
}

impl AdditiveOp {
    pub fn symbol(self) -> &'static str {
        match self {
            AdditiveOp::Add => "+",
            AdditiveOp::Subtract => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplicativeOp {
    Multiply,
    Divide,
}

impl MultiplicativeOp {
    pub fn symbol(self) -> &'static str {
        match self {
            MultiplicativeOp::Multiply => "*",
            MultiplicativeOp::Divide => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

/// Expression nodes, one variant per precedence level plus the leaves
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Or {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Not {
        expression: Box<Expression>,
    },
    Comparison {
        operator: ComparisonOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Additive {
        operator: AdditiveOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Multiplicative {
        operator: MultiplicativeOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        operator: UnaryOp,
        expression: Box<Expression>,
    },
    /// Raw literal text, e.g. `3.14`
    NumberLiteral(String),
    /// Text between the quotes
    StringLiteral(String),
    BooleanLiteral(bool),
    Identifier {
        name: String,
    },
    FunctionCall(FunctionCall),
}

impl Expression {
    pub fn number(text: impl Into<String>) -> Self {
        Expression::NumberLiteral(text.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expression::StringLiteral(text.into())
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier { name: name.into() }
    }
}

// ===== Outline rendering =====
//
// Statements print as an indented outline, expressions as prefix
// s-expressions: `assign x = (+ 1 (* 2 3))`.

const OUTLINE_INDENT: &str = "  ";

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, &self.body, 0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, statements: &[Statement], depth: usize) -> fmt::Result {
    for statement in statements {
        write_statement(f, statement, depth)?;
    }
    Ok(())
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    let pad = OUTLINE_INDENT.repeat(depth);
    match statement {
        Statement::VariableAssignment {
            identifier,
            expression,
        } => writeln!(f, "{}assign {} = {}", pad, identifier, expression),
        Statement::FunctionCall(call) => writeln!(f, "{}call {}", pad, call),
        Statement::FunctionDeclaration { name, params, body } => {
            writeln!(f, "{}function {}({})", pad, name, params.join(", "))?;
            write_block(f, body, depth + 1)
        }
        Statement::If(if_statement) => {
            writeln!(f, "{}if {}", pad, if_statement.condition)?;
            write_block(f, &if_statement.consequent, depth + 1)?;
            for alternate in &if_statement.alternate {
                match alternate {
                    Alternate::ElseIf {
                        condition,
                        consequent,
                    } => {
                        writeln!(f, "{}elseif {}", pad, condition)?;
                        write_block(f, consequent, depth + 1)?;
                    }
                    Alternate::Else { body } => {
                        writeln!(f, "{}else", pad)?;
                        write_block(f, body, depth + 1)?;
                    }
                }
            }
            Ok(())
        }
        Statement::Return { expression } => writeln!(f, "{}return {}", pad, expression),
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.callee)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Or { left, right } => write!(f, "(|| {} {})", left, right),
            Expression::And { left, right } => write!(f, "(&& {} {})", left, right),
            Expression::Not { expression } => write!(f, "(! {})", expression),
            Expression::Comparison {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator.symbol(), left, right),
            Expression::Additive {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator.symbol(), left, right),
            Expression::Multiplicative {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator.symbol(), left, right),
            Expression::Unary {
                operator,
                expression,
            } => write!(f, "({} {})", operator.symbol(), expression),
            Expression::NumberLiteral(text) => write!(f, "{}", text),
            Expression::StringLiteral(text) => write!(f, "\"{}\"", text),
            Expression::BooleanLiteral(value) => write!(f, "{}", value),
            Expression::Identifier { name } => write!(f, "{}", name),
            Expression::FunctionCall(call) => write!(f, "{}", call),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_outline() {
        let expr = Expression::Additive {
            operator: AdditiveOp::Add,
            left: Box::new(Expression::number("1")),
            right: Box::new(Expression::Multiplicative {
                operator: MultiplicativeOp::Multiply,
                left: Box::new(Expression::identifier("x")),
                right: Box::new(Expression::FunctionCall(FunctionCall {
                    callee: "f".to_string(),
                    args: vec![Expression::string("a"), Expression::BooleanLiteral(true)],
                })),
            }),
        };

        assert_eq!(expr.to_string(), "(+ 1 (* x f(\"a\", true)))");
    }

    #[test]
    fn test_program_outline_indents_blocks() {
        let program = Program {
            body: vec![
                Statement::FunctionDeclaration {
                    name: "f".to_string(),
                    params: vec!["a".to_string(), "b".to_string()],
                    body: vec![Statement::Return {
                        expression: Expression::identifier("a"),
                    }],
                },
                Statement::If(IfStatement {
                    condition: Expression::BooleanLiteral(false),
                    consequent: vec![],
                    alternate: vec![Alternate::Else {
                        body: vec![Statement::FunctionCall(FunctionCall {
                            callee: "print".to_string(),
                            args: vec![],
                        })],
                    }],
                }),
            ],
        };

        assert_eq!(
            program.to_string(),
            "function f(a, b)\n  return a\nif false\nelse\n  call print()\n"
        );
    }
}
