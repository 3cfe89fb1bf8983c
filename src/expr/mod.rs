mod error;
mod evaluator;
mod parser;
mod tokenizer;

pub use error::EvalError;
pub use evaluator::Evaluator;
pub use parser::Parser;
pub use tokenizer::Tokenizer;

/// A single lexical unit of an expression. Tokens are immutable once
/// produced; identity is purely structural.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(String),
    Identifier(String),
    Operator(Operator),
    LeftParen,
    RightParen,
    Comma,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// Unary minus. The tokenizer never emits this; the parser rewrites a
    /// `Subtract` in prefix position into it.
    Negate,
}

impl Operator {
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Negate => 3,
            Operator::Power => 4,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, Operator::Negate | Operator::Power)
    }

    /// Applies the operator as a binary operation under IEEE-754 `f64`
    /// semantics: division by zero yields an infinity or NaN, not an error.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => Ok(left / right),
            Operator::Power => Ok(left.powf(right)),
            Operator::Negate => Err(EvalError::UnsupportedOperator(
                self.symbol().to_string(),
            )),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract | Operator::Negate => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }
}
