use thiserror::Error;

/// Every way an evaluation can fail. All variants are non-fatal and are
/// returned to the caller; malformed input never aborts the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unexpected character: {0}")]
    UnexpectedCharacter(char),

    #[error("misplaced comma or mismatched parentheses")]
    MisplacedComma,

    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("invalid expression: unary minus missing operand")]
    UnaryMinusMissingOperand,

    #[error("not enough operands for function: {0}")]
    NotEnoughOperandsForFunction(String),

    #[error("invalid expression: not enough operands")]
    NotEnoughOperands,

    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("invalid expression: empty stack at the end")]
    EmptyStack,

    #[error("invalid expression: operands left over after evaluation")]
    TrailingOperands,
}
