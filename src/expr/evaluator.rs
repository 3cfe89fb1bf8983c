use std::collections::HashMap;

use crate::container::{Queue, Stack};
use crate::functions::Function;

use super::{EvalError, Operator, Token};

/// Single-pass RPN execution of a postfix token sequence against a variable
/// environment. Owns no state across calls; the function table is static.
pub struct Evaluator<'a> {
    variables: &'a HashMap<String, f64>,
}

impl<'a> Evaluator<'a> {
    pub fn new(variables: &'a HashMap<String, f64>) -> Self {
        Self { variables }
    }

    /// Consumes the postfix sequence front to back and returns the single
    /// remaining operand.
    pub fn evaluate(&self, mut postfix: Queue<Token>) -> Result<f64, EvalError> {
        let mut operands: Stack<f64> = Stack::new();

        while let Some(token) = postfix.dequeue() {
            match token {
                Token::Operator(Operator::Negate) => {
                    let value = operands
                        .pop()
                        .ok_or(EvalError::UnaryMinusMissingOperand)?;
                    operands.push(-value);
                }
                Token::Operator(op) => {
                    let b = operands.pop().ok_or(EvalError::NotEnoughOperands)?;
                    let a = operands.pop().ok_or(EvalError::NotEnoughOperands)?;
                    operands.push(op.apply(a, b)?);
                }
                Token::Identifier(name) => {
                    if let Some(function) = Function::from_name(&name) {
                        self.apply_function(function, &name, &mut operands)?;
                    } else {
                        operands.push(self.resolve(&name)?);
                    }
                }
                Token::Number(text) => operands.push(self.resolve(&text)?),
                // The parser never emits punctuation into the postfix
                // stream; a hand-built sequence might.
                Token::LeftParen => {
                    return Err(EvalError::UnsupportedOperator("(".to_string()))
                }
                Token::RightParen => {
                    return Err(EvalError::UnsupportedOperator(")".to_string()))
                }
                Token::Comma => {
                    return Err(EvalError::UnsupportedOperator(",".to_string()))
                }
            }
        }

        let result = operands.pop().ok_or(EvalError::EmptyStack)?;
        if !operands.is_empty() {
            return Err(EvalError::TrailingOperands);
        }
        Ok(result)
    }

    /// Pops `arity` operands, first-pushed first, and pushes the function's
    /// result.
    fn apply_function(
        &self,
        function: Function,
        name: &str,
        operands: &mut Stack<f64>,
    ) -> Result<(), EvalError> {
        let mut args = vec![0.0; function.arity()];
        for slot in args.iter_mut().rev() {
            *slot = operands
                .pop()
                .ok_or_else(|| EvalError::NotEnoughOperandsForFunction(name.to_string()))?;
        }
        operands.push(function.apply(&args));
        Ok(())
    }

    /// A value token is a numeric literal if it parses as one, otherwise a
    /// variable reference. There are no default bindings.
    fn resolve(&self, text: &str) -> Result<f64, EvalError> {
        if let Ok(value) = text.parse::<f64>() {
            return Ok(value);
        }
        self.variables
            .get(text)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable(text.to_string()))
    }
}
