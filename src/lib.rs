pub mod api;
pub mod container;
pub mod expr;
pub mod functions;

use std::collections::HashMap;

use rayon::prelude::*;

pub use expr::{EvalError, Evaluator, Operator, Parser, Token, Tokenizer};
pub use functions::{Function, FUNCTION_NAMES};

/// Evaluates an arithmetic expression against a set of variable bindings.
///
/// A pure function of its two inputs: raw text is tokenized, converted to
/// postfix order by the shunting-yard parser, and executed by the RPN
/// evaluator. Any failure aborts the call and returns the specific
/// [`EvalError`]; there is no partial result.
pub fn evaluate(expression: &str, variables: &HashMap<String, f64>) -> Result<f64, EvalError> {
    let postfix = Parser::parse_expression(expression)?;
    Evaluator::new(variables).evaluate(postfix)
}

/// Evaluates one expression against many variable environments in parallel.
///
/// Each evaluation owns its tokenizer cursor, operator stack, output queue,
/// and operand stack, so environments are processed independently; results
/// come back in input order.
pub fn evaluate_batch(
    expression: &str,
    environments: &[HashMap<String, f64>],
) -> Vec<Result<f64, EvalError>> {
    environments
        .par_iter()
        .map(|variables| evaluate(expression, variables))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_evaluates_plain_arithmetic() {
        assert_eq!(evaluate("2+2", &HashMap::new()), Ok(4.0));
    }

    #[test]
    fn batch_matches_sequential_evaluation() {
        let environments: Vec<_> = (0..32)
            .map(|i| HashMap::from([("x".to_string(), i as f64)]))
            .collect();

        let batch = evaluate_batch("2 * x + 1", &environments);
        for (env, result) in environments.iter().zip(&batch) {
            assert_eq!(*result, evaluate("2 * x + 1", env));
        }
    }

    #[test]
    fn batch_reports_per_environment_errors() {
        let environments = vec![
            HashMap::from([("x".to_string(), 2.0)]),
            HashMap::new(),
        ];

        let batch = evaluate_batch("x + 1", &environments);
        assert_eq!(batch[0], Ok(3.0));
        assert_eq!(
            batch[1],
            Err(EvalError::UndefinedVariable("x".to_string()))
        );
    }
}
