use crate::container::{Queue, Stack};
use crate::functions::Function;

use super::{EvalError, Operator, Token, Tokenizer};

/// Effective precedence of a function name sitting on the operator stack.
/// Above every operator, so a completed call is flushed to the output
/// before any following binary operator is pushed.
const FUNCTION_PRECEDENCE: u8 = 5;

/// Shunting-yard conversion from infix token order to postfix (RPN) order.
pub struct Parser;

impl Parser {
    /// Tokenizes and parses an expression into its postfix token sequence.
    pub fn parse_expression(expression: &str) -> Result<Queue<Token>, EvalError> {
        let mut output: Queue<Token> = Queue::new();
        let mut operators: Stack<Token> = Stack::new();
        let mut previous: Option<Token> = None;

        for item in Tokenizer::new(expression) {
            let mut token = item?;

            // A minus is binary only when it directly follows a number, an
            // identifier, or a closing parenthesis; anywhere else (start of
            // input, after an operator, `(`, or a comma) it negates.
            if token == Token::Operator(Operator::Subtract)
                && minus_is_unary(previous.as_ref())
            {
                token = Token::Operator(Operator::Negate);
            }
            let current = token.clone();

            match token {
                Token::Comma => {
                    // Flush the current argument; the `(` stays put until
                    // its matching `)` arrives.
                    while !matches!(operators.peek(), Some(Token::LeftParen)) {
                        match operators.pop() {
                            Some(top) => output.enqueue(top),
                            None => return Err(EvalError::MisplacedComma),
                        }
                    }
                }
                Token::Operator(op) => {
                    while should_pop(op, operators.peek()) {
                        if let Some(top) = operators.pop() {
                            output.enqueue(top);
                        }
                    }
                    operators.push(Token::Operator(op));
                }
                Token::LeftParen => operators.push(Token::LeftParen),
                Token::RightParen => loop {
                    match operators.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => output.enqueue(top),
                        None => return Err(EvalError::MismatchedParentheses),
                    }
                },
                Token::Identifier(name) => {
                    if Function::from_name(&name).is_some() {
                        operators.push(Token::Identifier(name));
                    } else {
                        output.enqueue(Token::Identifier(name));
                    }
                }
                Token::Number(text) => output.enqueue(Token::Number(text)),
            }

            previous = Some(current);
        }

        // Drain what is left on the operator stack. A `(` surfacing here
        // means its `)` never arrived.
        while let Some(top) = operators.pop() {
            if top == Token::LeftParen {
                return Err(EvalError::MismatchedParentheses);
            }
            output.enqueue(top);
        }

        Ok(output)
    }
}

fn minus_is_unary(previous: Option<&Token>) -> bool {
    matches!(
        previous,
        None | Some(Token::Operator(_)) | Some(Token::LeftParen) | Some(Token::Comma)
    )
}

/// Whether `top` leaves the stack ahead of the incoming operator: it does
/// when it binds tighter, or equally tight with a left-associative incoming
/// operator.
fn should_pop(incoming: Operator, top: Option<&Token>) -> bool {
    let top_precedence = match top {
        Some(Token::Operator(op)) => op.precedence(),
        Some(Token::Identifier(_)) => FUNCTION_PRECEDENCE,
        _ => return false,
    };
    top_precedence > incoming.precedence()
        || (top_precedence == incoming.precedence() && !incoming.is_right_associative())
}
