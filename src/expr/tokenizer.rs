use super::{EvalError, Operator, Token};

/// Lazy scanner over an expression string.
///
/// Each `next` call advances the cursor and yields the following token, so
/// the input is only scanned as far as the consumer asks. The sequence is
/// finite and non-restartable; a tokenizer must not be reused after it has
/// yielded `None` or an error.
pub struct Tokenizer<'a> {
    expression: &'a str,
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(expression: &'a str) -> Self {
        Self {
            expression,
            cursor: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.expression[self.cursor..]
    }

    /// Consumes the longest prefix whose characters all satisfy `accept`
    /// and returns it.
    fn scan_run(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let start = self.cursor;
        for c in self.expression[start..].chars() {
            if !accept(c) {
                break;
            }
            self.cursor += c.len_utf8();
        }
        &self.expression[start..self.cursor]
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.rest().starts_with(' ') {
            self.cursor += 1;
        }

        let c = self.rest().chars().next()?;
        let token = match c {
            '+' => Token::Operator(Operator::Add),
            // A minus always tokenizes as binary subtraction; rewriting it
            // to unary negation is the parser's decision.
            '-' => Token::Operator(Operator::Subtract),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '^' => Token::Operator(Operator::Power),
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ',' => Token::Comma,
            '0'..='9' | '.' => {
                let text = self.scan_run(|c| c.is_ascii_digit() || c == '.');
                return Some(Ok(Token::Number(text.to_string())));
            }
            'a'..='z' | 'A'..='Z' => {
                let text = self.scan_run(|c| c.is_ascii_alphanumeric() || c == '.');
                return Some(Ok(Token::Identifier(text.to_string())));
            }
            other => return Some(Err(EvalError::UnexpectedCharacter(other))),
        };

        self.cursor += c.len_utf8();
        Some(Ok(token))
    }
}
