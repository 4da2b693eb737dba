//! Arithmetic expression engine: text to tokens to one `f64`.
//!
//! The primary pipeline is [`eval_line`], a tokenizer feeding a
//! two-stack shunting-yard evaluator. [`eval_line_ast`] runs the same
//! tokens through a recursive-descent parser and a tree walk instead;
//! the two agree on every valid expression.

use crate::eval::EvalError;
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;

/// Any way a line of source can fail to produce a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    Lex(LexError),
    Eval(EvalError),
    Parse(ParseError),
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

/// Evaluates one line of source with the shunting-yard pipeline.
pub fn eval_line(source: &str) -> Result<f64, Error> {
    let tokens = Lexer::new(source).lex_all()?;
    Ok(eval::evaluate(&tokens)?)
}

/// Evaluates one line of source with the reference tree pipeline.
pub fn eval_line_ast(source: &str) -> Result<f64, Error> {
    let tokens = Lexer::new(source).lex_all()?;
    let expr = Parser::new(&tokens).parse()?;
    Ok(expr.kind.eval())
}
