use thiserror::Error;
use yardspan::{Span, Spand};

use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    #[error("mismatched right paren")]
    UnmatchedRightParen,
    #[error("mismatched left paren")]
    UnmatchedLeftParen,
    #[error("missing operand: operator takes {needed}, found {have}")]
    MissingOperand { needed: usize, have: usize },
    #[error("cannot evaluate the expression to a single value")]
    InvalidResult,
}

pub type EvalError = Spand<EvalErrorKind>;
pub type EvalResult<T> = Result<T, EvalError>;

/// Computes the value of an infix token run in a single pass.
///
/// Shunting yard with an eager reduce step: instead of queuing popped
/// operators in postfix order, each one is applied to the value stack
/// the moment it is popped. Both stacks live and die inside the call,
/// so evaluating the same slice twice gives the same answer.
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    let mut values: Vec<f64> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for &token in tokens {
        match token.kind {
            TokenKind::Number(literal) => values.push(literal),

            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::UMinus
            | TokenKind::Star
            | TokenKind::Slash => {
                // Equal precedence reduces the pending operator first,
                // which is what makes `8 - 3 - 2` come out as 3.
                while let Some(top) = operators.last().copied() {
                    if top.kind == TokenKind::LParen
                        || top.kind.precedence() < token.kind.precedence()
                    {
                        break;
                    }
                    operators.pop();
                    reduce(top, &mut values)?;
                }
                operators.push(token);
            }

            // A left paren never reduces anything when first seen.
            TokenKind::LParen => operators.push(token),

            TokenKind::RParen => loop {
                match operators.pop() {
                    Some(top) if top.kind == TokenKind::LParen => break,
                    Some(top) => reduce(top, &mut values)?,
                    None => {
                        return Err(EvalError::new(
                            EvalErrorKind::UnmatchedRightParen,
                            token.span,
                        ));
                    }
                }
            },
        }
    }

    while let Some(top) = operators.pop() {
        if top.kind == TokenKind::LParen {
            return Err(EvalError::new(EvalErrorKind::UnmatchedLeftParen, top.span));
        }
        reduce(top, &mut values)?;
    }

    match values.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::new(EvalErrorKind::InvalidResult, full_span(tokens))),
    }
}

/// Applies one pending operator to the value stack. The later-pushed
/// value is the right-hand operand, so subtraction and division keep
/// their left-to-right reading.
fn reduce(operator: Token, values: &mut Vec<f64>) -> EvalResult<()> {
    let missing = |have: usize| {
        let needed = if operator.kind == TokenKind::UMinus { 1 } else { 2 };
        EvalError::new(EvalErrorKind::MissingOperand { needed, have }, operator.span)
    };

    let Some(x) = values.pop() else {
        return Err(missing(0));
    };

    let result = match operator.kind {
        TokenKind::UMinus => -x,
        TokenKind::Plus => values.pop().ok_or_else(|| missing(1))? + x,
        TokenKind::Minus => values.pop().ok_or_else(|| missing(1))? - x,
        TokenKind::Star => values.pop().ok_or_else(|| missing(1))? * x,
        TokenKind::Slash => values.pop().ok_or_else(|| missing(1))? / x,
        TokenKind::Number(_) | TokenKind::LParen | TokenKind::RParen => {
            unreachable!("only operators reach the reduce step")
        }
    };

    values.push(result);
    Ok(())
}

fn full_span(tokens: &[Token]) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.join(last.span),
        _ => Span::default(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::Lexer;

    fn eval_str(input: &str) -> EvalResult<f64> {
        let tokens = Lexer::new(input).lex_all().unwrap();
        evaluate(&tokens)
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(eval_str("2 + 3 * 4").unwrap(), 14.0);
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(eval_str("8 - 3 - 2").unwrap(), 3.0);
        assert_eq!(eval_str("8 / 2 / 2").unwrap(), 2.0);
    }

    #[test]
    fn unary_minus() {
        assert_eq!(eval_str("-3 + 4").unwrap(), 1.0);
        assert_eq!(eval_str("4 - -3").unwrap(), 7.0);
        assert_eq!(eval_str("-(3 + 2)").unwrap(), -5.0);
    }

    #[test]
    fn parens_group() {
        assert_eq!(eval_str("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(eval_str("((1))").unwrap(), 1.0);
    }

    #[test]
    fn fractions() {
        assert_eq!(eval_str("1.5 * 2").unwrap(), 3.0);
        assert_eq!(eval_str("10 / 4").unwrap(), 2.5);
    }

    #[test]
    fn unmatched_left_paren() {
        let err = eval_str("(3 + 4").unwrap_err();

        assert_eq!(err.kind, EvalErrorKind::UnmatchedLeftParen);
        assert_eq!(err.span, Span::new(0, 1));
    }

    #[test]
    fn unmatched_right_paren() {
        let err = eval_str("3 + 4)").unwrap_err();

        assert_eq!(err.kind, EvalErrorKind::UnmatchedRightParen);
        assert_eq!(err.span, Span::new(5, 6));
    }

    #[test]
    fn lone_operator_is_missing_operands() {
        let err = eval_str("+").unwrap_err();

        assert_eq!(
            err.kind,
            EvalErrorKind::MissingOperand { needed: 2, have: 0 }
        );
    }

    #[test]
    fn binary_operator_with_one_operand() {
        let err = eval_str("3 +").unwrap_err();

        assert_eq!(
            err.kind,
            EvalErrorKind::MissingOperand { needed: 2, have: 1 }
        );
    }

    #[test]
    fn stacked_negation_starves_the_first_minus() {
        // The pending unary minus reduces on the equal-precedence
        // tie-break before the second one has produced an operand.
        let err = eval_str("--3").unwrap_err();

        assert_eq!(
            err.kind,
            EvalErrorKind::MissingOperand { needed: 1, have: 0 }
        );
    }

    #[test]
    fn adjacent_numbers_do_not_reduce() {
        let err = eval_str("3 4").unwrap_err();

        assert_eq!(err.kind, EvalErrorKind::InvalidResult);
        assert_eq!(err.span, Span::new(0, 3));
    }

    #[test]
    fn empty_input_has_no_result() {
        let err = eval_str("").unwrap_err();

        assert_eq!(err.kind, EvalErrorKind::InvalidResult);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let tokens = Lexer::new("(2 + 3) * -4").lex_all().unwrap();

        let first = evaluate(&tokens).unwrap();
        let second = evaluate(&tokens).unwrap();

        assert_eq!(first, -20.0);
        assert_eq!(first, second);
    }
}
