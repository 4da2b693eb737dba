//! Recursive-descent reference parser.
//!
//! Grammar, with precedence encoded in the rule nesting:
//!
//! ```text
//! expression -> term
//! term       -> factor ( ( "+" | "-" ) factor )*
//! factor     -> unary ( ( "*" | "/" ) unary )*
//! unary      -> "-" unary | primary
//! primary    -> NUMBER | "(" expression ")"
//! ```

use thiserror::Error;
use yardspan::{Span, Spand};

use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected expression")]
    ExpectedExpr,
    #[error("expected ')' after expression")]
    ExpectedRParen,
    #[error("trailing input after expression")]
    TrailingInput,
}

pub type ParseError = Spand<ParseErrorKind>;
pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.current).copied()
    }

    const fn eat(&mut self) {
        self.current += 1;
    }

    /// Span to hang an error on when there is no token left to blame.
    fn last_span(&self) -> Span {
        self.tokens
            .get(self.current)
            .or_else(|| self.tokens.last())
            .map(|tk| tk.span)
            .unwrap_or_default()
    }

    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.expression()?;

        match self.peek() {
            Some(token) => Err(ParseError::new(ParseErrorKind::TrailingInput, token.span)),
            None => Ok(expr),
        }
    }

    fn expression(&mut self) -> ParseResult<Expr> {
        self.term()
    }

    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        while let Some(token) = self.peek() {
            let op = match token.kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.eat();

            let rhs = self.factor()?;
            let span = expr.span.join(rhs.span);
            expr = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(expr)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        while let Some(token) = self.peek() {
            let op = match token.kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.eat();

            let rhs = self.unary()?;
            let span = expr.span.join(rhs.span);
            expr = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        // The lexer classifies any minus in operand position as unary,
        // so only `UMinus` can show up here.
        match self.peek() {
            Some(token) if token.kind == TokenKind::UMinus => {
                self.eat();

                let expr = self.unary()?;
                let span = token.span.join(expr.span);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op: UnaryOp::Neg,
                        expr: Box::new(expr),
                    },
                    span,
                ))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.peek() else {
            return Err(ParseError::new(ParseErrorKind::ExpectedExpr, self.last_span()));
        };
        self.eat();

        match token.kind {
            TokenKind::Number(literal) => Ok(Expr::new(ExprKind::Number(literal), token.span)),

            TokenKind::LParen => {
                let expr = self.expression()?;
                let close = self.expect_rparen()?;
                let span = token.span.join(close);
                Ok(Expr::new(ExprKind::Group(Box::new(expr)), span))
            }

            _ => Err(ParseError::new(ParseErrorKind::ExpectedExpr, token.span)),
        }
    }

    fn expect_rparen(&mut self) -> ParseResult<Span> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::RParen => {
                self.eat();
                Ok(token.span)
            }
            Some(token) => Err(ParseError::new(ParseErrorKind::ExpectedRParen, token.span)),
            None => Err(ParseError::new(
                ParseErrorKind::ExpectedRParen,
                self.last_span(),
            )),
        }
    }
}
