use std::str::Chars;

use thiserror::Error;
use yardspan::{Span, Spand};

use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

pub type LexError = Spand<LexErrorKind>;
pub type LexResult<T> = Result<T, LexError>;

const EOF: char = '\0';

/// Single-pass scanner over one line of source.
///
/// A newline terminates the scan, so a source file can carry one
/// expression per line. Only the space character is skipped; anything
/// else that is not part of the grammar is an error.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Chars<'a>,

    /// start byte position of current token
    byte_start: u32,

    /// byte position of cursor
    byte: u32,

    /// kind of the last emitted token, drives minus disambiguation
    prev: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        assert!(u32::try_from(input.len()).is_ok());

        Self {
            input,
            chars: input.chars(),
            byte_start: 0,
            byte: 0,
            prev: None,
        }
    }

    /// Scans the whole line. The first invalid character aborts the
    /// scan; there is no resync point to recover at.
    pub fn lex_all(self) -> LexResult<Vec<Token>> {
        self.collect()
    }

    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF)
    }

    fn second(&self) -> char {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().unwrap_or(EOF)
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    fn bump(&mut self) -> Option<char> {
        #[allow(clippy::cast_possible_truncation)]
        self.chars
            .next()
            .inspect(|c| self.byte += c.len_utf8() as u32)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.first()) {
            self.bump();
        }
    }

    const fn make_span(&self) -> Span {
        Span::new(self.byte_start, self.byte)
    }

    fn view(&self) -> &'a str {
        &self.input[self.byte_start as usize..self.byte as usize]
    }

    /// Greedy digit run, with at most one fractional part. A `.` not
    /// followed by a digit is left in place and surfaces as an
    /// unexpected character on the next cycle.
    fn number(&mut self) -> Token {
        self.eat_while(|c| c.is_ascii_digit());

        if self.first() == '.' && self.second().is_ascii_digit() {
            self.bump();
            self.eat_while(|c| c.is_ascii_digit());
        }

        let literal = self
            .view()
            .parse()
            .expect("digit run should parse as f64");

        Token::new(TokenKind::Number(literal), self.make_span())
    }

    /// A `-` is binary only when something that can end an operand was
    /// emitted right before it. Token history alone decides; spacing
    /// plays no part.
    const fn minus(&self) -> TokenKind {
        match self.prev {
            Some(TokenKind::Number(_) | TokenKind::RParen) => TokenKind::Minus,
            _ => TokenKind::UMinus,
        }
    }

    pub fn next_token(&mut self) -> Option<LexResult<Token>> {
        self.eat_while(|c| c == ' ');

        if self.first() == '\n' {
            return None;
        }

        self.byte_start = self.byte;
        let c = self.bump()?;

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => self.minus(),
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,

            '0'..='9' => {
                let token = self.number();
                self.prev = Some(token.kind);
                return Some(Ok(token));
            }

            _ => {
                return Some(Err(LexError::new(
                    LexErrorKind::UnexpectedChar(c),
                    self.make_span(),
                )));
            }
        };

        self.prev = Some(kind);
        Some(Ok(Token::new(kind, self.make_span())))
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .lex_all()
            .unwrap()
            .into_iter()
            .map(|tk| tk.kind)
            .collect()
    }

    #[test]
    fn mixed_expression() {
        assert_eq!(
            kinds("2 + 3 * 4"),
            [
                TokenKind::Number(2.0),
                TokenKind::Plus,
                TokenKind::Number(3.0),
                TokenKind::Star,
                TokenKind::Number(4.0),
            ]
        );
    }

    #[test]
    fn number_spans() {
        let tokens = Lexer::new("12.5 + 3").lex_all().unwrap();

        assert_eq!(tokens[0], Token::new(TokenKind::Number(12.5), Span::new(0, 4)));
        assert_eq!(tokens[1].span, Span::new(5, 6));
        assert_eq!(tokens[2], Token::new(TokenKind::Number(3.0), Span::new(7, 8)));
    }

    #[test]
    fn minus_at_start_is_unary() {
        assert_eq!(kinds("-3"), [TokenKind::UMinus, TokenKind::Number(3.0)]);
    }

    #[test]
    fn minus_after_number_is_binary() {
        assert_eq!(
            kinds("4 - 3"),
            [
                TokenKind::Number(4.0),
                TokenKind::Minus,
                TokenKind::Number(3.0),
            ]
        );
    }

    #[test]
    fn minus_after_operator_is_unary() {
        assert_eq!(
            kinds("4 - -3"),
            [
                TokenKind::Number(4.0),
                TokenKind::Minus,
                TokenKind::UMinus,
                TokenKind::Number(3.0),
            ]
        );
    }

    #[test]
    fn minus_after_left_paren_is_unary() {
        assert_eq!(
            kinds("(-3)"),
            [
                TokenKind::LParen,
                TokenKind::UMinus,
                TokenKind::Number(3.0),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn minus_after_right_paren_is_binary() {
        assert_eq!(
            kinds("(1) - 2"),
            [
                TokenKind::LParen,
                TokenKind::Number(1.0),
                TokenKind::RParen,
                TokenKind::Minus,
                TokenKind::Number(2.0),
            ]
        );
    }

    #[test]
    fn unexpected_character() {
        let err = Lexer::new("3 & 4").lex_all().unwrap_err();

        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('&'));
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn trailing_dot_is_not_part_of_the_number() {
        let err = Lexer::new("1.").lex_all().unwrap_err();

        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('.'));
        assert_eq!(err.span, Span::new(1, 2));
    }

    #[test]
    fn newline_terminates_the_scan() {
        assert_eq!(
            kinds("1 + 2\n3 * 4"),
            [
                TokenKind::Number(1.0),
                TokenKind::Plus,
                TokenKind::Number(2.0),
            ]
        );
    }

    #[test]
    fn tab_is_not_whitespace() {
        let err = Lexer::new("1\t+ 2").lex_all().unwrap_err();

        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('\t'));
    }
}
