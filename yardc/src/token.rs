use std::fmt::Display;

use yardspan::Spand;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),

    Plus,
    Minus,
    UMinus,
    Star,
    Slash,

    LParen,
    RParen,
}

pub type Token = Spand<TokenKind>;

impl TokenKind {
    /// Binding strength used by the shunting-yard loop. Zero marks the
    /// kinds that are not operators and is never compared as a real
    /// precedence.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Number(_) | Self::LParen | Self::RParen => 0,
            Self::Plus | Self::Minus => 2,
            Self::Star | Self::Slash => 3,
            Self::UMinus => 4,
        }
    }

    #[must_use]
    pub const fn is_operator(self) -> bool {
        self.precedence() > 0
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),

            Self::Plus => write!(f, "+"),
            Self::Minus | Self::UMinus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),

            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}
