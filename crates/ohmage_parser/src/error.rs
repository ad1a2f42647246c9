use thiserror::Error;

use crate::lexer::{Span, TokenKind};

#[derive(Debug, Error)]
pub enum NetlistError {
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error(transparent)]
    Parser(#[from] ParserError),
}

impl NetlistError {
    /// Span to highlight when rendering a diagnostic, when one is known.
    pub fn error_span(&self) -> Option<Span> {
        match self {
            NetlistError::Lexer(le) => match le {
                LexerError::UnexpectedCharacter { span, .. } => Some(*span),
            },
            NetlistError::Parser(pe) => match pe {
                ParserError::UnexpectedToken { span, .. }
                | ParserError::ContinuationWithoutPrevious { span }
                | ParserError::InvalidDeviceType { span, .. }
                | ParserError::InvalidCommand { span, .. }
                | ParserError::InvalidConfiguration { span, .. }
                | ParserError::InvalidStartNumeric { span }
                | ParserError::ExpectedDigitsAfterDot { span }
                | ParserError::InvalidExponentDigits { span, .. } => Some(*span),
                ParserError::MissingToken { span, .. } => *span,
                ParserError::InvalidNumericLiteral { span, .. } => *span,
                ParserError::MissingTitle => None,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum LexerError {
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, span: Span },
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("missing title line")]
    MissingTitle,

    #[error("line continuation '+' without a previous statement")]
    ContinuationWithoutPrevious { span: Span },

    #[error("unexpected token {found:?} (expected {expected})")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        span: Span,
    },

    #[error("missing token: {message}")]
    MissingToken {
        message: &'static str,
        span: Option<Span>,
    },

    #[error("unknown device type '{name}' (expected R or V)")]
    InvalidDeviceType { name: String, span: Span },

    #[error("unknown command '.{name}'")]
    InvalidCommand { name: String, span: Span },

    #[error("unknown configuration '{word}' (expected 'series' or 'parallel')")]
    InvalidConfiguration { word: String, span: Span },

    #[error("invalid start of numeric value")]
    InvalidStartNumeric { span: Span },

    #[error("expected digits after '.'")]
    ExpectedDigitsAfterDot { span: Span },

    #[error("invalid exponent digits '{lexeme}'")]
    InvalidExponentDigits { span: Span, lexeme: String },

    #[error("invalid numeric literal '{lexeme}'")]
    InvalidNumericLiteral { span: Option<Span>, lexeme: String },
}
