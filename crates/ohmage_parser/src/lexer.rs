use serde::Serialize;
use unscanny::Scanner;

use crate::error::LexerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Ident,
    Number,
    Dot,
    /// Comment marker; the token runs to the end of the line.
    Asterisk,
    Plus,
    Minus,
    WhiteSpace,
    Newline,
    EOF,
}

/// Byte range into the source text, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }

    fn single(kind: TokenKind, pos: usize) -> Self {
        Self {
            kind,
            span: Span::new(pos, pos),
        }
    }

    fn end(pos: usize) -> Self {
        Self {
            kind: TokenKind::EOF,
            span: Span::new(pos, pos),
        }
    }
}

/// Tokenizes `&src[base..]`; spans index into the full `src` so diagnostics
/// can be rendered against the original file.
pub(crate) struct Lexer<'s> {
    s: Scanner<'s>,
    base: usize,
}

impl<'s> Lexer<'s> {
    pub(crate) fn new(src: &'s str, base: usize) -> Self {
        Lexer {
            s: Scanner::new(&src[base..]),
            base,
        }
    }

    fn cursor(&self) -> usize {
        self.base + self.s.cursor()
    }

    fn whitespace(&mut self, start: usize) -> Token {
        self.s.eat_while(|c: char| c.is_whitespace() && c != '\n');
        Token::new(TokenKind::WhiteSpace, start, self.cursor() - 1)
    }

    fn newline(&mut self, start: usize) -> Token {
        self.s.eat_while(|c: char| c == '\n');
        Token::new(TokenKind::Newline, start, self.cursor() - 1)
    }

    fn identifier(&mut self, start: usize) -> Token {
        self.s.eat_while(|c: char| c.is_alphanumeric());
        Token::new(TokenKind::Ident, start, self.cursor() - 1)
    }

    fn number(&mut self, start: usize) -> Token {
        self.s.eat_while(|c: char| c.is_ascii_digit());
        Token::new(TokenKind::Number, start, self.cursor() - 1)
    }

    fn comment(&mut self, start: usize) -> Token {
        self.s.eat_while(|c: char| c != '\n');
        Token::new(TokenKind::Asterisk, start, self.cursor() - 1)
    }

    pub(crate) fn next(&mut self) -> Result<Token, LexerError> {
        let start = self.cursor();
        match self.s.eat() {
            Some('\n') => Ok(self.newline(start)),
            Some(c) if c.is_whitespace() => Ok(self.whitespace(start)),
            Some(c) if c.is_alphabetic() => Ok(self.identifier(start)),
            Some(c) if c.is_ascii_digit() => Ok(self.number(start)),
            Some('*') => Ok(self.comment(start)),
            Some('+') => Ok(Token::single(TokenKind::Plus, start)),
            Some('-') => Ok(Token::single(TokenKind::Minus, start)),
            Some('.') => Ok(Token::single(TokenKind::Dot, start)),
            // span covers the full character so inclusive-end slicing
            // stays on a utf-8 boundary
            Some(ch) => Err(LexerError::UnexpectedCharacter {
                ch,
                span: Span::new(start, start + ch.len_utf8() - 1),
            }),
            None => Ok(Token::end(start)),
        }
    }
}

pub fn token_text<'a>(src: &'a str, t: &Token) -> &'a str {
    &src[t.span.start..=t.span.end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lex(src: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(src, 0);
        let mut tokens = vec![];
        let mut token = lexer.next().expect("lexing failed");
        while token.kind != TokenKind::EOF {
            tokens.push(token);
            token = lexer.next().expect("lexing failed");
        }
        tokens
    }

    #[rstest]
    #[case("R1", vec![TokenKind::Ident])]
    #[case("R1 5 series", vec![
        TokenKind::Ident,
        TokenKind::WhiteSpace,
        TokenKind::Number,
        TokenKind::WhiteSpace,
        TokenKind::Ident,
    ])]
    #[case("4.7k", vec![
        TokenKind::Number,
        TokenKind::Dot,
        TokenKind::Number,
        TokenKind::Ident,
    ])]
    #[case("-12", vec![TokenKind::Minus, TokenKind::Number])]
    #[case(".end", vec![TokenKind::Dot, TokenKind::Ident])]
    #[case("a\n\nb", vec![TokenKind::Ident, TokenKind::Newline, TokenKind::Ident])]
    fn lexes_token_kinds(#[case] src: &str, #[case] expected: Vec<TokenKind>) {
        let kinds: Vec<TokenKind> = lex(src).iter().map(|t| t.kind).collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        let src = "* anything goes: !?~\nR1";
        let tokens = lex(src);
        assert_eq!(tokens[0].kind, TokenKind::Asterisk);
        assert_eq!(token_text(src, &tokens[0]), "* anything goes: !?~");
        assert_eq!(tokens[1].kind, TokenKind::Newline);
        assert_eq!(tokens[2].kind, TokenKind::Ident);
    }

    #[test]
    fn spans_are_offset_by_base() {
        let src = "title\nR1 5";
        let mut lexer = Lexer::new(src, 6);
        let token = lexer.next().expect("lexing failed");
        assert_eq!(token.span, Span::new(6, 7));
        assert_eq!(token_text(src, &token), "R1");
    }

    #[test]
    fn rejects_unexpected_character() {
        let mut lexer = Lexer::new("R1 = 5", 0);
        let mut result = lexer.next();
        while let Ok(t) = result {
            assert_ne!(t.kind, TokenKind::EOF, "expected a lexer error");
            result = lexer.next();
        }
        let err = result.unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"unexpected character '='");
    }
}
