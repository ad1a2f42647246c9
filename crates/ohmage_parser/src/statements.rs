use crate::error::{NetlistError, ParserError};
use crate::lexer::{Lexer, Span, Token, TokenKind};

#[derive(Debug, Clone)]
pub(crate) struct Statement {
    pub(crate) tokens: Vec<Token>,
    pub(crate) span: Span,
}

impl Statement {
    fn new(tokens: Vec<Token>) -> Self {
        let start = tokens[0].span.start;
        let end = tokens[tokens.len() - 1].span.end;
        Self {
            span: Span::new(start, end),
            tokens,
        }
    }

    pub(crate) fn as_cursor(&self) -> StmtCursor<'_> {
        StmtCursor::new(&self.tokens, self.span)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StmtCursor<'a> {
    pub(crate) span: Span,
    toks: &'a [Token],
    i: usize,
}

impl<'a> StmtCursor<'a> {
    fn new(tokens: &'a [Token], span: Span) -> Self {
        Self {
            toks: tokens,
            i: 0,
            span,
        }
    }

    pub(crate) fn skip_ws(&mut self) {
        while let Some(t) = self.toks.get(self.i) {
            if t.kind != TokenKind::WhiteSpace {
                break;
            }
            self.i += 1;
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.toks.get(self.i)
    }

    /// Peek skipping whitespace.
    pub(crate) fn peek_non_whitespace(&self) -> Option<&'a Token> {
        let mut j = self.i;
        while let Some(t) = self.toks.get(j) {
            if t.kind != TokenKind::WhiteSpace {
                return Some(t);
            }
            j += 1;
        }
        None
    }

    pub(crate) fn next(&mut self) -> Option<&'a Token> {
        let t = self.toks.get(self.i);
        if t.is_some() {
            self.i += 1;
        }
        t
    }

    pub(crate) fn next_non_whitespace(&mut self) -> Option<&'a Token> {
        self.skip_ws();
        self.next()
    }

    /// Consume a specific kind if it is next (no whitespace skip).
    pub(crate) fn consume(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.peek()?.kind == kind {
            return self.next();
        }
        None
    }

    pub(crate) fn expect_non_whitespace(
        &mut self,
        kind: TokenKind,
    ) -> Result<&'a Token, NetlistError> {
        self.skip_ws();
        if let Some(tok) = self.peek() {
            if tok.kind == kind {
                return Ok(self.next().expect("just peeked"));
            }
            return Err(ParserError::UnexpectedToken {
                expected: format!("{:?}", kind),
                found: tok.kind,
                span: tok.span,
            }
            .into());
        }
        Err(ParserError::MissingToken {
            message: "token",
            span: Some(self.span),
        }
        .into())
    }
}

#[derive(Debug)]
pub(crate) struct Statements {
    pub(crate) statements: Vec<Statement>,
}

impl Statements {
    /// Merge statements with a leading '+' into their predecessor.
    fn merge_statements(statements: Vec<Statement>) -> Result<Vec<Statement>, ParserError> {
        let mut merged: Vec<Statement> = Vec::new();

        for stmt in statements.into_iter() {
            let cursor = stmt.as_cursor();
            let plus = cursor
                .peek_non_whitespace()
                .filter(|t| t.kind == TokenKind::Plus);

            if let Some(plus) = plus {
                let Some(prev) = merged.last_mut() else {
                    return Err(ParserError::ContinuationWithoutPrevious { span: stmt.span });
                };
                let after_plus = stmt
                    .tokens
                    .iter()
                    .position(|t| t.span == plus.span)
                    .expect("'+' token came from this statement")
                    + 1;
                prev.tokens.extend_from_slice(&stmt.tokens[after_plus..]);
                prev.span.end = stmt.span.end;
            } else {
                merged.push(stmt);
            }
        }

        Ok(merged)
    }

    /// Split `&src[base..]` into statements: one per line, comments dropped,
    /// '+' continuations merged, blank lines skipped.
    pub(crate) fn new(src: &str, base: usize) -> Result<Self, NetlistError> {
        let mut lexer = Lexer::new(src, base);
        let mut statements = Vec::new();
        let mut token = lexer.next()?;

        let mut statement: Vec<Token> = Vec::new();
        while token.kind != TokenKind::EOF {
            statement.clear();
            while token.kind != TokenKind::Newline && token.kind != TokenKind::EOF {
                statement.push(token);
                token = lexer.next()?;
            }
            if token.kind == TokenKind::Newline {
                token = lexer.next()?;
            }

            let first = statement
                .iter()
                .find(|t| t.kind != TokenKind::WhiteSpace)
                .map(|t| t.kind);
            match first {
                None | Some(TokenKind::Asterisk) => {}
                Some(_) => statements.push(Statement::new(statement.clone())),
            }
        }

        let statements = Self::merge_statements(statements)?;
        Ok(Self { statements })
    }
}
