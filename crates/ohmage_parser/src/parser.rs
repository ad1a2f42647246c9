use serde::Serialize;

use crate::elements::{ElementSpec, ResistorSpec, VoltageSourceSpec};
use crate::error::{NetlistError, ParserError};
use crate::lexer::{TokenKind, token_text};
use crate::statements::{Statements, StmtCursor};
use crate::value::{Value, ValueSuffix};

/// Parsed circuit file: the title line plus element specs in file order.
#[derive(Debug, Serialize)]
pub struct Deck {
    pub title: String,
    pub elements: Vec<ElementSpec>,
}

/// Parse a circuit description.
///
/// The first line is always the title (netlist convention). After that,
/// one element per statement: `V<name> <value>` or
/// `R<name> <value> <series|parallel>`. `*` comments, `+` continuations
/// and a terminating `.end` behave as in a SPICE deck.
pub fn parse(input: &str) -> Result<Deck, NetlistError> {
    let (title, body_start) = match input.find('\n') {
        Some(idx) => (input[..idx].trim(), idx + 1),
        None => (input.trim(), input.len()),
    };
    if title.is_empty() {
        return Err(ParserError::MissingTitle.into());
    }

    let stream = Statements::new(input, body_start)?;

    let mut elements = Vec::new();
    for stmt in &stream.statements {
        let mut cursor = stmt.as_cursor();
        cursor.skip_ws();

        if cursor.consume(TokenKind::Dot).is_some() {
            let ident = cursor.expect_non_whitespace(TokenKind::Ident)?;
            let name = token_text(input, ident);
            if name.eq_ignore_ascii_case("end") {
                break;
            }
            return Err(ParserError::InvalidCommand {
                name: name.to_string(),
                span: ident.span,
            }
            .into());
        }

        let element = parse_element(&mut cursor, input)?;
        expect_statement_end(&mut cursor)?;
        elements.push(element);
    }

    Ok(Deck {
        title: title.to_string(),
        elements,
    })
}

fn parse_element(cursor: &mut StmtCursor, src: &str) -> Result<ElementSpec, NetlistError> {
    let ident = cursor.expect_non_whitespace(TokenKind::Ident)?;
    let name = token_text(src, ident);
    let first = name.chars().next().expect("idents are non-empty");

    match first.to_ascii_uppercase() {
        'V' => {
            let voltage = parse_value(cursor, src)?;
            Ok(ElementSpec::VoltageSource(VoltageSourceSpec {
                name: name.to_string(),
                span: ident.span,
                voltage,
            }))
        }
        'R' => {
            let resistance = parse_value(cursor, src)?;
            let config = parse_configuration(cursor, src)?;
            Ok(ElementSpec::Resistor(ResistorSpec {
                name: name.to_string(),
                span: ident.span,
                resistance,
                config,
            }))
        }
        _ => Err(ParserError::InvalidDeviceType {
            name: name.to_string(),
            span: ident.span,
        }
        .into()),
    }
}

fn parse_configuration(
    cursor: &mut StmtCursor,
    src: &str,
) -> Result<crate::elements::Configuration, NetlistError> {
    let Some(tok) = cursor.next_non_whitespace() else {
        return Err(ParserError::MissingToken {
            message: "configuration ('series' or 'parallel')",
            span: Some(cursor.span),
        }
        .into());
    };
    if tok.kind != TokenKind::Ident {
        return Err(ParserError::UnexpectedToken {
            expected: "'series' or 'parallel'".to_string(),
            found: tok.kind,
            span: tok.span,
        }
        .into());
    }
    let word = token_text(src, tok);
    word.parse().map_err(|_| {
        ParserError::InvalidConfiguration {
            word: word.to_string(),
            span: tok.span,
        }
        .into()
    })
}

fn expect_statement_end(cursor: &mut StmtCursor) -> Result<(), NetlistError> {
    // a trailing '*' comment swallows the rest of the line
    if let Some(tok) = cursor.peek_non_whitespace()
        && tok.kind != TokenKind::Asterisk
    {
        return Err(ParserError::UnexpectedToken {
            expected: "end of statement".to_string(),
            found: tok.kind,
            span: tok.span,
        }
        .into());
    }
    Ok(())
}

/// Parse a numeric literal off the cursor: optional sign, digits with an
/// optional fraction, then an optional exponent and SI suffix. Exponent and
/// suffix must be adjacent to the digits; trailing unit letters that do not
/// form a known suffix (`V`, `Ohm`) are ignored.
fn parse_value(cursor: &mut StmtCursor, src: &str) -> Result<Value, NetlistError> {
    let mut number_str = String::new();
    let mut exponent: Option<f64> = None;
    let mut suffix: Option<ValueSuffix> = None;

    let mut t = cursor
        .next_non_whitespace()
        .ok_or(ParserError::MissingToken {
            message: "number",
            span: Some(cursor.span),
        })?;
    let value_span = t.span;

    if t.kind == TokenKind::Minus {
        number_str.push('-');
        t = cursor
            .next_non_whitespace()
            .ok_or(ParserError::MissingToken {
                message: "digits or '.' after '-'",
                span: Some(t.span),
            })?;
    }

    match t.kind {
        TokenKind::Number => {
            number_str.push_str(token_text(src, t));
            // fraction only if the dot is immediately adjacent
            if let Some(peek) = cursor.peek()
                && peek.kind == TokenKind::Dot
            {
                let dot = *cursor.next().expect("just peeked");
                number_str.push('.');
                let frac = cursor.next().ok_or(ParserError::ExpectedDigitsAfterDot {
                    span: dot.span,
                })?;
                if frac.kind != TokenKind::Number {
                    return Err(ParserError::ExpectedDigitsAfterDot { span: dot.span }.into());
                }
                number_str.push_str(token_text(src, frac));
            }
        }
        TokenKind::Dot => {
            number_str.push('.');
            let frac = cursor.next().ok_or(ParserError::ExpectedDigitsAfterDot {
                span: t.span,
            })?;
            if frac.kind != TokenKind::Number {
                return Err(ParserError::ExpectedDigitsAfterDot { span: t.span }.into());
            }
            number_str.push_str(token_text(src, frac));
        }
        _ => return Err(ParserError::InvalidStartNumeric { span: t.span }.into()),
    }

    // exponent and/or suffix, adjacent to the digits
    if let Some(peek) = cursor.peek()
        && peek.kind == TokenKind::Ident
    {
        let text = token_text(src, peek);
        if text.eq_ignore_ascii_case("e") {
            // sign and digits were lexed as separate tokens ("1e-3")
            let e_tok = *cursor.next().expect("just peeked");
            let mut exp_str = String::new();
            if let Some(sign) = cursor.peek() {
                match sign.kind {
                    TokenKind::Plus => {
                        cursor.next().expect("just peeked");
                        exp_str.push('+');
                    }
                    TokenKind::Minus => {
                        cursor.next().expect("just peeked");
                        exp_str.push('-');
                    }
                    _ => {}
                }
            }
            let digits = cursor.next().ok_or(ParserError::MissingToken {
                message: "digits after exponent",
                span: Some(e_tok.span),
            })?;
            let digits_str = token_text(src, digits).to_string();
            if digits.kind != TokenKind::Number {
                return Err(ParserError::InvalidExponentDigits {
                    span: digits.span,
                    lexeme: digits_str,
                }
                .into());
            }
            exp_str.push_str(&digits_str);
            exponent = Some(exp_str.parse::<f64>().map_err(|_| {
                ParserError::InvalidExponentDigits {
                    span: digits.span,
                    lexeme: digits_str,
                }
            })?);
        } else if let Some(rest) = text.strip_prefix(['e', 'E'])
            && rest.starts_with(|c: char| c.is_ascii_digit())
        {
            // exponent lexed as a single identifier, possibly with a
            // suffix glued on ("1e3", "1e3k")
            cursor.next().expect("just peeked");
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            let tail = &rest[digits.len()..];
            exponent = Some(digits.parse::<f64>().expect("checked ascii digits"));
            if !tail.is_empty() {
                suffix = ValueSuffix::from_str(tail);
            }
        } else {
            cursor.next().expect("just peeked");
            suffix = ValueSuffix::from_str(text);
        }
    }

    // a suffix may still follow an exponent ("1e3k")
    if suffix.is_none()
        && let Some(peek) = cursor.peek()
        && peek.kind == TokenKind::Ident
    {
        let text = token_text(src, peek);
        cursor.next().expect("just peeked");
        suffix = ValueSuffix::from_str(text);
    }

    let value: f64 = number_str
        .parse()
        .map_err(|_| ParserError::InvalidNumericLiteral {
            span: Some(value_span),
            lexeme: number_str.clone(),
        })?;

    Ok(Value {
        value,
        exponent,
        suffix,
    })
}
