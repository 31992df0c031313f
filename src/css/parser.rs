//! Recursive descent parser for declaration blocks and single values.
//!
//! Turns text like `color: #ff0000; font: bold 9pt "Sans"` into
//! [`Declaration`]s carrying [`CssValue`] trees. Uses the logos tokenizer from
//! [`crate::css::tokenizer`]. Selectors are the cascade's business and are not
//! parsed here.

use logos::Logos;

use crate::css::tokenizer::Token;
use crate::css::value::{CssValue, Declaration};

/// Errors from declaration parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// A positioned token.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    /// Index in the token stream (for error reporting).
    pos: usize,
}

/// Strip CSS block comments (`/* ... */`) from the input, replacing each
/// comment with a single space.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        result.push(' ');
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            // Unterminated comment: drop the remainder.
            None => rest = "",
        }
    }
    result.push_str(rest);

    result
}

fn tokenize_positioned(input: &str) -> Vec<PToken> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .enumerate()
        .map(|(pos, (token, span))| PToken {
            token,
            text: input[span].to_string(),
            pos,
        })
        .collect()
}

/// Parse a declaration block body: `prop: value; prop: value`.
///
/// A trailing semicolon is optional. An empty input yields no declarations.
/// The first malformed declaration fails the whole block; see
/// [`parse_declarations_lenient`] for the recovering variant.
pub fn parse_declarations(input: &str) -> Result<Vec<Declaration>, ParseError> {
    let source = strip_comments(input);
    let mut parser = Parser {
        tokens: tokenize_positioned(&source),
        cursor: 0,
    };
    let mut declarations = Vec::new();

    while parser.skip_semicolons() {
        declarations.push(parser.parse_declaration()?);
    }

    Ok(declarations)
}

/// Parse a declaration block body, dropping malformed declarations.
///
/// A declaration that fails to parse is skipped up to and including its
/// terminating `;` and parsing resumes with the next one. Returns the good
/// declarations together with one error per dropped declaration.
pub fn parse_declarations_lenient(input: &str) -> (Vec<Declaration>, Vec<ParseError>) {
    let source = strip_comments(input);
    let mut parser = Parser {
        tokens: tokenize_positioned(&source),
        cursor: 0,
    };
    let mut declarations = Vec::new();
    let mut errors = Vec::new();

    while parser.skip_semicolons() {
        let start = parser.cursor;
        match parser.parse_declaration() {
            Ok(declaration) => declarations.push(declaration),
            Err(err) => {
                tracing::debug!(error = %err, "skipping malformed declaration");
                errors.push(err);
                // The failed attempt may have consumed the terminator.
                parser.cursor = start;
                parser.skip_past_semicolon();
            }
        }
    }

    (declarations, errors)
}

/// Parse a standalone property value such as `gradient linear red 50% blue`.
pub fn parse_value(input: &str) -> Result<CssValue, ParseError> {
    let source = strip_comments(input);
    let mut parser = Parser {
        tokens: tokenize_positioned(&source),
        cursor: 0,
    };
    let value = parser.parse_value_list()?;
    if let Some(tok) = parser.peek() {
        return Err(ParseError::UnexpectedToken {
            position: tok.pos,
            message: format!("trailing input after value: '{}'", tok.text),
        });
    }
    Ok(value)
}

struct Parser {
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<PToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    /// Skip empty declarations. Returns whether any input remains.
    fn skip_semicolons(&mut self) -> bool {
        while self.peek().is_some_and(|t| t.token == Token::Semicolon) {
            self.cursor += 1;
        }
        !self.is_eof()
    }

    fn skip_past_semicolon(&mut self) {
        while let Some(tok) = self.advance() {
            if tok.token == Token::Semicolon {
                break;
            }
        }
    }

    /// Parse `property: values [;]`.
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let prop_tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected property name".into()))?;
        if prop_tok.token != Token::Ident {
            return Err(ParseError::UnexpectedToken {
                position: prop_tok.pos,
                message: format!(
                    "expected property name, got {:?} '{}'",
                    prop_tok.token, prop_tok.text
                ),
            });
        }

        match self.advance() {
            Some(PToken {
                token: Token::Colon,
                ..
            }) => {}
            Some(other) => {
                return Err(ParseError::UnexpectedToken {
                    position: other.pos,
                    message: format!("expected ':', got '{}'", other.text),
                });
            }
            None => return Err(ParseError::UnexpectedEof("expected ':'".into())),
        }

        let value = self.parse_value_list()?;

        if self.peek().is_some_and(|t| t.token == Token::Semicolon) {
            self.advance();
        }

        Ok(Declaration::new(prop_tok.text.to_ascii_lowercase(), value))
    }

    /// Parse values up to `;` or end of input.
    ///
    /// Comma-separated alternatives (font family fallbacks) keep only the
    /// first alternative. A single value is returned bare, several values as a
    /// [`CssValue::ValueList`].
    fn parse_value_list(&mut self) -> Result<CssValue, ParseError> {
        let mut values = Vec::new();
        let mut skipping_alternatives = false;

        while let Some(tok) = self.peek() {
            match tok.token {
                Token::Semicolon => break,
                Token::Comma => {
                    skipping_alternatives = true;
                    self.advance();
                }
                _ if skipping_alternatives => {
                    self.advance();
                }
                _ => values.push(self.parse_single_value()?),
            }
        }

        match values.len() {
            0 => Err(ParseError::UnexpectedEof("expected a value".into())),
            1 => Ok(values.remove(0)),
            _ => Ok(CssValue::ValueList(values)),
        }
    }

    fn parse_single_value(&mut self) -> Result<CssValue, ParseError> {
        let tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected a value".into()))?;
        let invalid = |message: String| ParseError::UnexpectedToken {
            position: tok.pos,
            message,
        };

        match tok.token {
            Token::Ident | Token::HashName => Ok(CssValue::Ident(tok.text.clone())),
            Token::HexColor => {
                let rgba = crate::css::value::Rgba::from_hex6(&tok.text)
                    .ok_or_else(|| invalid(format!("invalid hex color: {}", tok.text)))?;
                Ok(CssValue::RgbColor(rgba.r, rgba.g, rgba.b))
            }
            Token::RgbFunction => {
                let inner = &tok.text["rgb(".len()..tok.text.len() - 1];
                let mut channels = inner.split(',').map(|part| {
                    part.trim()
                        .parse::<u32>()
                        .map(|v| v.min(255) as u8)
                        .map_err(|_| invalid(format!("invalid rgb channel: {part}")))
                });
                match (channels.next(), channels.next(), channels.next()) {
                    (Some(r), Some(g), Some(b)) => Ok(CssValue::RgbColor(r?, g?, b?)),
                    _ => Err(invalid(format!("invalid rgb(): {}", tok.text))),
                }
            }
            Token::Url => {
                let inner = tok.text["url(".len()..tok.text.len() - 1].trim();
                let inner = inner
                    .strip_prefix(['"', '\''])
                    .and_then(|s| s.strip_suffix(['"', '\'']))
                    .unwrap_or(inner);
                Ok(CssValue::Uri(inner.to_string()))
            }
            Token::Percentage => {
                let number = &tok.text[..tok.text.len() - 1];
                let n: f32 = number
                    .parse()
                    .map_err(|_| invalid(format!("invalid percentage: {}", tok.text)))?;
                Ok(CssValue::Percentage(n.round() as i32))
            }
            Token::Dimension => {
                let (num_str, unit_str) = split_dimension(&tok.text)
                    .ok_or_else(|| invalid(format!("invalid dimension: {}", tok.text)))?;
                let n: f32 = num_str
                    .parse()
                    .map_err(|_| invalid(format!("invalid number in dimension: {num_str}")))?;
                Ok(CssValue::Dimension(n, unit_str.to_ascii_lowercase()))
            }
            Token::Number => {
                let n: f32 = tok
                    .text
                    .parse()
                    .map_err(|_| invalid(format!("invalid number: {}", tok.text)))?;
                Ok(CssValue::Number(n))
            }
            Token::StringLiteral | Token::StringLiteralSingle => {
                let inner = &tok.text[1..tok.text.len() - 1];
                Ok(CssValue::StringLiteral(inner.to_string()))
            }
            Token::Colon | Token::Semicolon | Token::Comma => Err(invalid(format!(
                "unexpected token in value: {:?} '{}'",
                tok.token, tok.text
            ))),
        }
    }
}

/// Split a dimension string like "9pt" into (number_part, unit_part).
fn split_dimension(s: &str) -> Option<(&str, &str)> {
    let unit_start = s
        .char_indices()
        .find(|(i, c)| !c.is_ascii_digit() && *c != '.' && !(*c == '-' && *i == 0))
        .map(|(i, _)| i)?;

    if unit_start == 0 || unit_start >= s.len() {
        return None;
    }

    Some((&s[..unit_start], &s[unit_start..]))
}
