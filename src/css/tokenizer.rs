//! logos-based tokenizer for declaration blocks.
//!
//! Longest match wins; for equal lengths logos prefers the pattern with the
//! higher priority (more literal characters). That ordering gives us:
//! - `#ff00aa` matches [`Token::HexColor`], `#ff00aa-bg` matches [`Token::HashName`]
//! - `9pt` matches [`Token::Dimension`], not `Number` + `Ident`
//! - `rgb(1, 2, 3)` matches [`Token::RgbFunction`], not `Ident` + punctuation

use logos::Logos;

/// Token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens ──────────────────────────────────────────────

    /// `rgb(r, g, b)` with integer channels.
    #[regex(r"rgb\([ \t]*[0-9]+[ \t]*,[ \t]*[0-9]+[ \t]*,[ \t]*[0-9]+[ \t]*\)")]
    RgbFunction,

    /// `url(...)`, unquoted contents.
    #[regex(r"url\([^)]*\)")]
    Url,

    /// Exactly six hex digits after `#`.
    #[regex(r"#[0-9a-fA-F]{6}")]
    HexColor,

    /// Any other `#`-prefixed name: theme references like `#org-eclipse-bg`
    /// and short hex forms like `#fff`.
    #[regex(r"#[a-zA-Z0-9_][a-zA-Z0-9_.-]*")]
    HashName,

    /// Percentage: `50%`, `-10%`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?%")]
    Percentage,

    /// Number with a unit suffix: `9pt`, `2px`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?[a-zA-Z]+")]
    Dimension,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: property names, keywords, color names.
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Punctuation ──────────────────────────────────────────────────

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,
}

/// Tokenize input into `(Token, text)` pairs. Unlexable input is skipped.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            tokens(": ; ,"),
            vec![Token::Colon, Token::Semicolon, Token::Comma]
        );
    }

    #[test]
    fn hex_color_vs_hash_name() {
        assert_eq!(tokens("#ff00aa"), vec![Token::HexColor]);
        assert_eq!(tokens("#FF00AA"), vec![Token::HexColor]);
        assert_eq!(tokens("#fff"), vec![Token::HashName]);
        assert_eq!(tokens("#ff00aa80"), vec![Token::HashName]);
        assert_eq!(tokens("#org-eclipse-ui-bg"), vec![Token::HashName]);
        assert_eq!(tokens("#org.eclipse.ui.bg"), vec![Token::HashName]);
    }

    #[test]
    fn rgb_function() {
        let toks = tokenize("rgb(255, 0, 12)");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].0, Token::RgbFunction);
        assert_eq!(toks[0].1, "rgb(255, 0, 12)");
    }

    #[test]
    fn url_function() {
        let toks = tokenize("url(icons/close.png)");
        assert_eq!(toks, vec![(Token::Url, "url(icons/close.png)".to_string())]);
    }

    #[test]
    fn numbers_and_units() {
        assert_eq!(
            tokens("9 9pt 50% -3 2.5px"),
            vec![
                Token::Number,
                Token::Dimension,
                Token::Percentage,
                Token::Number,
                Token::Dimension,
            ]
        );
    }

    #[test]
    fn idents_with_dashes() {
        let toks = tokenize("widget-background font-family");
        assert_eq!(
            toks,
            vec![
                (Token::Ident, "widget-background".to_string()),
                (Token::Ident, "font-family".to_string()),
            ]
        );
    }

    #[test]
    fn strings() {
        assert_eq!(
            tokens(r#""Segoe UI" 'Sans'"#),
            vec![Token::StringLiteral, Token::StringLiteralSingle]
        );
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(tokens("  \n\t red  "), vec![Token::Ident]);
    }
}
