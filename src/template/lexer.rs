//! Placeholder scanner for format templates using logos

use logos::Logos;

/// Byte range in a template
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `{` followed by one or more ASCII digits and `}`
    #[regex(r"\{[0-9]+\}")]
    Placeholder,

    /// A brace that does not start a placeholder (`{}`, `{x}`, `{12` ...)
    #[token("{")]
    BraceOpen,

    /// Run of literal text up to the next brace
    #[regex(r"[^{]+")]
    Text,
}

/// Lex a template into tokens with spans
pub fn lex(template: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(template)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// A placeholder found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte range of the placeholder, braces included
    pub span: Span,
    /// The matched text, e.g. `{1}`
    pub text: &'a str,
}

impl Placeholder<'_> {
    /// The digits between the braces.
    ///
    /// Informational only: arguments are paired with placeholders by
    /// discovery order, never by this value.
    pub fn digits(&self) -> &str {
        &self.text[1..self.text.len() - 1]
    }
}

/// Collect every placeholder in `template`, ordered by start offset
pub fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
    lex(template)
        .filter(|(tok, _)| *tok == Token::Placeholder)
        .map(|(_, span)| Placeholder {
            text: &template[span.clone()],
            span,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(template: &str) -> Vec<&str> {
        placeholders(template).into_iter().map(|p| p.text).collect()
    }

    #[test]
    fn test_token_stream() {
        let tokens: Vec<_> = lex("a {1} {").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::Text, Token::Placeholder, Token::Text, Token::BraceOpen]
        );
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(texts("{3} then {1} then {22}"), vec!["{3}", "{1}", "{22}"]);
    }

    #[test]
    fn test_spans_point_at_placeholders() {
        let found = placeholders("ab{1}c{20}");
        assert_eq!(found[0].span, 2..5);
        assert_eq!(found[1].span, 6..10);
        assert_eq!(found[1].digits(), "20");
    }

    #[test]
    fn test_non_placeholders_ignored() {
        assert!(texts("{} {x} {-1} {1x} { 1 } {12").is_empty());
    }

    #[test]
    fn test_nested_braces() {
        // Only the inner `{1}` is a placeholder
        let found = placeholders("{{1}}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, 1..4);
    }

    #[test]
    fn test_brace_then_placeholder() {
        assert_eq!(texts("{1{2}"), vec!["{2}"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(texts("{1}-{1}"), vec!["{1}", "{1}"]);
    }

    #[test]
    fn test_unicode_text() {
        let found = placeholders("héllo {7} wörld");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "{7}");
        assert_eq!(found[0].span, 7..10);
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(lex("").count(), 0);
        assert!(placeholders("").is_empty());
    }
}
