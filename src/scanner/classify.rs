//! Character-class dispatch for the scanner.
//!
//! Everything here is a pure function of one or two characters, so the
//! punctuation table and the maximal-munch rule can be exercised without
//! running a scan.

use crate::scanner::token::TokenKind;

/// What the first character of a lexeme commits the scanner to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Always a one-character token.
    Single(TokenKind),
    /// One of `! = < >`: the short kind, or the long kind when `=` follows.
    Compound { short: TokenKind, long: TokenKind },
    /// `/`: a line comment when doubled, otherwise division.
    Slash,
    /// Space, carriage return, tab.
    Whitespace,
    Newline,
    Quote,
    Digit,
    IdentStart,
    Unexpected,
}

pub fn classify(c: char) -> CharClass {
    if let Some(kind) = single_char_kind(c) {
        return CharClass::Single(kind);
    }
    if let Some((short, long)) = compound_kinds(c) {
        return CharClass::Compound { short, long };
    }
    match c {
        '/' => CharClass::Slash,
        ' ' | '\r' | '\t' => CharClass::Whitespace,
        '\n' => CharClass::Newline,
        '"' => CharClass::Quote,
        c if is_digit(c) => CharClass::Digit,
        c if is_ident_start(c) => CharClass::IdentStart,
        _ => CharClass::Unexpected,
    }
}

pub fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '-' => TokenKind::Minus,
        '+' => TokenKind::Plus,
        ';' => TokenKind::Semicolon,
        '*' => TokenKind::Star,
        _ => return None,
    };
    Some(kind)
}

/// `(short, long)` kinds for characters that may absorb a trailing `=`.
pub fn compound_kinds(c: char) -> Option<(TokenKind, TokenKind)> {
    match c {
        '!' => Some((TokenKind::Bang, TokenKind::BangEqual)),
        '=' => Some((TokenKind::Equal, TokenKind::EqualEqual)),
        '<' => Some((TokenKind::Less, TokenKind::LessEqual)),
        '>' => Some((TokenKind::Greater, TokenKind::GreaterEqual)),
        _ => None,
    }
}

/// Maximal munch: the two-character form wins whenever `next` is `=`.
pub fn munch(short: TokenKind, long: TokenKind, next: Option<char>) -> TokenKind {
    if next == Some('=') { long } else { short }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('(', TokenKind::LeftParen)]
    #[case(')', TokenKind::RightParen)]
    #[case('{', TokenKind::LeftBrace)]
    #[case('}', TokenKind::RightBrace)]
    #[case(',', TokenKind::Comma)]
    #[case('.', TokenKind::Dot)]
    #[case('-', TokenKind::Minus)]
    #[case('+', TokenKind::Plus)]
    #[case(';', TokenKind::Semicolon)]
    #[case('*', TokenKind::Star)]
    fn punctuation_is_single(#[case] c: char, #[case] kind: TokenKind) {
        assert_eq!(classify(c), CharClass::Single(kind));
    }

    #[rstest]
    #[case('!', TokenKind::Bang, TokenKind::BangEqual)]
    #[case('=', TokenKind::Equal, TokenKind::EqualEqual)]
    #[case('<', TokenKind::Less, TokenKind::LessEqual)]
    #[case('>', TokenKind::Greater, TokenKind::GreaterEqual)]
    fn operators_are_compound(#[case] c: char, #[case] short: TokenKind, #[case] long: TokenKind) {
        assert_eq!(classify(c), CharClass::Compound { short, long });
    }

    #[rstest]
    #[case(Some('='), TokenKind::BangEqual)]
    #[case(Some('!'), TokenKind::Bang)]
    #[case(Some(' '), TokenKind::Bang)]
    #[case(None, TokenKind::Bang)]
    fn munch_prefers_two_chars(#[case] next: Option<char>, #[case] expected: TokenKind) {
        assert_eq!(munch(TokenKind::Bang, TokenKind::BangEqual, next), expected);
    }

    #[rstest]
    #[case('/', CharClass::Slash)]
    #[case(' ', CharClass::Whitespace)]
    #[case('\r', CharClass::Whitespace)]
    #[case('\t', CharClass::Whitespace)]
    #[case('\n', CharClass::Newline)]
    #[case('"', CharClass::Quote)]
    #[case('0', CharClass::Digit)]
    #[case('9', CharClass::Digit)]
    #[case('a', CharClass::IdentStart)]
    #[case('Z', CharClass::IdentStart)]
    #[case('_', CharClass::IdentStart)]
    #[case('@', CharClass::Unexpected)]
    #[case('#', CharClass::Unexpected)]
    #[case('é', CharClass::Unexpected)]
    fn fallback_classes(#[case] c: char, #[case] expected: CharClass) {
        assert_eq!(classify(c), expected);
    }

    #[test]
    fn identifier_continue_accepts_digits() {
        assert!(is_ident_continue('7'));
        assert!(!is_ident_start('7'));
        assert!(!is_ident_continue('-'));
    }
}
