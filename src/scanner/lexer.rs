use tracing::{debug, trace};

use crate::error::ScanError;
use crate::report::Reporter;
use crate::scanner::ScanOutcome;
use crate::scanner::classify::{self, CharClass};
use crate::scanner::token::{Literal, Span, Token, TokenKind, keyword_kind};

/// Single-pass scanner over one source buffer.
///
/// `start` marks the first byte of the lexeme being scanned and `current` the
/// next unread byte; both always sit on `char` boundaries and
/// `start <= current <= source.len()` holds throughout. `line` is 1-based and
/// advances on every `\n` consumed, including those inside string literals.
pub struct Scanner<'src, 'r> {
    source: &'src str,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
    reporter: &'r mut dyn Reporter,
}

impl<'src, 'r> Scanner<'src, 'r> {
    pub fn new(source: &'src str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> ScanOutcome {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line, self.source.len()));
        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan complete"
        );

        ScanOutcome {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match classify::classify(c) {
            CharClass::Single(kind) => self.add_token(kind),
            CharClass::Compound { short, long } => {
                let kind = classify::munch(short, long, self.peek());
                if kind == long {
                    self.advance();
                }
                self.add_token(kind);
            }
            CharClass::Slash => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            CharClass::Whitespace => {}
            CharClass::Newline => self.line += 1,
            CharClass::Quote => self.string(),
            CharClass::Digit => self.number(),
            CharClass::IdentStart => self.identifier(),
            CharClass::Unexpected => {
                let span = self.lexeme_span();
                self.error(ScanError::unexpected_character(c, self.line, span));
            }
        }
    }

    /// Drops everything up to, but not including, the next newline.
    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Scans a string literal; the opening quote is already consumed.
    ///
    /// The token records the line current when the closing quote is consumed,
    /// so a literal spanning lines carries its last line. An unterminated
    /// literal is reported at the line where input ran out.
    fn string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            let span = self.lexeme_span();
            self.error(ScanError::unterminated_string(self.line, span));
            return;
        }

        // closing quote
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::String, Literal::String(value.to_string()));
    }

    /// Digits, then a fraction only when a digit follows the `.`; `123.`
    /// leaves the dot for the next token.
    fn number(&mut self) {
        self.consume_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(classify::is_digit) {
            self.advance();
            self.consume_digits();
        }

        let text = &self.source[self.start..self.current];
        let value = match text.parse::<f64>() {
            Ok(value) => value,
            Err(e) => unreachable!("digit run '{text}' is a valid f64: {e}"),
        };
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(classify::is_digit) {
            self.advance();
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(classify::is_ident_continue) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = keyword_kind(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next()?;
        chars.next()
    }

    fn lexeme_span(&self) -> Span {
        Span::new(self.start, self.current - self.start)
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(
            kind,
            &self.source[self.start..self.current],
            self.line,
            self.lexeme_span(),
        );
        self.push(token);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let token = Token::new(
            kind,
            &self.source[self.start..self.current],
            self.line,
            self.lexeme_span(),
        )
        .with_literal(literal);
        self.push(token);
    }

    fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }

    fn error(&mut self, error: ScanError) {
        let message = error.to_string();
        debug!(line = error.line(), %message, "scan error");
        self.reporter.report(error.line(), "", &message);
        self.errors.push(error);
    }
}
