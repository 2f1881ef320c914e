//! SQL Tokenizer implementation.

use super::{Keyword, QuoteStyle, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input.
///
/// The lexer is an iterator: it yields every token followed by exactly one
/// [`TokenKind::Eof`] and then stops. Malformed input never stops it; an
/// unrecognized character or unterminated quote becomes a
/// [`TokenKind::Error`] token and scanning resumes after it.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Set once the end-of-input token has been yielded.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            finished: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes `expected` if it comes next.
    fn eat(&mut self, expected: char) -> bool {
        let matched = self.peek() == Some(expected);
        if matched {
            self.pos += expected.len_utf8();
        }
        matched
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Moves past whitespace, `--` line comments and `/* */` block comments.
    /// An unclosed block comment runs to the end of input.
    fn skip_trivia(&mut self) {
        loop {
            self.eat_while(char::is_whitespace);
            let rest = self.rest();
            if rest.starts_with("--") {
                self.pos += rest.find('\n').unwrap_or(rest.len());
            } else if let Some(body) = rest.strip_prefix("/*") {
                self.pos += body.find("*/").map_or(rest.len(), |end| end + 4);
            } else {
                return;
            }
        }
    }

    fn emit(&self, kind: TokenKind) -> Token<'a> {
        let text = &self.input[self.start..self.pos];
        Token::new(kind, Span::new(self.start, self.pos), text)
    }

    fn word(&mut self) -> Token<'a> {
        self.eat_while(|c| c.is_alphanumeric() || c == '_');
        let kind = Keyword::from_str(&self.input[self.start..self.pos])
            .map_or(TokenKind::Identifier, TokenKind::Keyword);
        self.emit(kind)
    }

    /// Quote-delimited text, left undecoded. A doubled delimiter and a
    /// backslash followed by any character do not close it.
    fn quoted(&mut self, style: QuoteStyle) -> Token<'a> {
        let delimiter = style.delimiter();
        while let Some(c) = self.bump() {
            if c == '\\' {
                self.bump();
            } else if c == delimiter && !self.eat(delimiter) {
                return self.emit(TokenKind::Quoted(style));
            }
        }
        self.emit(TokenKind::Error)
    }

    /// True if the input after the current character starts with a digit,
    /// optionally preceded by a sign.
    fn exponent_follows(&self) -> bool {
        let mut after = self.rest().chars().skip(1);
        match after.next() {
            Some('+' | '-') => after.next().is_some_and(|c| c.is_ascii_digit()),
            next => next.is_some_and(|c| c.is_ascii_digit()),
        }
    }

    fn number(&mut self) -> Token<'a> {
        let mut kind = TokenKind::Integer;
        self.eat_while(|c| c.is_ascii_digit());

        let fraction = self.rest().strip_prefix('.');
        if fraction.is_some_and(|f| f.starts_with(|c: char| c.is_ascii_digit())) {
            kind = TokenKind::Float;
            self.bump();
            self.eat_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek(), Some('e' | 'E')) && self.exponent_follows() {
            kind = TokenKind::Float;
            self.bump();
            if !self.eat('+') {
                self.eat('-');
            }
            self.eat_while(|c| c.is_ascii_digit());
        }

        self.emit(kind)
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_trivia();
        self.start = self.pos;

        let Some(c) = self.bump() else {
            return self.emit(TokenKind::Eof);
        };

        let kind = match c {
            '<' if self.eat('=') => TokenKind::LtEq,
            '<' if self.eat('>') => TokenKind::NotEq,
            '>' if self.eat('=') => TokenKind::GtEq,
            '!' if self.eat('=') => TokenKind::NotEq,
            '\'' => return self.quoted(QuoteStyle::Single),
            '"' => return self.quoted(QuoteStyle::Double),
            '`' => return self.quoted(QuoteStyle::Back),
            c if c.is_ascii_digit() => return self.number(),
            c if c.is_alphabetic() || c == '_' => return self.word(),
            c => punctuation(c).unwrap_or(TokenKind::Error),
        };
        self.emit(kind)
    }
}

fn punctuation(c: char) -> Option<TokenKind> {
    let kind = match c {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        '.' => TokenKind::Dot,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Percent,
        '=' => TokenKind::Eq,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        _ => return None,
    };
    Some(kind)
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}
