//! Token types for the SQL lexer.

use super::Span;

macro_rules! keywords {
    ($($group:literal: { $($variant:ident = $text:literal),+ $(,)? })+) => {
        /// SQL keywords, grouped by the construct that introduces them.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($(#[doc = $group] $variant,)+)+
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const VARIANTS: &'static [Self] = &[$($(Self::$variant,)+)+];

            /// Looks a word up case-insensitively.
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(word: &str) -> Option<Self> {
                $($(if word.eq_ignore_ascii_case($text) {
                    return Some(Self::$variant);
                })+)+
                None
            }

            /// Upper-case spelling of the keyword.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($(Self::$variant => $text,)+)+
                }
            }
        }
    };
}

keywords! {
    "query": {
        Select = "SELECT", From = "FROM", Where = "WHERE", Group = "GROUP",
        By = "BY", Having = "HAVING", Order = "ORDER", Asc = "ASC",
        Desc = "DESC", Limit = "LIMIT", Distinct = "DISTINCT", All = "ALL",
        As = "AS", Union = "UNION", With = "WITH",
    }
    "join": {
        Join = "JOIN", Inner = "INNER", Left = "LEFT", Right = "RIGHT",
        Full = "FULL", Outer = "OUTER", Cross = "CROSS", On = "ON",
    }
    "ddl": {
        Create = "CREATE", Schema = "SCHEMA", Database = "DATABASE",
        Authorization = "AUTHORIZATION", Table = "TABLE", If = "IF",
        Exists = "EXISTS",
    }
    "column constraint": {
        Constraint = "CONSTRAINT", Primary = "PRIMARY", Key = "KEY",
        Unique = "UNIQUE", Default = "DEFAULT", References = "REFERENCES",
        Check = "CHECK",
    }
    "operator": {
        Not = "NOT", And = "AND", Or = "OR", In = "IN", Is = "IS",
        Like = "LIKE", Between = "BETWEEN",
    }
    "literal": {
        Null = "NULL", True = "TRUE", False = "FALSE", Date = "DATE",
        Interval = "INTERVAL", Array = "ARRAY",
    }
    "expression": {
        Case = "CASE", When = "WHEN", Then = "THEN", Else = "ELSE",
        End = "END", Cast = "CAST", TryCast = "TRY_CAST",
    }
}

impl Keyword {
    /// Returns true if the keyword can never be used as an identifier.
    ///
    /// Non-reserved keywords only carry meaning in a specific position
    /// (`DATE '...'`, `ARRAY[...]`, `CREATE SCHEMA AUTHORIZATION ...`) and are
    /// otherwise valid column, table or function names.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        !matches!(
            self,
            Self::Schema
                | Self::Database
                | Self::Authorization
                | Self::Key
                | Self::If
                | Self::Exists
                | Self::Date
                | Self::Interval
                | Self::Array
        )
    }
}

/// The quote character that delimited a quoted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteStyle {
    /// `'text'`
    Single,
    /// `"text"`
    Double,
    /// `` `text` ``
    Back,
}

impl QuoteStyle {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
            Self::Back => '`',
        }
    }
}

/// The kind of token.
///
/// Kinds carry no payload: the matched source text lives on [`Token::text`]
/// and is decoded by the AST builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42)
    Integer,
    /// Float literal (e.g., 3.14)
    Float,
    /// Quote-delimited text whose meaning depends on the dialect.
    Quoted(QuoteStyle),
    /// String literal, after dialect rewriting.
    String,

    // Identifiers and keywords
    /// Identifier, either bare or quoted after dialect rewriting.
    Identifier,
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    // Special
    /// End of input
    Eof,
    /// Unrecognized character or unterminated quoted text
    Error,
}

/// A token with its span and matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
    /// The exact source text, including any quote delimiters.
    pub text: &'a str,
    /// Set by the dialect rewriter on tokens that were quote-delimited.
    pub quote: Option<QuoteStyle>,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span, text: &'a str) -> Self {
        Self {
            kind,
            span,
            text,
            quote: None,
        }
    }

    /// Creates an end-of-input token at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, Span::at(offset), "")
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns true if the token can name a column, table or function.
    #[must_use]
    pub const fn is_identifier_like(&self) -> bool {
        match self.kind {
            TokenKind::Identifier => true,
            TokenKind::Keyword(kw) => !kw.is_reserved(),
            _ => false,
        }
    }

    /// Describes the token the way syntax errors quote it.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_eof() {
            String::from("<EOF>")
        } else {
            format!("'{}'", self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("Try_Cast"), Some(Keyword::TryCast));
        assert_eq!(Keyword::from_str("not_a_keyword"), None);
    }

    #[test]
    fn test_every_keyword_reads_back_from_its_spelling() {
        for &kw in Keyword::VARIANTS {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
            assert_eq!(
                Keyword::from_str(&kw.as_str().to_ascii_lowercase()),
                Some(kw)
            );
        }
    }

    #[test]
    fn test_reserved_keywords() {
        assert!(Keyword::Select.is_reserved());
        assert!(Keyword::Not.is_reserved());
        assert!(!Keyword::Date.is_reserved());
        assert!(!Keyword::Schema.is_reserved());
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6), "SELECT");
        let plus = Token::new(TokenKind::Plus, Span::new(0, 1), "+");
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(plus.as_keyword(), None);
    }

    #[test]
    fn test_identifier_like() {
        let date = Token::new(TokenKind::Keyword(Keyword::Date), Span::new(0, 4), "date");
        let from = Token::new(TokenKind::Keyword(Keyword::From), Span::new(0, 4), "from");
        assert!(date.is_identifier_like());
        assert!(!from.is_identifier_like());
    }

    #[test]
    fn test_describe() {
        assert_eq!(Token::eof(3).describe(), "<EOF>");
        let ident = Token::new(TokenKind::Identifier, Span::new(0, 3), "foo");
        assert_eq!(ident.describe(), "'foo'");
    }
}
