//! SQL Dialect support.
//!
//! Databases disagree on what quoted text means: ANSI SQL reads `"x"` as an
//! identifier while Hive and MySQL read it as a string. A [`Dialect`] records
//! that choice for each quote character, and [`DialectRewriter`] applies it to
//! the token stream before the grammar sees it.

mod rewriter;

pub use rewriter::DialectRewriter;

use serde::{Deserialize, Serialize};

use crate::lexer::QuoteStyle;

/// What a quote-delimited token turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    /// A string literal.
    String,
    /// A quoted identifier.
    Identifier,
}

/// Quote handling for one SQL dialect.
///
/// Fields left out of a deserialized config keep their [`Dialect::DEFAULT`]
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    /// Meaning of `'text'`.
    pub single_quote: LiteralKind,
    /// Meaning of `"text"`.
    pub double_quote: LiteralKind,
    /// Meaning of `` `text` ``.
    pub back_tick: LiteralKind,
}

impl Dialect {
    /// Single quotes delimit strings, double quotes delimit identifiers.
    pub const DEFAULT: Self = Self {
        single_quote: LiteralKind::String,
        double_quote: LiteralKind::Identifier,
        back_tick: LiteralKind::String,
    };

    /// Same as [`Dialect::DEFAULT`].
    pub const ANSI: Self = Self::DEFAULT;

    /// Double quotes delimit strings.
    pub const HIVE: Self = Self::DEFAULT.with_double_quote(LiteralKind::String);

    /// Double quotes delimit strings, backticks delimit identifiers.
    pub const MYSQL: Self = Self::DEFAULT
        .with_double_quote(LiteralKind::String)
        .with_back_tick(LiteralKind::Identifier);

    const PRESETS: [(&'static str, Self); 4] = [
        ("default", Self::DEFAULT),
        ("ansi", Self::ANSI),
        ("hive", Self::HIVE),
        ("mysql", Self::MYSQL),
    ];

    /// Returns a copy with a different meaning for single quotes.
    #[must_use]
    pub const fn with_single_quote(self, kind: LiteralKind) -> Self {
        Self {
            single_quote: kind,
            ..self
        }
    }

    /// Returns a copy with a different meaning for double quotes.
    #[must_use]
    pub const fn with_double_quote(self, kind: LiteralKind) -> Self {
        Self {
            double_quote: kind,
            ..self
        }
    }

    /// Returns a copy with a different meaning for backticks.
    #[must_use]
    pub const fn with_back_tick(self, kind: LiteralKind) -> Self {
        Self {
            back_tick: kind,
            ..self
        }
    }

    /// Returns what text delimited by `style` means in this dialect.
    #[must_use]
    pub const fn literal_kind(&self, style: QuoteStyle) -> LiteralKind {
        match style {
            QuoteStyle::Single => self.single_quote,
            QuoteStyle::Double => self.double_quote,
            QuoteStyle::Back => self.back_tick,
        }
    }

    /// The first quote style, in `"`, `` ` ``, `'` order, that delimits
    /// identifiers in this dialect.
    #[must_use]
    pub fn identifier_quote(&self) -> Option<QuoteStyle> {
        self.first_quote_for(
            LiteralKind::Identifier,
            [QuoteStyle::Double, QuoteStyle::Back, QuoteStyle::Single],
        )
    }

    /// The first quote style, in `'`, `"`, `` ` `` order, that delimits
    /// strings in this dialect.
    #[must_use]
    pub fn string_quote(&self) -> Option<QuoteStyle> {
        self.first_quote_for(
            LiteralKind::String,
            [QuoteStyle::Single, QuoteStyle::Double, QuoteStyle::Back],
        )
    }

    fn first_quote_for(&self, kind: LiteralKind, order: [QuoteStyle; 3]) -> Option<QuoteStyle> {
        order
            .into_iter()
            .find(|&style| self.literal_kind(style) == kind)
    }

    /// Looks up a built-in dialect by name (case-insensitive).
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        Self::PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|(_, dialect)| *dialect)
    }

    /// Returns the names accepted by [`Dialect::preset`].
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        Self::PRESETS.iter().map(|(name, _)| *name)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::DEFAULT
    }
}
