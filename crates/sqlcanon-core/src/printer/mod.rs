//! Canonical SQL rendering.
//!
//! [`SqlPrinter::from`] renders any [`Printable`] node. Output is stable:
//! parsing printed SQL and printing it again gives the same text.
//! [`SqlPrinter::with_dialect`] quotes strings and identifiers with the
//! characters a given [`Dialect`] reads them back as.
//!
//! ```rust
//! use sqlcanon_core::{parse_statement, Dialect, SqlPrinter};
//!
//! let stmt = parse_statement("select a,b from t where x<>1", true, Dialect::DEFAULT).unwrap();
//! assert_eq!(
//!     SqlPrinter::from(&stmt),
//!     "SELECT\n  a,\n  b\nFROM\n  t\nWHERE\n  x != 1;"
//! );
//! ```

mod expression;
mod precedence;
mod query;

use std::fmt;

use crate::ast::{ColumnDefinition, Expression, File, Statement};
use crate::dialect::Dialect;

/// A node that can be rendered as SQL.
pub trait Printable {
    /// Appends this node to `printer`.
    fn print(&self, printer: &mut SqlPrinter);
}

/// Accumulates SQL text with two-space indentation per nesting level.
#[derive(Debug, Default)]
pub struct SqlPrinter {
    out: String,
    depth: usize,
    dialect: Dialect,
}

impl SqlPrinter {
    /// Renders `node` as SQL for [`Dialect::DEFAULT`].
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from<N: Printable + ?Sized>(node: &N) -> String {
        Self::with_dialect(node, Dialect::DEFAULT)
    }

    /// Renders `node` as SQL that parses back to the same tree under
    /// `dialect`.
    ///
    /// A name that needs quoting uses the dialect's identifier quote. Under a
    /// dialect with no identifier quote (such as [`Dialect::HIVE`]) it falls
    /// back to `"`; such names cannot come out of parsing in that dialect.
    #[must_use]
    pub fn with_dialect<N: Printable + ?Sized>(node: &N, dialect: Dialect) -> String {
        let mut printer = Self {
            dialect,
            ..Self::default()
        };
        node.print(&mut printer);
        printer.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Starts a new line at the current depth.
    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn blank_line(&mut self) {
        self.out.push('\n');
        self.newline();
    }

    fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }

    /// `a, b, c` on one line.
    fn comma_list<T: Printable>(&mut self, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            item.print(self);
        }
    }

    /// One item per indented line, separated by commas.
    fn block<T>(&mut self, items: &[T], mut print_item: impl FnMut(&mut Self, &T)) {
        self.indented(|printer| {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    printer.write(",");
                }
                printer.newline();
                print_item(printer, item);
            }
        });
    }
}

impl Printable for File {
    fn print(&self, printer: &mut SqlPrinter) {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                printer.blank_line();
            }
            statement.print(printer);
        }
    }
}

impl Printable for Statement {
    fn print(&self, printer: &mut SqlPrinter) {
        match self {
            Self::CreateSchema(create) => {
                printer.write("CREATE SCHEMA ");
                if create.if_not_exists {
                    printer.write("IF NOT EXISTS ");
                }
                create.name.print(printer);
            }
            Self::CreateTable(create) => {
                printer.write("CREATE TABLE ");
                create.name.print(printer);
                printer.write(" (");
                printer.block(&create.columns, |printer, column| column.print(printer));
                printer.newline();
                printer.write(")");
            }
            Self::Select(select) => select.query.print(printer),
        }
        printer.write(";");
    }
}

impl Printable for ColumnDefinition {
    fn print(&self, printer: &mut SqlPrinter) {
        self.name.print(printer);
        printer.write(" ");
        printer.write(&self.data_type);
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SqlPrinter::from(self))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SqlPrinter::from(self))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SqlPrinter::from(self))
    }
}
