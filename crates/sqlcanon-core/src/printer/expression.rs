//! Expression, literal and identifier rendering.

use super::precedence;
use super::{Printable, SqlPrinter};
use crate::ast::{Expression, FunctionCall, Identifier, LiteralValue};
use crate::lexer::{Keyword, QuoteStyle};

impl Printable for Expression {
    fn print(&self, printer: &mut SqlPrinter) {
        match self {
            Self::Literal(literal) => print_literal(printer, &literal.value),
            Self::FunctionCall(call) if call.infix => print_operator(printer, call),
            Self::FunctionCall(call) => print_call(printer, call),
            Self::Reference(reference) => reference.identifier.print(printer),
            Self::Case(case) => {
                printer.write("CASE");
                if let Some(input) = &case.input {
                    printer.write(" ");
                    input.print(printer);
                }
                printer.indented(|printer| {
                    for (when, then) in &case.branches {
                        printer.newline();
                        printer.write("WHEN ");
                        when.print(printer);
                        printer.write(" THEN ");
                        then.print(printer);
                    }
                    if let Some(otherwise) = &case.otherwise {
                        printer.newline();
                        printer.write("ELSE ");
                        otherwise.print(printer);
                    }
                });
                printer.newline();
                printer.write("END");
            }
            Self::Cast(cast) => {
                printer.write(if cast.try_cast { "TRY_CAST(" } else { "CAST(" });
                cast.expression.print(printer);
                printer.write(" AS ");
                printer.write(&cast.data_type);
                printer.write(")");
            }
            Self::ScalarSelect(select) => {
                printer.write("(");
                printer.indented(|printer| {
                    printer.newline();
                    select.query.print(printer);
                });
                printer.newline();
                printer.write(")");
            }
        }
    }
}

pub(super) fn print_call(printer: &mut SqlPrinter, call: &FunctionCall) {
    if call.name == "ARRAY" {
        printer.write("ARRAY[");
        printer.comma_list(&call.arguments);
        printer.write("]");
        return;
    }
    printer.write(&call.name);
    printer.write("(");
    if call.distinct {
        printer.write("DISTINCT ");
    }
    printer.comma_list(&call.arguments);
    printer.write(")");
}

fn print_operator(printer: &mut SqlPrinter, call: &FunctionCall) {
    let name = call.name.as_str();
    match (name, call.arguments.as_slice()) {
        (_, [operand]) => {
            printer.write(name);
            printer.write(" ");
            let floor = precedence::prefix_operand_floor(name);
            print_operand(printer, operand, precedence::of(operand) < floor);
        }
        ("IN" | "NOT IN", [probe, list @ ..]) => {
            let own = precedence::infix(name);
            print_operand(printer, probe, precedence::of(probe) < own);
            printer.write(" ");
            printer.write(name);
            printer.write(" ");
            if let [subquery @ Expression::ScalarSelect(_)] = list {
                subquery.print(printer);
            } else {
                printer.write("(");
                printer.comma_list(list);
                printer.write(")");
            }
        }
        ("BETWEEN" | "NOT BETWEEN", [probe, low, high]) => {
            let own = precedence::infix(name);
            print_operand(printer, probe, precedence::of(probe) < own);
            printer.write(" ");
            printer.write(name);
            printer.write(" ");
            print_operand(printer, low, precedence::of(low) <= own);
            printer.write(" AND ");
            print_operand(printer, high, precedence::of(high) <= own);
        }
        (_, [left, rest @ ..]) => {
            let own = precedence::infix(name);
            print_operand(printer, left, precedence::of(left) < own);
            for right in rest {
                printer.write(" ");
                printer.write(name);
                printer.write(" ");
                print_operand(printer, right, precedence::of(right) <= own);
            }
        }
        (_, []) => print_call(printer, call),
    }
}

fn print_operand(printer: &mut SqlPrinter, operand: &Expression, bracket: bool) {
    if bracket {
        printer.write("(");
        operand.print(printer);
        printer.write(")");
    } else {
        operand.print(printer);
    }
}

fn print_literal(printer: &mut SqlPrinter, value: &LiteralValue) {
    match value {
        LiteralValue::Date(date) => {
            printer.write("DATE ");
            print_string(printer, date);
        }
        LiteralValue::String(text) => print_string(printer, text),
        LiteralValue::Int(n) => printer.write(&n.to_string()),
        LiteralValue::Float(v) => {
            if v.fract() == 0.0 && v.is_finite() {
                printer.write(&format!("{v:.1}"));
            } else {
                printer.write(&v.to_string());
            }
        }
        LiteralValue::Boolean(true) => printer.write("TRUE"),
        LiteralValue::Boolean(false) => printer.write("FALSE"),
        LiteralValue::Null => printer.write("NULL"),
        LiteralValue::Interval(interval) => {
            printer.write("INTERVAL ");
            print_string(printer, interval);
        }
    }
}

/// Quoted with the dialect's string delimiter; `\` and the delimiter are
/// backslash-escaped.
fn print_string(printer: &mut SqlPrinter, text: &str) {
    let quote = printer
        .dialect
        .string_quote()
        .map_or('\'', QuoteStyle::delimiter);
    let escaped = text
        .replace('\\', "\\\\")
        .replace(quote, &format!("\\{quote}"));
    print_delimited(printer, quote, &escaped);
}

fn print_delimited(printer: &mut SqlPrinter, quote: char, body: &str) {
    let mut delimiter = [0; 4];
    let delimiter = quote.encode_utf8(&mut delimiter);
    printer.write(delimiter);
    printer.write(body);
    printer.write(delimiter);
}

impl Printable for Identifier {
    fn print(&self, printer: &mut SqlPrinter) {
        for part in &self.qualifier {
            print_name(printer, part);
            printer.write(".");
        }
        if self.is_wildcard() {
            printer.write("*");
        } else {
            print_name(printer, &self.name);
        }
    }
}

/// Writes a name, quoted unless the lexer reads it back as a plain
/// identifier. A delimiter inside the name is doubled.
pub(super) fn print_name(printer: &mut SqlPrinter, name: &str) {
    if !needs_quoting(name) {
        printer.write(name);
        return;
    }
    let quote = printer
        .dialect
        .identifier_quote()
        .map_or('"', QuoteStyle::delimiter);
    let escaped = name
        .replace('\\', "\\\\")
        .replace(quote, &format!("{quote}{quote}"));
    print_delimited(printer, quote, &escaped);
}

fn needs_quoting(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    if !(first.is_alphabetic() || first == '_') {
        return true;
    }
    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return true;
    }
    Keyword::from_str(name).is_some_and(|keyword| keyword.is_reserved())
}
