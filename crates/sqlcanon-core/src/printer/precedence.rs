//! Operator precedence used to decide where brackets are needed.
//!
//! Higher binds tighter. The ordering mirrors the grammar's binding powers,
//! so an expression printed without brackets reads back as the same tree.

use crate::ast::Expression;

/// Precedence of anything that is not an operator. Never bracketed.
pub const ATOM: u8 = 100;

/// Precedence of a binary (or BETWEEN / IN) operator.
pub fn infix(name: &str) -> u8 {
    match name {
        "*" | "/" | "%" => 10,
        "+" | "-" => 9,
        "=" | "!=" | "<" | "<=" | ">" | ">=" | "LIKE" | "NOT LIKE" | "IS" | "IS NOT" | "IN"
        | "NOT IN" | "BETWEEN" | "NOT BETWEEN" => 8,
        "AND" => 7,
        "OR" => 6,
        _ => ATOM,
    }
}

/// Precedence of a prefix operator.
pub fn prefix(name: &str) -> u8 {
    match name {
        "NOT" => 7,
        "-" => 11,
        _ => ATOM,
    }
}

/// Lowest precedence an operand of the prefix operator `name` may have
/// without brackets.
pub fn prefix_operand_floor(name: &str) -> u8 {
    match name {
        "NOT" => 8,
        "-" => 11,
        _ => 0,
    }
}

/// Precedence of `expr` when it appears as an operand.
pub fn of(expr: &Expression) -> u8 {
    match expr {
        Expression::FunctionCall(call) if call.infix => {
            if call.arguments.len() == 1 {
                prefix(&call.name)
            } else {
                infix(&call.name)
            }
        }
        _ => ATOM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ordering() {
        assert!(infix("*") > infix("+"));
        assert!(infix("+") > infix("="));
        assert!(infix("NOT IN") > infix("AND"));
        assert!(infix("AND") > infix("OR"));
        assert_eq!(infix("||"), ATOM);
    }

    #[test]
    fn test_not_sits_between_and_and_comparisons() {
        assert!(prefix("NOT") < infix("="));
        assert!(prefix("NOT") >= infix("AND"));
        assert!(prefix("-") > infix("*"));
    }

    #[test]
    fn test_of_expression() {
        let sum = Expression::int(1).binary("+", Expression::int(2));
        assert_eq!(of(&sum), 9);
        assert_eq!(of(&Expression::int(1).neg()), 11);
        assert_eq!(of(&Expression::call("abs", vec![Expression::int(1)])), ATOM);
    }
}
