use std::fmt;

use crate::expression::ast::Expression;

impl Expression {
    /// Renders the expression as `left op right`.
    ///
    /// With `parenthesize` set, every internal node is wrapped in parentheses,
    /// including the root. Leaves always render as their plain decimal value.
    pub fn render(&self, parenthesize: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_expression(&mut out, self, parenthesize);
        out
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_expression(f, self, true)
    }
}

fn write_expression<W: fmt::Write>(
    w: &mut W,
    expr: &Expression,
    parenthesize: bool,
) -> fmt::Result {
    match expr {
        Expression::Number(n) => write!(w, "{}", n),
        Expression::Binary {
            op, left, right, ..
        } => {
            if parenthesize {
                write!(w, "(")?;
            }
            write_expression(w, left, parenthesize)?;
            write!(w, " {} ", op)?;
            write_expression(w, right, parenthesize)?;
            if parenthesize {
                write!(w, ")")?;
            }
            Ok(())
        }
    }
}
