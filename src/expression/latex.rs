use crate::expression::ast::{Expression, Operator};

impl Expression {
    /// Render the expression as inline LaTeX math.
    /// - Brackets use `\left(` / `\right)` so they scale with nested terms
    /// - Negative leaves are braced so `a - -3` reads as `a - {-3}`
    /// - With `parenthesize` set, every internal node except the root is
    ///   bracketed; unlike `render(true)` the outermost pair is omitted
    /// - With `parenthesize` unset, brackets are still kept around a
    ///   subtracted compound term, since `a - (b + c)` differs from `a - b + c`
    pub fn to_latex(&self, parenthesize: bool) -> String {
        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn number_to_string(n: i64) -> String {
            if n < 0 {
                format!("{{{}}}", n)
            } else {
                n.to_string()
            }
        }

        fn fmt(expr: &Expression, parenthesize: bool, is_root: bool) -> String {
            match expr {
                Expression::Number(n) => number_to_string(*n),
                Expression::Binary {
                    op, left, right, ..
                } => {
                    let ls = fmt(left, parenthesize, false);
                    let mut rs = fmt(right, parenthesize, false);
                    if !parenthesize && *op == Operator::Subtract && !right.is_leaf() {
                        rs = wrap_parens(rs);
                    }
                    let body = format!("{} {} {}", ls, op.symbol(), rs);
                    if parenthesize && !is_root {
                        wrap_parens(body)
                    } else {
                        body
                    }
                }
            }
        }

        fmt(self, parenthesize, true)
    }
}
