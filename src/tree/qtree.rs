use crate::tree::labeled::LabeledTree;

impl LabeledTree {
    /// Render the tree in tikz-qtree bracket syntax.
    ///
    /// Numbers and operator symbols are typeset in math mode so `-3` gets a
    /// proper minus sign. Any other label is escaped and braced.
    pub fn to_qtree(&self) -> String {
        fn write(tree: &LabeledTree, out: &mut String) {
            if tree.is_leaf() {
                out.push_str(&format_label(&tree.label));
                return;
            }
            out.push_str("[.");
            out.push_str(&format_label(&tree.label));
            for child in &tree.children {
                out.push(' ');
                write(child, out);
            }
            out.push_str(" ]");
        }

        let mut out = String::new();
        write(self, &mut out);
        out
    }
}

fn format_label(label: &str) -> String {
    if label.parse::<i64>().is_ok() || matches!(label, "+" | "-") {
        return format!("${}$", label);
    }
    format!("{{{}}}", escape_latex(label))
}

fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
