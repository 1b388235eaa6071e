use crate::expression::Expression;
use crate::tree::labeled::LabeledTree;

/// What goes into a rendered LaTeX document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSpec {
    /// tikz-qtree code, without the leading `\Tree`
    pub tree_code: String,
    /// Math-mode text typeset under the tree
    pub caption: Option<String>,
}

impl DocumentSpec {
    pub fn for_expression(expr: &Expression, parenthesize: bool) -> Self {
        let tree_code = LabeledTree::from(expr).to_qtree();
        let caption = format!("{} = {}", expr.to_latex(parenthesize), expr.value());
        Self {
            tree_code,
            caption: Some(caption),
        }
    }
}

/// Assemble a standalone LaTeX document that draws the tree.
pub fn render_document(spec: &DocumentSpec) -> String {
    let mut doc = String::new();
    doc.push_str("\\documentclass[border=10pt]{standalone}\n");
    doc.push_str("\\usepackage{tikz}\n");
    doc.push_str("\\usepackage{tikz-qtree}\n");
    doc.push_str("\\begin{document}\n");
    doc.push_str("\\begin{tikzpicture}[level distance=1.2cm, sibling distance=0.6cm]\n");
    doc.push_str("\\tikzset{every tree node/.style={align=center, anchor=north}}\n");
    if spec.tree_code.starts_with('[') {
        doc.push_str(&format!("\\Tree {}\n", spec.tree_code));
    } else {
        // \Tree needs a bracketed root even for a lone leaf
        doc.push_str(&format!("\\Tree [.{} ]\n", spec.tree_code));
    }
    if let Some(caption) = &spec.caption {
        doc.push_str(&format!(
            "\\node[anchor=north] at ([yshift=-0.8cm]current bounding box.south) {{${}$}};\n",
            caption
        ));
    }
    doc.push_str("\\end{tikzpicture}\n");
    doc.push_str("\\end{document}\n");
    doc
}
