//! Markup emission for collected operator and function docs.

use super::functions::{ARROW, FunctionDocs};
use super::links::link_type_name;
use super::operators::{Operation, OperatorDocs};

/// Render the signature cell of an operator row.
///
/// Unary operators render as `<code>op</code>operand`; binary operators as `left <code>op</code> right`.
pub fn operation_signature(op: &Operation) -> String {
    if op.is_unary() {
        format!("<code>{}</code>{}", op.op, link_type_name(&op.left))
    } else {
        format!(
            "{} <code>{}</code> {}",
            link_type_name(&op.left),
            op.op,
            link_type_name(&op.right)
        )
    }
}

/// Render one table per operator symbol.
pub fn render_operators(docs: &OperatorDocs) -> Vec<u8> {
    let mut out = String::new();
    for (symbol, ops) in docs.iter() {
        out.push_str("<table><thead>\n");
        out.push_str(&format!("<tr><td><code>{symbol}</code></td><td>Return</td></tr>\n"));
        out.push_str("</thead><tbody>\n");
        for op in ops {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                operation_signature(op),
                link_type_name(&op.ret)
            ));
        }
        out.push_str("</tbody></table>\n");
    }
    out.into_bytes()
}

/// Render one table per category, each preceded by a heading when the docs are categorized.
pub fn render_functions(docs: &FunctionDocs) -> Vec<u8> {
    let mut out = String::new();
    for category in docs.categories() {
        if docs.categorize() {
            out.push_str(&format!("### {} Functions\n\n", category.name));
        }
        out.push_str(&format!(
            "<table>\n<thead><tr><th>Function {ARROW} Returns</th><th>Description</th></tr></thead>\n"
        ));
        out.push_str("<tbody>\n");
        out.push_str(&category.rows.join("\n"));
        out.push_str("</tbody>\n</table>\n\n");
    }
    out.into_bytes()
}
