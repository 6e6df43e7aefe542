//
//  helpers.rs
//  modgraph
//

use tree_sitter::Node;

/// Get the full text of a node.
pub fn node_text(node: &Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or("").to_string()
}

/// Dotted path of a `dotted_name` node, or the `name` of an `aliased_import`.
///
/// Joins the identifier children, so `a . b` and `a.b` both give `a.b`.
pub fn dotted_name(node: &Node, source: &[u8]) -> Option<String> {
    let target = match node.kind() {
        "aliased_import" => node.child_by_field_name("name")?,
        _ => *node,
    };
    if target.kind() != "dotted_name" {
        let text = node_text(&target, source);
        return (!text.is_empty()).then_some(text);
    }

    let mut cursor = target.walk();
    let parts: Vec<String> = target
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "identifier")
        .map(|child| node_text(&child, source))
        .collect();
    (!parts.is_empty()).then(|| parts.join("."))
}

/// 1-based line of a node.
pub fn line_of(node: &Node) -> usize {
    node.start_position().row + 1
}
