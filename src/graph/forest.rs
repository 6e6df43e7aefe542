//
//  forest.rs
//  modgraph
//

use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Tree-shaped view of an edge set.
///
/// Roots are nodes nothing imports; leaves are imported nodes that import
/// nothing. The underlying graph may contain cycles, so rendering tracks
/// the nodes on the current path and never descends into one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    children: BTreeMap<String, Vec<String>>,
    roots: Vec<String>,
    leaves: Vec<String>,
}

impl Forest {
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut children: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut all_nodes: BTreeSet<&str> = BTreeSet::new();
        let mut imported: BTreeSet<&str> = BTreeSet::new();

        for (source, target) in edges {
            children
                .entry(source.to_string())
                .or_default()
                .insert(target.to_string());
            all_nodes.insert(source);
            all_nodes.insert(target);
            imported.insert(target);
        }

        let roots: Vec<String> = all_nodes
            .difference(&imported)
            .map(|n| n.to_string())
            .collect();
        let leaves: Vec<String> = imported
            .iter()
            .filter(|n| !children.contains_key(**n))
            .map(|n| n.to_string())
            .collect();
        let children: BTreeMap<String, Vec<String>> = children
            .into_iter()
            .map(|(node, kids)| (node, kids.into_iter().collect()))
            .collect();

        Self {
            children,
            roots,
            leaves,
        }
    }

    /// Never-imported nodes, sorted.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Imported nodes with no outgoing edges, sorted.
    pub fn leaves(&self) -> &[String] {
        &self.leaves
    }

    /// Sorted targets of `node`.
    pub fn children_of(&self, node: &str) -> &[String] {
        self.children.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Render every root depth-first with box-drawing connectors, one line
    /// per visited node.
    pub fn render_lines(&self) -> Vec<String> {
        enum Step<'a> {
            Enter {
                node: &'a str,
                prefix: String,
                last: bool,
            },
            Leave(&'a str),
        }

        let mut lines = Vec::new();
        let mut on_path: HashSet<&str> = HashSet::new();
        let mut stack: Vec<Step> = Vec::new();

        push_siblings(&mut stack, &self.roots, "", |node, prefix, last| Step::Enter {
            node,
            prefix,
            last,
        });

        while let Some(step) = stack.pop() {
            match step {
                Step::Leave(node) => {
                    on_path.remove(node);
                }
                Step::Enter { node, prefix, last } => {
                    let connector = if last { "└─ " } else { "├─ " };
                    lines.push(format!("{prefix}{connector}{node}"));

                    if !on_path.insert(node) {
                        continue;
                    }
                    stack.push(Step::Leave(node));

                    let child_prefix = format!("{prefix}{}", if last { "   " } else { "│  " });
                    push_siblings(
                        &mut stack,
                        self.children_of(node),
                        &child_prefix,
                        |node, prefix, last| Step::Enter { node, prefix, last },
                    );
                }
            }
        }

        lines
    }
}

/// Push siblings in reverse so they pop in sorted order.
fn push_siblings<'a, T>(
    stack: &mut Vec<T>,
    siblings: &'a [String],
    prefix: &str,
    make: impl Fn(&'a str, String, bool) -> T,
) {
    let count = siblings.len();
    for (i, node) in siblings.iter().enumerate().rev() {
        stack.push(make(node.as_str(), prefix.to_string(), i + 1 == count));
    }
}
