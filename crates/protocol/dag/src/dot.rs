//! Graphviz DOT output.

use crate::{RenderEdge, RenderNode, RenderSpec};
use core::fmt;

/// Displays a [`RenderSpec`] as a Graphviz `digraph`.
#[derive(Debug, Clone, Copy)]
pub struct Dot<'a>(&'a RenderSpec);

impl RenderSpec {
    /// Returns a [`fmt::Display`] adapter printing this description as DOT.
    pub const fn dot(&self) -> Dot<'_> {
        Dot(self)
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.0;
        writeln!(f, "digraph unstable_blocks {{")?;
        writeln!(f, "    rankdir={};", spec.rank_dir)?;
        for node in &spec.nodes {
            write_node(f, node)?;
        }
        for edge in &spec.edges {
            write_edge(f, edge)?;
        }
        writeln!(f, "}}")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &RenderNode) -> fmt::Result {
    write!(f, "    \"{}\" [label=\"{}\", shape=box", Escaped(&node.id), Escaped(&node.label))?;
    if !node.visible {
        write!(f, ", style=invis")?;
    } else if let Some(fill) = node.fill_color {
        write!(f, ", style=filled, fillcolor=\"{fill}\"")?;
    }
    writeln!(f, "];")
}

fn write_edge(f: &mut fmt::Formatter<'_>, edge: &RenderEdge) -> fmt::Result {
    write!(f, "    \"{}\" -> \"{}\"", Escaped(&edge.from), Escaped(&edge.to))?;
    if !edge.visible {
        write!(f, " [style=invis]")?;
    }
    writeln!(f, ";")
}

/// Escapes a string for use inside a quoted DOT id.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                c => fmt::Write::write_char(f, c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dag, LayoutDescriber};
    use udag_candid::BlockRecord;

    #[test]
    fn test_empty_graph() {
        let dot = RenderSpec::default().dot().to_string();
        assert_eq!(dot, "digraph unstable_blocks {\n    rankdir=LR;\n}\n");
    }

    #[test]
    fn test_two_blocks() {
        let records = [
            BlockRecord {
                height: 1,
                block_hash: "aa".to_string(),
                difficulty: 1,
                children: vec!["bb".to_string()],
                ..Default::default()
            },
            BlockRecord { height: 2, block_hash: "bb".to_string(), difficulty: 3, ..Default::default() },
        ];
        let spec = LayoutDescriber::default().describe(&Dag::assemble(records));
        let expected = r##"digraph unstable_blocks {
    rankdir=LR;
    "padding_top" [label="", shape=box, style=invis];
    "aa" [label="#aa\nH:1\nD:1", shape=box, style=filled, fillcolor="#add8e6"];
    "bb" [label="#bb\nH:2\nD:3", shape=box, style=filled, fillcolor="#00008b"];
    "padding_bottom" [label="", shape=box, style=invis];
    "padding_top" -> "aa" [style=invis];
    "aa" -> "bb";
    "bb" -> "padding_bottom" [style=invis];
}
"##;
        assert_eq!(spec.dot().to_string(), expected);
    }

    #[test]
    fn test_escaping() {
        assert_eq!(Escaped("a\"b\\c\nd").to_string(), "a\\\"b\\\\c\\nd");
    }
}
