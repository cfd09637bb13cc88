//! Render descriptions of a snapshot DAG.

use crate::{Dag, LayoutConfig, RankDir, Rgb, normalize};
use serde::{Deserialize, Serialize};
use udag_candid::BlockRecord;

/// Id of the invisible node placed before the first decoded block.
pub const PADDING_TOP: &str = "padding_top";

/// Id of the invisible node placed after the last decoded block.
pub const PADDING_BOTTOM: &str = "padding_bottom";

/// Node shape hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A rectangle.
    #[default]
    Box,
}

/// A node of a [`RenderSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderNode {
    /// Node id: the block hash, or a padding id.
    pub id: String,
    /// Label text. Lines are separated by `\n`.
    pub label: String,
    /// Fill color. Padding nodes have none.
    pub fill_color: Option<Rgb>,
    /// Shape hint.
    pub shape: Shape,
    /// Whether the node is drawn.
    pub visible: bool,
}

/// An edge of a [`RenderSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderEdge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Whether the edge is drawn.
    pub visible: bool,
}

/// Backend-agnostic description of the graph to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSpec {
    /// Ranking direction.
    pub rank_dir: RankDir,
    /// Nodes, including padding nodes.
    pub nodes: Vec<RenderNode>,
    /// Edges, including the invisible padding edges.
    pub edges: Vec<RenderEdge>,
}

impl RenderSpec {
    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates the nodes that represent blocks.
    pub fn block_nodes(&self) -> impl Iterator<Item = &RenderNode> + '_ {
        self.nodes.iter().filter(|node| node.id != PADDING_TOP && node.id != PADDING_BOTTOM)
    }
}

/// Describes an assembled [`Dag`] as a [`RenderSpec`].
#[derive(Debug, Clone, Default)]
pub struct LayoutDescriber {
    config: LayoutConfig,
}

impl LayoutDescriber {
    /// Creates a describer with the given configuration.
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Describes `dag`.
    ///
    /// Blocks are filled on the configured gradient by min-max normalized difficulty. When
    /// the DAG has at least one block, a padding node is linked by an invisible edge to the
    /// first decoded block, and the last decoded block to another one, so the layout keeps
    /// the same margins whatever the shape of the graph.
    pub fn describe(&self, dag: &Dag) -> RenderSpec {
        let mut spec = RenderSpec { rank_dir: self.config.rank_dir, ..Default::default() };
        let (Some(first), Some(last)) = (dag.first(), dag.last()) else {
            debug!(target: "layout", "Empty snapshot, nothing to describe");
            return spec;
        };

        let (min, max) = dag.iter().map(|node| node.record().difficulty).fold(
            (u128::MAX, u128::MIN),
            |(min, max), difficulty| (min.min(difficulty), max.max(difficulty)),
        );

        spec.nodes.reserve(dag.len() + 2);
        spec.nodes.push(padding(PADDING_TOP));
        for node in dag.iter() {
            let record = node.record();
            spec.nodes.push(RenderNode {
                id: record.block_hash.clone(),
                label: self.label(record),
                fill_color: Some(self.fill(record.difficulty, min, max)),
                shape: Shape::Box,
                visible: true,
            });
        }
        spec.nodes.push(padding(PADDING_BOTTOM));

        spec.edges.push(invisible_edge(PADDING_TOP, first.hash()));
        spec.edges.extend(dag.edges().map(|(from, to)| RenderEdge {
            from: from.to_string(),
            to: to.to_string(),
            visible: true,
        }));
        spec.edges.push(invisible_edge(last.hash(), PADDING_BOTTOM));

        debug!(
            target: "layout",
            nodes = spec.nodes.len(),
            edges = spec.edges.len(),
            min_difficulty = %min,
            max_difficulty = %max,
            "Described snapshot"
        );
        spec
    }

    /// The label of a block: short hash, height, difficulty and, for the newer record
    /// shape, the counter.
    pub fn label(&self, record: &BlockRecord) -> String {
        let mut label = format!(
            "#{}\nH:{}\nD:{}",
            record.short_hash(self.config.short_hash_len),
            record.height,
            record.difficulty
        );
        if let Some(counter) = record.no_difficulty_counter {
            label.push_str(&format!("\nN:{counter}"));
        }
        label
    }

    /// The fill of a block with `difficulty`, given the snapshot's difficulty range.
    pub fn fill(&self, difficulty: u128, min: u128, max: u128) -> Rgb {
        Rgb::lerp(self.config.low_color, self.config.high_color, normalize(difficulty, min, max))
    }
}

fn padding(id: &str) -> RenderNode {
    RenderNode {
        id: id.to_string(),
        label: String::new(),
        fill_color: None,
        shape: Shape::Box,
        visible: false,
    }
}

fn invisible_edge(from: &str, to: &str) -> RenderEdge {
    RenderEdge { from: from.to_string(), to: to.to_string(), visible: false }
}
