//! Built-in example graphs modelled on small website link structures.

use crate::builder::GraphBuilder;
use crate::{Edge, GraphData, GraphSpec, Node};
use linkrank_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named built-in graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// 3 pages, 4 weighted links.
    #[default]
    Simple,
    /// 5 pages, 8 weighted links.
    Medium,
    /// 7 pages, 12 unweighted links.
    Complex,
}

impl Preset {
    /// All presets in display order.
    pub fn all() -> [Preset; 3] {
        [Preset::Simple, Preset::Medium, Preset::Complex]
    }

    /// The preset's name as used in configuration and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        }
    }

    /// The serialized graph definition.
    pub fn spec(&self) -> GraphSpec {
        match self {
            Self::Simple => GraphSpec {
                nodes: nodes(&[("A", "Homepage"), ("B", "Products"), ("C", "About")]),
                edges: weighted(&[("A", "B", 0.8), ("B", "C", 0.3), ("C", "A", 0.5), ("A", "C", 0.2)]),
            },
            Self::Medium => GraphSpec {
                nodes: nodes(&[
                    ("A", "Homepage"),
                    ("B", "Products"),
                    ("C", "Services"),
                    ("D", "Blog"),
                    ("E", "Contact"),
                ]),
                edges: weighted(&[
                    ("A", "B", 0.9),
                    ("A", "C", 0.7),
                    ("B", "C", 0.4),
                    ("B", "D", 0.3),
                    ("C", "D", 0.5),
                    ("C", "E", 0.6),
                    ("D", "E", 0.4),
                    ("E", "A", 0.8),
                ]),
            },
            Self::Complex => GraphSpec {
                nodes: nodes(&[
                    ("A", "Page A"),
                    ("B", "Page B"),
                    ("C", "Page C"),
                    ("D", "Page D"),
                    ("E", "Page E"),
                    ("F", "Page F"),
                    ("G", "Page G"),
                ]),
                edges: [
                    ("A", "B"),
                    ("A", "C"),
                    ("B", "C"),
                    ("B", "D"),
                    ("C", "D"),
                    ("C", "E"),
                    ("D", "E"),
                    ("D", "F"),
                    ("E", "F"),
                    ("E", "G"),
                    ("F", "G"),
                    ("G", "A"),
                ]
                .into_iter()
                .map(|(s, t)| Edge::new(s, t))
                .collect(),
            },
        }
    }

    /// Builds the validated graph.
    pub fn graph(&self) -> Result<GraphData> {
        let (graph, _stats) = GraphBuilder::from_spec(self.spec()).build()?;
        Ok(graph)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Preset::all()
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::not_found("preset", s))
    }
}

fn nodes(pairs: &[(&str, &str)]) -> Vec<Node> {
    pairs.iter().map(|(id, name)| Node::new(*id, *name)).collect()
}

fn weighted(triples: &[(&str, &str, f64)]) -> Vec<Edge> {
    triples
        .iter()
        .map(|(s, t, w)| Edge::new(*s, *t).with_weight(*w))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_sizes() {
        let expected = [(Preset::Simple, 3, 4), (Preset::Medium, 5, 8), (Preset::Complex, 7, 12)];
        for (preset, nodes, edges) in expected {
            let g = preset.graph().unwrap();
            assert_eq!(g.node_count(), nodes, "{preset}");
            assert_eq!(g.edge_count(), edges, "{preset}");
        }
    }

    #[test]
    fn test_complex_preset_is_unweighted() {
        assert!(Preset::Complex.spec().edges.iter().all(|e| e.weight.is_none()));
        assert!(Preset::Medium.spec().edges.iter().all(|e| e.weight.is_some()));
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("simple".parse::<Preset>().unwrap(), Preset::Simple);
        assert_eq!("Medium".parse::<Preset>().unwrap(), Preset::Medium);
        assert_eq!(" complex ".parse::<Preset>().unwrap(), Preset::Complex);
    }

    #[test]
    fn test_preset_from_str_unknown() {
        let err = "huge".parse::<Preset>().unwrap_err();
        assert_eq!(err.to_string(), "preset not found: huge");
    }

    #[test]
    fn test_preset_display_matches_name() {
        for preset in Preset::all() {
            assert_eq!(preset.to_string(), preset.name());
        }
    }

    #[test]
    fn test_preset_serde_snake_case() {
        let json = serde_json::to_string(&Preset::Complex).unwrap();
        assert_eq!(json, "\"complex\"");
        let parsed: Preset = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Preset::Medium);
    }

    #[test]
    fn test_simple_preset_names() {
        let g = Preset::Simple.graph().unwrap();
        assert_eq!(g.get_node("A").unwrap().name, "Homepage");
        assert_eq!(g.get_node("C").unwrap().name, "About");
    }
}
