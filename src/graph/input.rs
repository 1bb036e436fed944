//! Decoding of serialized edge lists
//!
//! Two JSON shapes are accepted:
//! - unweighted pairs: `[["A", "B"], ["B", "C"], ["D", ""]]`
//! - weighted records: `[{"pair": ["s", "a"], "weight": 10}]`
//!
//! An empty second label marks an isolated vertex.

use std::io::Read;

use serde::Deserialize;

use crate::graph::directed::{build_graph, build_weighted_graph};
use crate::graph::DirectedGraph;
use crate::Result;

/// One weighted edge record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeightedPair {
    pub pair: [String; 2],
    #[serde(default)]
    pub weight: i64,
}

/// Reads an unweighted edge list and builds the graph
pub fn read_graph<R: Read>(reader: R) -> Result<DirectedGraph> {
    let pairs: Vec<[String; 2]> = serde_json::from_reader(reader)?;
    Ok(build_graph(pairs.into_iter().map(|[u, v]| (u, v))))
}

/// Reads a weighted edge list and builds the graph
pub fn read_weighted_graph<R: Read>(reader: R) -> Result<DirectedGraph> {
    let records: Vec<WeightedPair> = serde_json::from_reader(reader)?;
    Ok(build_weighted_graph(records.into_iter().map(|r| {
        let [u, v] = r.pair;
        (u, v, r.weight)
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_read_pairs_with_isolated_vertex() {
        let g = read_graph(r#"[["A", "B"], ["C", ""]]"#.as_bytes()).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.adjacency("C"), Some(vec![]));
    }

    #[test]
    fn test_weight_defaults_to_zero() {
        let g = read_weighted_graph(r#"[{"pair": ["s", "a"]}]"#.as_bytes()).unwrap();
        assert_eq!(g.edges()[0].weight, 0);
    }

    #[test]
    fn test_malformed_input_is_reported() {
        let err = read_graph(r#"[["A", "B", "C"]]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let err = read_weighted_graph(r#"[{"weight": 3}]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
