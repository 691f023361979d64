//! Graph construction from grouped records.
//!
//! # Overview
//!
//! Each group's member list expands into a clique: every unordered pair of
//! distinct member ids gets an edge, created at weight 1 or incremented if
//! the pair already co-occurred in an earlier group. The resulting edge
//! weight therefore equals the number of distinct groups containing both
//! endpoints.
//!
//! ## Scaling
//!
//! Expansion is O(Σ k²) over group sizes k — one very large group (a page
//! touched by thousands of contributors) dominates runtime and edge count.
//! Callers analyzing big dumps should expect cost to concentrate there, not
//! in the number of groups.
//!
//! ## No self-loops
//!
//! Member ids are already deduplicated per group by the grouper, and pairs
//! are generated strictly across distinct list positions, so an id is never
//! paired with itself.

use tracing::{debug, instrument};

use crate::dump::Groups;

use super::{CoGraph, CoNode};

impl CoGraph {
    /// Build the co-occurrence graph implied by `groups`.
    ///
    /// Nodes are inserted on first encounter with their first-seen label and
    /// a default weight of 1.0. Group order (file order) drives insertion
    /// order, so output is deterministic for a given dump.
    #[must_use]
    #[instrument(skip(groups))]
    pub fn from_groups(groups: &Groups) -> Self {
        let mut co = Self::default();

        for (_, members) in groups.iter() {
            for id in members {
                if !co.node_map.contains_key(id) {
                    let idx = co.graph.add_node(CoNode {
                        id: id.clone(),
                        label: groups.label(id).to_string(),
                        weight: 1.0,
                    });
                    co.node_map.insert(id.clone(), idx);
                }
            }

            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    let ia = co.node_map[a];
                    let ib = co.node_map[b];
                    match co.graph.find_edge(ia, ib) {
                        Some(edge) => co.graph[edge] += 1,
                        None => {
                            co.graph.add_edge(ia, ib, 1);
                        }
                    }
                }
            }
        }

        debug!(
            nodes = co.node_count(),
            edges = co.edge_count(),
            "built co-occurrence graph"
        );
        co
    }
}
