//! Property tests for the co-occurrence pipeline invariants.
//!
//! Groups are generated as member-id lists over a deliberately small id
//! space so that co-occurrence across groups is common, then rendered to a
//! dump and pushed through the same parse path production uses.

use std::collections::BTreeSet;

use proptest::prelude::*;

use wikinet_core::config::MetricSettings;
use wikinet_core::dump::{AnonymousPolicy, GroupMode, group_records};
use wikinet_core::exchange::ExchangeGraph;
use wikinet_core::graph::CoGraph;
use wikinet_core::metrics::{self, MetricKind};

/// Render abstract groups as a `;`-delimited dump.
fn dump_text(groups: &[Vec<u8>]) -> String {
    let mut out = String::from("page_id;page_title;contributor_id;contributor_name\n");
    for (key, members) in groups.iter().enumerate() {
        for m in members {
            out.push_str(&format!("p{key};Page {key};u{m};User {m}\n"));
        }
    }
    out
}

fn build(groups: &[Vec<u8>]) -> CoGraph {
    let text = dump_text(groups);
    let parsed = group_records(
        text.as_bytes(),
        GroupMode::Users,
        AnonymousPolicy::default(),
    )
    .expect("generated dump is well-formed");
    CoGraph::from_groups(&parsed)
}

/// Distinct member sets per group, for oracle counting.
fn member_sets(groups: &[Vec<u8>]) -> Vec<BTreeSet<u8>> {
    groups
        .iter()
        .map(|g| g.iter().copied().collect())
        .collect()
}

fn arb_groups() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0_u8..8, 1..6), 0..10)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(200))]

    #[test]
    fn edge_weight_equals_shared_group_count(groups in arb_groups()) {
        let graph = build(&groups);
        let sets = member_sets(&groups);

        for a in 0_u8..8 {
            for b in (a + 1)..8 {
                let expected = u64::try_from(
                    sets.iter()
                        .filter(|s| s.contains(&a) && s.contains(&b))
                        .count(),
                )
                .expect("group count fits in u64");
                let actual = graph
                    .edge_weight(&format!("u{a}"), &format!("u{b}"))
                    .unwrap_or(0);
                prop_assert_eq!(actual, expected, "pair (u{}, u{})", a, b);
            }
        }
    }

    #[test]
    fn no_self_loops_exist(groups in arb_groups()) {
        let graph = build(&groups);
        for idx in graph.graph.node_indices() {
            prop_assert!(graph.graph.find_edge(idx, idx).is_none());
        }
    }

    #[test]
    fn pruning_respects_threshold_and_degree(groups in arb_groups(), threshold in 1_u64..5) {
        let mut graph = build(&groups);
        graph.prune_edges(threshold);
        graph.prune_isolates();

        for e in graph.graph.edge_indices() {
            prop_assert!(graph.graph[e] >= threshold);
        }
        for idx in graph.graph.node_indices() {
            prop_assert!(graph.graph.neighbors(idx).next().is_some());
        }
    }

    #[test]
    fn metric_extrema_are_true_extrema(groups in arb_groups()) {
        let mut graph = build(&groups);
        let summary = metrics::apply(
            &mut graph,
            MetricKind::Degree,
            &MetricSettings::default(),
        )
        .expect("degree always succeeds");

        let weights: Vec<f64> = graph
            .graph
            .node_indices()
            .map(|idx| graph.graph[idx].weight)
            .collect();

        if weights.is_empty() {
            prop_assert_eq!(summary.min, 0.0);
            prop_assert_eq!(summary.max, 0.0);
        } else {
            let true_min = weights.iter().copied().fold(f64::INFINITY, f64::min);
            let true_max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(summary.min, true_min);
            prop_assert_eq!(summary.max, true_max);
            for w in weights {
                prop_assert!(summary.min <= w && w <= summary.max);
            }
        }
    }

    #[test]
    fn projection_is_a_pure_count_preserving_map(groups in arb_groups()) {
        let mut graph = build(&groups);
        let summary = metrics::apply(
            &mut graph,
            MetricKind::Degree,
            &MetricSettings::default(),
        )
        .expect("degree always succeeds");

        let exchange = ExchangeGraph::project(&graph, summary);
        prop_assert_eq!(exchange.nodes.len(), graph.node_count());
        prop_assert_eq!(exchange.edges.len(), graph.edge_count());

        let unique_edge_ids: BTreeSet<&str> =
            exchange.edges.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(unique_edge_ids.len(), exchange.edges.len());
    }
}
