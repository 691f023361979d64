//! E2E tests for the `wn` binary: analyze and stats over real dump files.
//!
//! Each test runs the binary as a subprocess against a temp directory
//! holding a small hand-written dump.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

const DUMP: &str = "\
page_id;page_title;contributor_id;contributor_name
A;Alpha;u1;Alice
A;Alpha;u2;Bob
B;Beta;u1;Alice
B;Beta;u2;Bob
B;Beta;u3;Anonymous
C;Gamma;u2;Bob
C;Gamma;u3;Anonymous
";

/// Build a Command targeting the wn binary, rooted in `dir`.
fn wn_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wn"));
    cmd.current_dir(dir);
    // Suppress tracing output that goes to stderr
    cmd.env("WIKINET_LOG", "error");
    cmd
}

/// Write the standard test dump into `dir` and return its file name.
fn write_dump(dir: &Path) -> &'static str {
    std::fs::write(dir.join("dump.csv"), DUMP).expect("write dump");
    "dump.csv"
}

/// Run `wn analyze` with extra args and parse the JSON reply.
fn analyze_json(dir: &Path, extra: &[&str]) -> Value {
    let dump = write_dump(dir);
    let mut args = vec!["analyze", dump, "--json"];
    args.extend_from_slice(extra);
    let output = wn_cmd(dir).args(&args).output().expect("run wn");
    assert!(
        output.status.success(),
        "analyze failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("analyze --json should produce valid JSON")
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn analyze_emits_the_exchange_contract() {
    let dir = TempDir::new().expect("tempdir");
    let json = analyze_json(dir.path(), &[]);

    assert_eq!(json["node_count"], 3);
    assert_eq!(json["edge_count"], 3);

    let node = &json["result"]["nodes"][0];
    for key in ["id", "label", "weight", "min_weight", "max_weight"] {
        assert!(node.get(key).is_some(), "node missing {key}");
    }
    let edge = &json["result"]["edges"][0];
    for key in ["id", "source", "target", "weight"] {
        assert!(edge.get(key).is_some(), "edge missing {key}");
    }
    assert!(
        json["rescale"]
            .as_str()
            .expect("rescale is a string")
            .starts_with("mapData(weight,")
    );
}

#[test]
fn analyze_edge_weights_count_shared_pages() {
    let dir = TempDir::new().expect("tempdir");
    let json = analyze_json(dir.path(), &[]);

    // u1/u2 share pages A and B.
    let edges = json["result"]["edges"].as_array().expect("edges array");
    let u1_u2 = edges
        .iter()
        .find(|e| {
            let (s, t) = (e["source"].as_str(), e["target"].as_str());
            matches!((s, t), (Some("u1"), Some("u2")) | (Some("u2"), Some("u1")))
        })
        .expect("u1-u2 edge exists");
    assert_eq!(u1_u2["weight"], 2);
}

#[test]
fn analyze_threshold_prunes_edges() {
    let dir = TempDir::new().expect("tempdir");
    let json = analyze_json(dir.path(), &["--min-edge-weight", "2"]);

    // Only (u1,u2) and (u2,u3) co-occur twice.
    assert_eq!(json["edge_count"], 2);
    for edge in json["result"]["edges"].as_array().expect("edges array") {
        assert!(edge["weight"].as_u64().expect("weight") >= 2);
    }
}

#[test]
fn analyze_drop_anonymous_removes_nodes() {
    let dir = TempDir::new().expect("tempdir");
    let json = analyze_json(dir.path(), &["--drop-anonymous"]);

    let nodes = json["result"]["nodes"].as_array().expect("nodes array");
    assert!(nodes.iter().all(|n| n["id"] != "u3"));
}

#[test]
fn analyze_strip_anonymous_label_blanks_names() {
    let dir = TempDir::new().expect("tempdir");
    let json = analyze_json(dir.path(), &["--strip-anonymous-label"]);

    let nodes = json["result"]["nodes"].as_array().expect("nodes array");
    let u3 = nodes
        .iter()
        .find(|n| n["id"] == "u3")
        .expect("u3 retained");
    assert_eq!(u3["label"], "");
}

#[test]
fn analyze_pages_mode_uses_page_titles() {
    let dir = TempDir::new().expect("tempdir");
    let json = analyze_json(dir.path(), &["--group-by", "pages"]);

    let labels: Vec<&str> = json["result"]["nodes"]
        .as_array()
        .expect("nodes array")
        .iter()
        .filter_map(|n| n["label"].as_str())
        .collect();
    assert!(labels.contains(&"Alpha"), "labels: {labels:?}");
}

#[test]
fn analyze_every_metric_succeeds() {
    let dir = TempDir::new().expect("tempdir");
    for metric in ["degree", "betweenness", "eigenvector", "pagerank", "clustering"] {
        let json = analyze_json(dir.path(), &["--metric", metric]);
        let (min, max) = (
            json["min"].as_f64().expect("min"),
            json["max"].as_f64().expect("max"),
        );
        assert!(min <= max, "{metric}: min {min} > max {max}");
    }
}

#[test]
fn analyze_writes_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let dump = write_dump(dir.path());
    wn_cmd(dir.path())
        .args(["analyze", dump, "--json", "--output", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let raw = std::fs::read_to_string(dir.path().join("graph.json")).expect("output file");
    let json: Value = serde_json::from_str(&raw).expect("valid JSON");
    assert_eq!(json["node_count"], 3);
}

#[test]
fn analyze_human_summary_prints_counts() {
    let dir = TempDir::new().expect("tempdir");
    let dump = write_dump(dir.path());
    wn_cmd(dir.path())
        .args(["analyze", dump])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes:").and(predicate::str::contains("Metric:")));
}

// ---------------------------------------------------------------------------
// failure modes
// ---------------------------------------------------------------------------

#[test]
fn analyze_missing_dump_fails_with_path() {
    let dir = TempDir::new().expect("tempdir");
    wn_cmd(dir.path())
        .args(["analyze", "nope.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.csv"));
}

#[test]
fn analyze_malformed_row_fails_with_line_number() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(
        dir.path().join("bad.csv"),
        "page_id;page_title;contributor_id;contributor_name\nA;Alpha;u1;Alice\nB;Beta\n",
    )
    .expect("write dump");

    wn_cmd(dir.path())
        .args(["analyze", "bad.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn analyze_unknown_metric_is_a_usage_error() {
    let dir = TempDir::new().expect("tempdir");
    let dump = write_dump(dir.path());
    wn_cmd(dir.path())
        .args(["analyze", dump, "--metric", "closeness"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("closeness"));
}

#[test]
fn analyze_respects_config_iteration_bound() {
    let dir = TempDir::new().expect("tempdir");
    let dump = write_dump(dir.path());
    std::fs::write(
        dir.path().join("wikinet.toml"),
        "[metric]\nmax_iter = 1\ntolerance = 1e-15\n",
    )
    .expect("write config");

    wn_cmd(dir.path())
        .args(["analyze", dump, "--metric", "eigenvector"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not converge"));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_reports_counts_as_json() {
    let dir = TempDir::new().expect("tempdir");
    let dump = write_dump(dir.path());
    let output = wn_cmd(dir.path())
        .args(["stats", dump, "--json", "--min-edge-weight", "2"])
        .output()
        .expect("run wn");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["nodes_before_prune"], 3);
    assert_eq!(json["edges_before_prune"], 3);
    assert_eq!(json["edges"], 2);
    assert_eq!(json["isolates_pruned"], 0);
    assert_eq!(json["group_by"], "users");
}

#[test]
fn stats_human_output_mentions_density() {
    let dir = TempDir::new().expect("tempdir");
    let dump = write_dump(dir.path());
    wn_cmd(dir.path())
        .args(["stats", dump])
        .assert()
        .success()
        .stdout(predicate::str::contains("Density:"));
}
