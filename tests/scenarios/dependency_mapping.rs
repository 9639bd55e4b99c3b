//! Scenario: Mapping Dependencies
//!
//! Journey: An architect records which systems feed which, looks at the
//! graph, then decommissions one system.
//!
//! Success Criteria:
//! - Links show up as edges, flagged when PII is at stake
//! - Deleting a system never leaves an edge pointing nowhere
//! - A system cannot be linked to itself

use crate::common::*;
use crate::{assert_output_contains, assert_success};

#[test]
fn scenario_link_graph_and_decommission() {
    let env = TestEnv::initialized();
    assert_success!(env.run(&["add", "--name", "Portal", "--code", "WEB", "--tier", "CHANNEL"]));
    assert_success!(env.run(&["add", "--name", "Bus", "--code", "ESB", "--tier", "INTEGRATION"]));
    assert_success!(env.run(&[
        "add", "--name", "HR Core", "--code", "HRC", "--tier", "CORE", "--pii", "HIGH",
    ]));

    assert_success!(env.run(&["link", "WEB", "ESB"]));
    assert_success!(env.run(&["link", "ESB", "HRC"]));
    let again = env.run(&["link", "WEB", "ESB"]);
    assert_output_contains!(again, "Already linked");

    let graph = env.run(&["--json", "graph"]).data();
    let edges = graph["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 2);
    let risky: Vec<_> = edges.iter().filter(|e| e["high_risk"] == true).collect();
    assert_eq!(risky.len(), 1, "only the edge into HR Core carries PII risk");

    let text = env.run(&["graph"]);
    assert_output_contains!(text, "ESB -> HRC  [!] high PII risk");

    // Decommission the bus
    assert_success!(env.run(&["remove", "ESB"]));
    let graph = env.run(&["--json", "graph"]).data();
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 2);
    assert!(graph["edges"].as_array().unwrap().is_empty());
}

#[test]
fn scenario_self_link_is_refused() {
    let env = TestEnv::initialized();
    assert_success!(env.run(&["add", "--name", "Solo", "--code", "S-1"]));

    let result = env.run(&["toggle", "S-1", "S-1"]);
    assert!(!result.success);
    assert_output_contains!(result, "cannot depend on itself");
}

#[test]
fn scenario_toggle_flips_upstream_link() {
    let env = TestEnv::initialized();
    assert_success!(env.run(&["add", "--name", "A", "--code", "A-1"]));
    assert_success!(env.run(&["add", "--name", "B", "--code", "B-1"]));

    assert_output_contains!(env.run(&["toggle", "A-1", "B-1", "--upstream"]), "Linked");
    let a = env.run(&["--json", "show", "A-1"]).data();
    assert_eq!(a["application"]["upstreamIds"].as_array().unwrap().len(), 1);
    assert!(a["application"]["downstreamIds"].as_array().unwrap().is_empty());

    assert_output_contains!(env.run(&["toggle", "A-1", "B-1", "--upstream"]), "Unlinked");

    // Upstream lists never produce edges
    assert_success!(env.run(&["toggle", "A-1", "B-1", "--upstream"]));
    let graph = env.run(&["--json", "graph"]).data();
    assert!(graph["edges"].as_array().unwrap().is_empty());
}
