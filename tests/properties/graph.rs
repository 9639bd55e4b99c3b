//! Property tests for the dependency graph builder.

use std::collections::HashSet;

use proptest::prelude::*;

use nexus::domain::entities::{Application, Portfolio};
use nexus::domain::services::{build_graph, GraphScope};
use nexus::domain::value_objects::{AppId, Tier};

/// Applications with random tiers and random downstream links, some of
/// which point at ids that do not exist.
fn portfolio() -> impl Strategy<Value = Vec<Application>> {
    prop::collection::vec(
        (
            prop::sample::select(Tier::ALL.to_vec()),
            prop::collection::vec(0usize..12, 0..4),
        ),
        0..10,
    )
    .prop_map(|shapes| {
        let ids: Vec<AppId> = (0..12).map(|i| AppId::from(format!("app-{i}"))).collect();
        shapes
            .iter()
            .enumerate()
            .map(|(i, (tier, links))| {
                let mut app =
                    Application::new(ids[i].clone(), format!("App {i}"), format!("A-{i}"));
                app.tier = *tier;
                app.downstream_ids = links.iter().map(|l| ids[*l].clone()).collect();
                app
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every edge connects two nodes of the graph.
    #[test]
    fn property_no_dangling_edges(apps in portfolio()) {
        let graph = build_graph(&apps, &GraphScope::All);
        let nodes: HashSet<_> = graph.nodes.iter().map(|n| n.id.clone()).collect();
        for edge in &graph.edges {
            prop_assert!(nodes.contains(&edge.source));
            prop_assert!(nodes.contains(&edge.target));
        }
    }

    /// PROPERTY: Deleting any application leaves no edge touching it.
    #[test]
    fn property_delete_never_leaves_dangling_edges(
        apps in portfolio(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!apps.is_empty());
        let victim = apps[pick.index(apps.len())].id.clone();

        let mut store = Portfolio::new();
        store.bulk_add(apps);
        store.delete(&victim);

        let graph = build_graph(store.applications(), &GraphScope::All);
        prop_assert!(graph.node(&victim).is_none());
        prop_assert!(graph.edges.iter().all(|e| e.source != victim && e.target != victim));
    }

    /// PROPERTY: Rows within a lane are 0..n with no gaps, and x is the
    /// lane's position.
    #[test]
    fn property_lanes_are_dense(apps in portfolio()) {
        let graph = build_graph(&apps, &GraphScope::All);
        for tier in Tier::ALL {
            let rows: Vec<usize> = graph.lane(tier).map(|n| n.row).collect();
            prop_assert_eq!(rows, (0..graph.lane(tier).count()).collect::<Vec<_>>());
            for node in graph.lane(tier) {
                prop_assert_eq!(node.lane, tier.lane());
            }
        }
    }
}
