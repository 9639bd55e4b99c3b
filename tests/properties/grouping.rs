//! Property tests for grouping and aggregation.

use proptest::prelude::*;

use nexus::domain::entities::{Application, Costs};
use nexus::domain::services::{
    group_by_capability, group_by_domain, summarize, EnrichedApplication, REDUNDANCY_THRESHOLD,
};
use nexus::domain::value_objects::AppId;

fn application() -> impl Strategy<Value = Application> {
    (
        prop::sample::select(vec!["", "CAP-A", "CAP-B", "CAP-C"]),
        prop::sample::select(vec!["", "IT", "HR"]),
        0u32..10_000,
    )
        .prop_map(|(capability, domain, cost)| {
            let mut app = Application::new(AppId::generate(), "app", "CODE");
            app.capability_id = capability.to_string();
            app.domain = domain.to_string();
            app.costs = Costs::from_components(f64::from(cost), 0.0);
            app
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Capability groups partition the input and their spend adds
    /// up to the portfolio total.
    #[test]
    fn property_capability_groups_partition_the_portfolio(
        apps in prop::collection::vec(application(), 0..40),
    ) {
        let enriched: Vec<_> = apps.iter().map(EnrichedApplication::new).collect();
        let groups = group_by_capability(&enriched);

        let members: usize = groups.iter().map(|g| g.members.len()).sum();
        prop_assert_eq!(members, apps.len());

        let spend: f64 = groups.iter().map(|g| g.total_cost).sum();
        prop_assert_eq!(spend, summarize(&enriched).total_cost);

        for group in &groups {
            prop_assert!(!group.capability.is_empty());
            prop_assert_eq!(group.is_redundant, group.members.len() > REDUNDANCY_THRESHOLD);
        }
    }

    /// PROPERTY: Domain application counts add up, and each domain's
    /// capability groups hold exactly its applications.
    #[test]
    fn property_domain_counts_are_consistent(apps in prop::collection::vec(application(), 0..40)) {
        let enriched: Vec<_> = apps.iter().map(EnrichedApplication::new).collect();
        let domains = group_by_domain(&enriched);

        let total: usize = domains.iter().map(|d| d.application_count).sum();
        prop_assert_eq!(total, apps.len());
        for domain in &domains {
            let inner: usize = domain.capabilities.iter().map(|c| c.members.len()).sum();
            prop_assert_eq!(inner, domain.application_count);
        }
    }

    /// PROPERTY: Disposition counts in the summary add up to the size.
    #[test]
    fn property_summary_counts_add_up(apps in prop::collection::vec(application(), 0..40)) {
        let enriched: Vec<_> = apps.iter().map(EnrichedApplication::new).collect();
        let s = summarize(&enriched);
        prop_assert_eq!(s.invest + s.tolerate + s.migrate + s.eliminate, s.application_count);
    }
}
