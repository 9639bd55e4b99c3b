//! Property tests for import validation and the CSV adapter.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use nexus::application::ApplicationPatch;
use nexus::domain::ports::NoopEventSink;
use nexus::domain::services::{validate, ImportContext, RawRow};
use nexus::domain::value_objects::Health;
use nexus::infrastructure::csv_file::{read_rows, write_export};
use nexus::presentation::factory::create_portfolio_use_case;

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[A-Za-z0-9 _$,.-]{0,12}",
        prop::sample::select(vec!["CORE", "high", "Phase_Out", "-5", "1e3", "YES", "NaN"])
            .prop_map(str::to_string),
    ]
}

fn raw_row() -> impl Strategy<Value = RawRow> {
    let columns = vec![
        "Name", "Code", "Tier", "Value", "Health", "Owner", "Status", "PII", "GDPR", "Cost",
        "License", "Maintenance", "Debt", "Sensitivity",
    ];
    prop::collection::vec(cell(), columns.len()).prop_map(move |cells| {
        let pairs: Vec<(&str, &str)> = columns
            .iter()
            .zip(cells.iter())
            .map(|(header, value)| (*header, value.as_str()))
            .collect();
        RawRow::from_pairs(2, pairs)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics, and a row has a candidate exactly
    /// when it has no errors.
    #[test]
    fn property_validate_is_total(row in raw_row()) {
        let ctx = ImportContext::new(HashSet::new());
        let validated = validate(&row, &ctx);

        prop_assert_eq!(validated.candidate.is_some(), validated.errors.is_empty());
        prop_assert_eq!(validated.is_valid, validated.errors.is_empty());
        if let Some(app) = &validated.candidate {
            prop_assert!(app.health.value() <= 100);
            prop_assert!(app.costs.total >= 0.0);
            prop_assert!(app.costs.license >= 0.0 && app.costs.maintenance >= 0.0);
        }
    }

    /// PROPERTY: The CSV reader never panics on arbitrary text.
    #[test]
    fn property_csv_reader_never_panics(input in "[A-Za-z0-9,\"\n ]{0,200}") {
        let _ = read_rows(input.as_bytes());
    }

    /// PROPERTY: Arbitrary bytes, invalid UTF-8 included, never fail the whole
    /// file.
    #[test]
    fn property_csv_reader_accepts_any_bytes(
        input in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        prop_assert!(read_rows(input.as_slice()).is_ok());
    }

    /// PROPERTY: Records entered through `add` re-import from an export with
    /// the same core fields, padded input included.
    #[test]
    fn property_export_import_round_trip(
        names in prop::collection::vec(" {0,2}[A-Za-z][A-Za-z0-9 ]{0,15}", 1..6),
        health in 0u8..=100,
        license in 0u32..100_000,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let use_case = create_portfolio_use_case(Arc::new(NoopEventSink));
        use_case.init(&path, false).unwrap();

        for (i, name) in names.iter().enumerate() {
            let patch = ApplicationPatch {
                health: Some(Health::new(i64::from(health))),
                license: Some(f64::from(license)),
                maintenance: Some(1.5),
                owner: Some("owner ".to_string()),
                ..ApplicationPatch::default()
            };
            use_case.add(&path, name, &format!(" C-{i}"), &patch).unwrap();
        }
        let portfolio = use_case.load(&path).unwrap();

        let mut buf = Vec::new();
        write_export(&mut buf, portfolio.applications()).unwrap();
        let rows = read_rows(buf.as_slice()).unwrap();
        prop_assert_eq!(rows.len(), names.len());

        let ctx = ImportContext::new(HashSet::new());
        for (row, original) in rows.iter().zip(portfolio.applications()) {
            let validated = validate(row, &ctx);
            let copy = validated.candidate.as_ref().unwrap();
            prop_assert_eq!(&copy.name, &original.name);
            prop_assert_eq!(&copy.code, &original.code);
            prop_assert_eq!(&copy.owner, &original.owner);
            prop_assert_eq!(copy.tier, original.tier);
            prop_assert_eq!(copy.value, original.value);
            prop_assert_eq!(copy.health, original.health);
            prop_assert_eq!(copy.costs, original.costs);
            prop_assert!(validated.warnings.is_empty());
        }
    }
}
