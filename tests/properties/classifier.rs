//! Property tests for the disposition classifier.

use proptest::prelude::*;

use nexus::domain::services::{classify, Strategy as Disposition, HEALTHY_THRESHOLD};
use nexus::domain::value_objects::{BusinessValue, Health};

fn any_value() -> impl Strategy<Value = BusinessValue> {
    prop::sample::select(BusinessValue::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: DEPRECATED is always ELIMINATE, whatever the health.
    #[test]
    fn property_deprecated_is_always_eliminated(health in 0i64..=100) {
        let d = classify(BusinessValue::Deprecated, Health::new(health));
        prop_assert_eq!(d.label, Disposition::Eliminate);
    }

    /// PROPERTY: Raising health never moves a record from INVEST/TOLERATE to
    /// MIGRATE/ELIMINATE.
    #[test]
    fn property_more_health_never_worsens(value in any_value(), a in 0i64..=100, b in 0i64..=100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let worse = |s: Disposition| matches!(s, Disposition::Migrate | Disposition::Eliminate);

        let before = classify(value, Health::new(low)).label;
        let after = classify(value, Health::new(high)).label;
        prop_assert!(
            !(worse(after) && !worse(before)),
            "{value:?}: {before} at {low} but {after} at {high}"
        );
    }

    /// PROPERTY: For non-deprecated values the label depends only on which
    /// side of the threshold the health falls.
    #[test]
    fn property_threshold_is_the_only_health_boundary(
        value in any_value(),
        a in 0i64..=100,
        b in 0i64..=100,
    ) {
        let threshold = i64::from(HEALTHY_THRESHOLD);
        prop_assume!((a >= threshold) == (b >= threshold));

        prop_assert_eq!(
            classify(value, Health::new(a)).label,
            classify(value, Health::new(b)).label
        );
    }

    /// PROPERTY: Out-of-range health behaves like the nearest bound.
    #[test]
    fn property_health_clamps(value in any_value(), raw in any::<i64>()) {
        let clamped = raw.clamp(0, 100);
        prop_assert_eq!(classify(value, Health::new(raw)), classify(value, Health::new(clamped)));
    }
}
