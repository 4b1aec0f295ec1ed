//! Property tests for the filtering and aggregation invariants.

use launchboard::dataset::{Dataset, LaunchRecord, Outcome};
use launchboard::services::{
    aggregate_outcomes, filter_by_payload, PayloadRange, SiteSelection,
};
use proptest::prelude::*;

const SITES: &[&str] = &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const CATEGORIES: &[&str] = &["v1.0", "v1.1", "FT", "B4", "B5"];

fn arb_record() -> impl Strategy<Value = LaunchRecord> {
    (
        0..SITES.len(),
        0.0..10_000.0f64,
        0..CATEGORIES.len(),
        any::<bool>(),
    )
        .prop_map(|(site, mass, category, success)| LaunchRecord {
            launch_site: SITES[site].to_string(),
            payload_mass_kg: mass,
            booster_category: CATEGORIES[category].to_string(),
            outcome: if success { Outcome::Success } else { Outcome::Failure },
        })
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_record(), 0..50).prop_map(Dataset::new)
}

fn arb_selection() -> impl Strategy<Value = SiteSelection> {
    prop_oneof![
        Just(SiteSelection::All),
        (0..SITES.len()).prop_map(|i| SiteSelection::Site(SITES[i].to_string())),
        Just(SiteSelection::Site("no such site".to_string())),
    ]
}

proptest! {
    #[test]
    fn prop_all_sites_sum_equals_outcome_sum(dataset in arb_dataset()) {
        let counts = aggregate_outcomes(&dataset, &SiteSelection::All);
        let total: u64 = counts.iter().map(|c| c.count).sum();
        let expected: u64 = dataset
            .records()
            .iter()
            .map(|r| u64::from(r.outcome.value()))
            .sum();
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn prop_site_sum_equals_site_record_count(dataset in arb_dataset(), site in 0..SITES.len()) {
        let selection = SiteSelection::Site(SITES[site].to_string());
        let counts = aggregate_outcomes(&dataset, &selection);
        let total: u64 = counts.iter().map(|c| c.count).sum();
        let expected = dataset
            .records()
            .iter()
            .filter(|r| r.launch_site == SITES[site])
            .count() as u64;
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn prop_filtered_records_satisfy_predicates(
        dataset in arb_dataset(),
        low in 0.0..10_000.0f64,
        high in 0.0..10_000.0f64,
        selection in arb_selection(),
    ) {
        let range = PayloadRange::new(low, high);
        let hits = filter_by_payload(&dataset, &range, &selection);
        for record in &hits {
            prop_assert!(range.contains(record.payload_mass_kg));
            prop_assert!(selection.matches(record));
        }
    }

    #[test]
    fn prop_filter_is_idempotent(
        dataset in arb_dataset(),
        low in 0.0..10_000.0f64,
        high in 0.0..10_000.0f64,
        selection in arb_selection(),
    ) {
        let range = PayloadRange::new(low, high);
        let once = filter_by_payload(&dataset, &range, &selection);
        let again: Vec<_> = once
            .iter()
            .copied()
            .filter(|r| range.contains(r.payload_mass_kg) && selection.matches(r))
            .collect();
        prop_assert_eq!(once, again);
    }

    #[test]
    fn prop_inverted_range_is_empty(
        dataset in arb_dataset(),
        low in 0.0..10_000.0f64,
        delta in 0.001..1_000.0f64,
        selection in arb_selection(),
    ) {
        let range = PayloadRange::new(low + delta, low);
        let hits = filter_by_payload(&dataset, &range, &selection);
        prop_assert!(hits.is_empty());
    }

    #[test]
    fn prop_full_bounds_return_site_restricted_dataset(
        dataset in arb_dataset(),
        selection in arb_selection(),
    ) {
        let range = PayloadRange::from(dataset.payload_bounds());
        let hits = filter_by_payload(&dataset, &range, &selection);
        let expected = dataset
            .records()
            .iter()
            .filter(|r| selection.matches(r))
            .count();
        prop_assert_eq!(hits.len(), expected);
    }

    #[test]
    fn prop_dataset_order_is_preserved(
        dataset in arb_dataset(),
        low in 0.0..10_000.0f64,
        high in 0.0..10_000.0f64,
    ) {
        let range = PayloadRange::new(low, high);
        let hits = filter_by_payload(&dataset, &range, &SiteSelection::All);
        // Each hit points into the dataset, in increasing index order
        let mut last_index = 0usize;
        for hit in hits {
            let index = dataset
                .records()
                .iter()
                .position(|r| std::ptr::eq(r, hit))
                .expect("hit must borrow from dataset");
            prop_assert!(index >= last_index);
            last_index = index;
        }
    }
}
