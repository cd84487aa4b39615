use std::collections::HashMap;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spider_ua_generator::sampler::{pick_uniform, pick_weighted, pick_weighted_with_sub_variant};
use spider_ua_generator::versions::{VersionRole, VersionSequence, WeightedVersion};
use spider_ua_generator::{
    BrowserKind, DeviceKind, EmbeddedTables, GenerationRequest, ScriptedRandom, TableCache,
    UserAgentGenerator,
};

const DRAWS: usize = 100_000;
const TOLERANCE: f64 = 0.05;

fn chrome_buckets() -> Vec<WeightedVersion> {
    let mut cache = TableCache::new(EmbeddedTables);
    let table = cache.get("chrome.json").unwrap();
    match table.require(VersionRole::Primary).unwrap() {
        VersionSequence::WeightedWithSubVariants(records) => records.clone(),
        other => panic!("chrome.json should carry sub-variants, got {other:?}"),
    }
}

#[test]
fn chrome_weights_hold_over_many_draws() {
    let buckets = chrome_buckets();
    let total: f64 = buckets.iter().map(|b| b.weight).sum();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for _ in 0..DRAWS {
        let picked = pick_weighted(&buckets, rng.random::<f64>()).unwrap();
        *counts.entry(picked.value.as_str()).or_default() += 1;
    }

    let mut observed_total = 0.0;
    for bucket in &buckets {
        let expected = bucket.weight / total;
        let observed = *counts.get(bucket.value.as_str()).unwrap_or(&0) as f64 / DRAWS as f64;
        observed_total += observed;
        assert!(
            (observed - expected).abs() <= TOLERANCE,
            "version {}: expected {expected:.3}, got {observed:.3}",
            bucket.value
        );
    }
    assert!((observed_total - 1.0).abs() < 1e-9);
}

#[test]
fn big_weight_dominates() {
    let items = vec![("big", 9999.0), ("small", 1.0)];
    let mut rng = StdRng::seed_from_u64(9);
    let big = (0..10_000)
        .filter(|_| pick_weighted(&items, rng.random::<f64>()).unwrap().0 == "big")
        .count();
    assert!(big > 9900);
}

#[test]
fn chrome_sub_variants_are_reproducible_per_draw() {
    let buckets = chrome_buckets();
    let mut generator = UserAgentGenerator::new(EmbeddedTables, ScriptedRandom::new(vec![0.42]));
    let request = GenerationRequest::new()
        .with_browser(BrowserKind::Chrome)
        .with_device(DeviceKind::DesktopWindows)
        .with_count(2);
    let records = generator.generate(&request).unwrap().into_vec();
    let expected = pick_weighted_with_sub_variant(&buckets, 0.42).unwrap();
    for record in records {
        assert!(record.ua().contains(&format!("Chrome/{expected} ")));
    }
}

fn weighted_items() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec(-5.0f64..50.0, 1..12)
        .prop_map(|weights| weights.into_iter().enumerate().collect())
}

proptest! {
    #[test]
    fn uniform_index_is_floor_of_r_times_len(len in 1usize..64, r in 0.0f64..1.0) {
        let items: Vec<usize> = (0..len).collect();
        let expected = ((r.min(1.0 - 1e-6) * len as f64).floor() as usize).min(len - 1);
        prop_assert_eq!(*pick_uniform(&items, r).unwrap(), expected);
    }

    #[test]
    fn single_item_always_wins(weight in -10.0f64..10.0, r in 0.0f64..=1.0) {
        let items = vec![("only", weight)];
        prop_assert_eq!(pick_weighted(&items, r).unwrap().0, "only");
    }

    #[test]
    fn all_zero_weights_pick_last(len in 2usize..10, r in 0.0f64..=1.0) {
        let items: Vec<(usize, f64)> = (0..len).map(|i| (i, 0.0)).collect();
        prop_assert_eq!(pick_weighted(&items, r).unwrap().0, len - 1);
    }

    #[test]
    fn weighted_picks_never_land_on_zero_weight_when_total_positive(
        items in weighted_items(),
        r in 0.0f64..=1.0,
    ) {
        let total: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();
        prop_assume!(items.len() > 1 && total > 0.0);
        let picked = pick_weighted(&items, r).unwrap();
        prop_assert!(picked.1 > 0.0);
    }

    #[test]
    fn sub_variant_pick_is_a_function_of_the_draw(
        weights in prop::collection::vec(0.1f64..10.0, 1..6),
        r in 0.0f64..1.0,
    ) {
        let buckets: Vec<WeightedVersion> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| {
                WeightedVersion::new(i.to_string(), *w)
                    .with_sub_variants((0..=i).map(|j| format!("{i}.{j}")))
            })
            .collect();
        let first = pick_weighted_with_sub_variant(&buckets, r).unwrap();
        let second = pick_weighted_with_sub_variant(&buckets, r).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_generated_ua_starts_with_mozilla(seed in any::<u64>(), count in 1usize..5) {
        let mut generator = UserAgentGenerator::new(
            EmbeddedTables,
            spider_ua_generator::RngRandom::seeded(seed),
        );
        let out = generator.generate(&GenerationRequest::new().with_count(count)).unwrap();
        prop_assert_eq!(out.len(), count);
        for record in out.into_vec() {
            prop_assert!(record.ua().starts_with("Mozilla/5.0"));
        }
    }
}
