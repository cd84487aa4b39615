use crate::errors::Result;
use crate::random::RandomSource;
use crate::sampler::{pick_uniform, pick_weighted_with_sub_variant};
use crate::versions::VersionSequence;

/// Resolve a version from a classified list with an explicit random value.
///
/// Weighted lists without sub-variants are picked uniformly: their weights are ignored.
pub fn resolve_version(sequence: &VersionSequence, r: f64) -> Result<String> {
    match sequence {
        VersionSequence::Bare(values) => pick_uniform(values, r).cloned(),
        VersionSequence::Weighted(records) => pick_uniform(records, r).map(|v| v.value.clone()),
        VersionSequence::WeightedWithSubVariants(records) => {
            pick_weighted_with_sub_variant(records, r).map(str::to_string)
        }
    }
}

/// Resolve a version with a fresh draw from `rng`.
pub fn resolve_version_rng<R: RandomSource + ?Sized>(
    sequence: &VersionSequence,
    rng: &mut R,
) -> Result<String> {
    resolve_version(sequence, rng.next_f64())
}
