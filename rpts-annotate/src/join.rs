use log::{info, warn};

use rpts_core::models::{FamilyMap, HitSet};

use crate::annotated::{AnnotatedHit, AnnotatedHits};
use crate::enrichment::{Enrichment, MissingReason};

/// Join family labels onto a table of hits.
pub trait EnrichWithFamilies {
    ///
    /// Compute `ali_length` for every hit and look its accession up in `families`.
    ///
    /// Rows keep their order; accessions without a usable family record are kept with
    /// [`Enrichment::Missing`]. `families` is only read.
    ///
    fn enrich(&self, families: &FamilyMap) -> AnnotatedHits;
}

impl EnrichWithFamilies for HitSet {
    fn enrich(&self, families: &FamilyMap) -> AnnotatedHits {
        let rows: Vec<AnnotatedHit> = self
            .hits
            .iter()
            .map(|hit| {
                AnnotatedHit::new(hit.clone(), Enrichment::lookup(&hit.family_acc, families))
            })
            .collect();

        let annotated = AnnotatedHits {
            rows,
            extra_columns: self.extra_columns.clone(),
        };

        let unknown = annotated.missing_count_for(MissingReason::UnknownAccession);
        let incomplete = annotated.missing_count_for(MissingReason::IncompleteFamily);
        if unknown + incomplete > 0 {
            warn!(
                "{} of {} hits have no family labels ({} unknown accessions, {} incomplete families)",
                unknown + incomplete,
                annotated.len(),
                unknown,
                incomplete
            );
        }
        info!("{}", annotated);

        annotated
    }
}

///
/// Free function form of [`EnrichWithFamilies::enrich`].
///
pub fn enrich(hits: &HitSet, families: &FamilyMap) -> AnnotatedHits {
    hits.enrich(families)
}
