use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};
use serde::Serialize;

use rpts_annotate::{AnnotatedHit, AnnotatedHits, EnrichWithFamilies, FamilyTable, MissingReason};
use rpts_stats::{
    AlignmentLengthStatistics, AnnotatedHitStatistics, FamilyColumn, FamilyTableStatistics,
    Histogram, HitColumn, HitTableStatistics, LengthCount, LengthSummary, PairCount, ValueCount,
};

use crate::inputs::load_inputs;

#[derive(Serialize)]
pub struct SummaryOutput {
    pub hits: HitsSummary,
    pub families: FamiliesSummary,
    pub enrichment: EnrichmentSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_type: Option<RepeatTypeSummary>,
}

#[derive(Serialize)]
pub struct ColumnSummary {
    pub column: &'static str,
    pub n_unique: usize,
    pub value_counts: Vec<ValueCount>,
}

#[derive(Serialize)]
pub struct HitsSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub number_of_hits: usize,
    pub columns: Vec<ColumnSummary>,
    pub ali_length: Option<LengthSummary>,
    pub ali_length_counts: Vec<LengthCount>,
    pub ali_length_histogram: Histogram,
    pub longest: Vec<AnnotatedHit>,
}

#[derive(Serialize)]
pub struct FamiliesSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub number_of_families: usize,
    pub columns: Vec<ColumnSummary>,
    pub type_subtype_counts: Vec<PairCount>,
}

#[derive(Serialize)]
pub struct EnrichmentSummary {
    pub matched: usize,
    pub missing: usize,
    pub unknown_accession: usize,
    pub incomplete_family: usize,
    pub missing_fraction: f64,
    pub repeat_type_counts: Vec<ValueCount>,
    pub repeat_subtype_counts: Vec<ValueCount>,
}

#[derive(Serialize)]
pub struct RepeatTypeSummary {
    pub repeat_type_name: String,
    pub hits: HitsSummary,
    pub families: FamiliesSummary,
    pub classifications: Vec<String>,
}

/// Listing sizes for one summary run.
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    pub bins: usize,
    pub top: usize,
    pub longest: usize,
}

fn top<T>(mut values: Vec<T>, n: usize) -> Vec<T> {
    values.truncate(n);
    values
}

fn summarize_hits(
    annotated: &AnnotatedHits,
    path: Option<&Path>,
    options: SummaryOptions,
) -> Result<HitsSummary> {
    let columns = HitColumn::ALL
        .into_iter()
        .map(|column| ColumnSummary {
            column: column.name(),
            n_unique: annotated.n_unique(column),
            value_counts: top(annotated.value_counts(column), options.top),
        })
        .collect();

    let ali_length_histogram = annotated
        .ali_length_histogram(options.bins)
        .context("Failed to bin alignment lengths")?;

    Ok(HitsSummary {
        path: path.map(|p| p.display().to_string()),
        number_of_hits: annotated.len(),
        columns,
        ali_length: annotated.ali_length_summary(),
        ali_length_counts: top(annotated.ali_length_counts(), options.top),
        ali_length_histogram,
        longest: annotated
            .longest(options.longest)
            .into_iter()
            .cloned()
            .collect(),
    })
}

fn summarize_families(
    table: &FamilyTable,
    path: Option<&Path>,
    options: SummaryOptions,
) -> FamiliesSummary {
    let columns = FamilyColumn::ALL
        .into_iter()
        .map(|column| ColumnSummary {
            column: column.name(),
            n_unique: table.n_unique(column),
            value_counts: top(table.value_counts(column), options.top),
        })
        .collect();

    FamiliesSummary {
        path: path.map(|p| p.display().to_string()),
        number_of_families: table.len(),
        columns,
        type_subtype_counts: top(table.type_subtype_counts(), options.top),
    }
}

fn summarize_enrichment(annotated: &AnnotatedHits, options: SummaryOptions) -> EnrichmentSummary {
    let missing = annotated.missing_count();

    EnrichmentSummary {
        matched: annotated.len() - missing,
        missing,
        unknown_accession: annotated.missing_count_for(MissingReason::UnknownAccession),
        incomplete_family: annotated.missing_count_for(MissingReason::IncompleteFamily),
        missing_fraction: annotated.missing_fraction(),
        repeat_type_counts: top(annotated.repeat_type_counts(), options.top),
        repeat_subtype_counts: top(annotated.repeat_subtype_counts(), options.top),
    }
}

///
/// Build the full summary document. The per-type section is only present when a
/// repeat type is given.
///
pub fn build_summary(
    annotated: &AnnotatedHits,
    families: &FamilyTable,
    repeat_type: Option<&str>,
    paths: (Option<&Path>, Option<&Path>),
    options: SummaryOptions,
) -> Result<SummaryOutput> {
    let (hits_path, families_path) = paths;

    let repeat_type = match repeat_type {
        Some(label) => {
            let selected_hits = annotated.filter_by_repeat_type(label);
            let selected_families = families.filter_by_repeat_type(label);
            if selected_hits.is_empty() {
                warn!("No hits with repeat type '{}'", label);
            }
            info!(
                "{} hits and {} families with repeat type '{}'",
                selected_hits.len(),
                selected_families.len(),
                label
            );

            Some(RepeatTypeSummary {
                repeat_type_name: label.to_string(),
                hits: summarize_hits(&selected_hits, None, options)?,
                families: summarize_families(&selected_families, None, options),
                classifications: selected_families.classifications(),
            })
        }
        None => None,
    };

    Ok(SummaryOutput {
        hits: summarize_hits(annotated, hits_path, options)?,
        families: summarize_families(families, families_path, options),
        enrichment: summarize_enrichment(annotated, options),
        repeat_type,
    })
}

pub fn run_summary(matches: &ArgMatches) -> Result<()> {
    let options = SummaryOptions {
        bins: *matches.get_one::<usize>("bins").context("--bins is required")?,
        top: *matches.get_one::<usize>("top").context("--top is required")?,
        longest: *matches
            .get_one::<usize>("longest")
            .context("--longest is required")?,
    };
    if options.bins == 0 {
        anyhow::bail!("--bins must be a positive integer");
    }
    let repeat_type = matches.get_one::<String>("repeat-type");

    let inputs = load_inputs(matches)?;
    let annotated = inputs.hits.enrich(&inputs.families);
    let families = FamilyTable::from(&inputs.families);

    let output = build_summary(
        &annotated,
        &families,
        repeat_type.map(String::as_str),
        (
            Some(inputs.hits_path.as_path()),
            Some(inputs.families_path.as_path()),
        ),
        options,
    )?;

    let json =
        serde_json::to_string_pretty(&output).context("Failed to serialize summary to JSON")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(json.as_bytes())?;
    writeln!(stdout)?;

    Ok(())
}
