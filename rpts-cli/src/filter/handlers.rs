use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use rpts_annotate::{AnnotatedHits, EnrichWithFamilies, TypeKey};

use crate::inputs::load_inputs;

///
/// Select the rows to print: every row of one repeat type, or every row without
/// family labels.
///
pub fn select_rows(annotated: &AnnotatedHits, key: &TypeKey) -> AnnotatedHits {
    let selected = annotated.filter_by_type_key(key);
    if selected.is_empty() {
        warn!("No hits for repeat type {}", key);
    }
    info!("Selected {} of {} hits", selected.len(), annotated.len());

    selected
}

pub fn write_tsv<W: Write>(rows: &AnnotatedHits, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", rows.tsv_header())?;
    for row in rows {
        writeln!(writer, "{}", row)?;
    }
    writer.flush()
}

pub fn run_filter(matches: &ArgMatches) -> Result<()> {
    let key = if matches.get_flag("missing") {
        TypeKey::Missing
    } else {
        let label = matches
            .get_one::<String>("repeat-type")
            .context("--repeat-type is required unless --missing is given")?;
        TypeKey::Named(label.to_string())
    };

    let inputs = load_inputs(matches)?;
    let annotated = inputs.hits.enrich(&inputs.families);
    let selected = select_rows(&annotated, &key);

    let mut writer = BufWriter::new(io::stdout().lock());
    write_tsv(&selected, &mut writer).context("Failed to write hits to stdout")?;

    Ok(())
}
