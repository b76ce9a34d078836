use std::io::{BufRead, ErrorKind};
use std::path::Path;

use log::{debug, info};

use rpts_core::HitsSchema;
use rpts_core::models::{Hit, HitSet, Strand};
use rpts_core::schema::ColumnLayout;
use rpts_core::utils::get_dynamic_reader;

use crate::error::{LoadError, Result};

///
/// Load a hits file into a [`HitSet`].
///
/// The file is read line by line and split with the schema's delimiter. Blank lines
/// and lines starting with `#` are skipped. A `#` line before the first data row whose
/// fields are the schema's columns is kept as the header. A `#` line there that starts
/// with the schema's first column but lists other columns is an error.
///
/// Every data row must have exactly as many fields as the schema, integer `ali-st`
/// and `ali-en`, and a `+`/`-` strand. Any violation aborts the whole load.
///
/// # Arguments
/// - path: path to the hits file, plain or gzipped (`.gz`)
/// - schema: column layout of the file
///
pub fn load_hits<P: AsRef<Path>>(path: P, schema: &HitsSchema) -> Result<HitSet> {
    let path = path.as_ref();
    let layout = schema.layout()?;

    let reader = get_dynamic_reader(path).map_err(|e| LoadError::not_found(path, e))?;

    let mut hits: Vec<Hit> = Vec::new();
    let mut header: Option<String> = None;
    let mut skipped: usize = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(LoadError::parse(
                    path,
                    Some(line_number),
                    "line is not valid UTF-8",
                ));
            }
            Err(e) => return Err(e.into()),
        };

        if line.trim().is_empty() {
            skipped += 1;
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            let before_data = hits.is_empty() && header.is_none();
            if before_data && schema.matches_header(comment) {
                header = Some(line.clone());
            } else if before_data && names_first_column(comment, schema) {
                return Err(LoadError::parse(
                    path,
                    Some(line_number),
                    format!(
                        "header does not match the hits schema, expected columns: {}",
                        schema.columns.join(", ")
                    ),
                ));
            } else {
                skipped += 1;
            }
            continue;
        }

        let hit = parse_hit_line(&line, schema, &layout)
            .map_err(|message| LoadError::parse(path, Some(line_number), message))?;
        hits.push(hit);
    }

    debug!(
        "Skipped {} blank or comment lines in {}",
        skipped,
        path.display()
    );
    info!("Loaded {} hits from {}", hits.len(), path.display());

    Ok(HitSet {
        hits,
        extra_columns: schema.extra_columns(),
        header,
        path: Some(path.to_owned()),
    })
}

/// Does a comment line start with the schema's first column name?
fn names_first_column(comment: &str, schema: &HitsSchema) -> bool {
    let fields = schema.delimiter.split(comment.trim_end());
    match (fields.first(), schema.columns.first()) {
        (Some(field), Some(column)) => field.trim() == column.as_str(),
        _ => false,
    }
}

///
/// Parse a single data row of a hits file.
///
pub fn parse_hit_line(
    line: &str,
    schema: &HitsSchema,
    layout: &ColumnLayout,
) -> std::result::Result<Hit, String> {
    let fields = schema.delimiter.split(line);

    if fields.len() != layout.width {
        return Err(format!(
            "expected {} fields, found {}",
            layout.width,
            fields.len()
        ));
    }

    let parse_coordinate = |index: usize| {
        fields[index].trim().parse::<i64>().map_err(|_err| {
            format!(
                "column `{}` is not an integer: {:?}",
                schema.columns[index], fields[index]
            )
        })
    };

    Ok(Hit {
        seq_name: fields[layout.seq_name].to_string(),
        family_acc: fields[layout.family_acc].to_string(),
        family_name: fields[layout.family_name].to_string(),
        strand: fields[layout.strand].trim().parse::<Strand>()?,
        ali_st: parse_coordinate(layout.ali_st)?,
        ali_en: parse_coordinate(layout.ali_en)?,
        extra: layout
            .extra
            .iter()
            .map(|&i| fields[i].to_string())
            .collect(),
    })
}
