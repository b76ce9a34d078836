use std::path::Path;

use log::info;
use serde_json::Value;

use rpts_core::models::{Family, FamilyMap};
use rpts_core::utils::get_dynamic_reader;

use crate::error::{LoadError, Result};

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn from_json_error(path: &Path, err: serde_json::Error) -> LoadError {
    if err.is_io() {
        return LoadError::Io(err.into());
    }
    let line = (err.line() > 0).then_some(err.line());
    LoadError::parse(path, line, err.to_string())
}

///
/// Load the repeat family metadata file into a [`FamilyMap`].
///
/// The top level of the document must be an object mapping accession to a family
/// object. Families keep the order of the file and every key they carry.
///
/// # Arguments
/// - path: path to the JSON file, plain or gzipped (`.gz`)
///
pub fn load_families<P: AsRef<Path>>(path: P) -> Result<FamilyMap> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path).map_err(|e| LoadError::not_found(path, e))?;

    let document: Value =
        serde_json::from_reader(reader).map_err(|e| from_json_error(path, e))?;

    let entries = match document {
        Value::Object(entries) => entries,
        other => {
            return Err(LoadError::parse(
                path,
                None,
                format!(
                    "expected an object of families at the top level, found {}",
                    json_kind(&other)
                ),
            ));
        }
    };

    let mut families = FamilyMap::with_capacity(entries.len());
    for (accession, value) in entries {
        if !value.is_object() {
            return Err(LoadError::parse(
                path,
                None,
                format!(
                    "family {} should be an object, found {}",
                    accession,
                    json_kind(&value)
                ),
            ));
        }

        let family: Family = serde_json::from_value(value).map_err(|e| {
            LoadError::parse(path, None, format!("family {}: {}", accession, e))
        })?;
        families.insert(accession, family);
    }

    info!("Loaded {} families from {}", families.len(), path.display());

    Ok(families)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/families")
            .join(file_name)
    }

    fn write_temp(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("families.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[rstest]
    fn test_load_families() {
        let families = load_families(get_test_path("dummy.json")).unwrap();

        assert_eq!(families.len(), 6);
        assert_eq!(
            families.accessions().collect::<Vec<_>>(),
            vec![
                "DF000000001",
                "DF000000002",
                "DF000000003",
                "DF000000004",
                "DF000000005",
                "DF000000006"
            ]
        );

        let mer41 = families.get("DF000000003").unwrap();
        assert_eq!(mer41.repeat_type_name.as_deref(), Some("LTR"));
        assert_eq!(mer41.repeat_subtype_name.as_deref(), Some("ERV1"));
        assert_eq!(mer41.clades, Some(json!([9443])));
        assert_eq!(mer41.other.get("name"), Some(&json!("MER41A")));

        assert_eq!(
            families.get("DF000000005").unwrap().repeat_subtype_name,
            None
        );
    }

    #[rstest]
    fn test_file_order_is_kept_for_unsorted_keys() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &tempdir,
            r#"{"Z": {"repeat_type_name": "LTR"}, "A": {"repeat_type_name": "DNA"}}"#,
        );

        let families = load_families(&path).unwrap();
        assert_eq!(families.accessions().collect::<Vec<_>>(), vec!["Z", "A"]);
    }

    #[rstest]
    #[case::malformed(r#"{"FAM1": {"repeat_type_name": "LTR"}"#)]
    #[case::array_top_level(r#"[{"repeat_type_name": "LTR"}]"#)]
    #[case::string_family(r#"{"FAM1": "LTR"}"#)]
    #[case::empty_document("")]
    fn test_invalid_documents(#[case] contents: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_temp(&tempdir, contents);

        let err = load_families(&path).unwrap_err();
        assert!(err.is_parse_error(), "unexpected error: {}", err);
    }

    #[rstest]
    fn test_non_string_label_does_not_fail_the_load() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &tempdir,
            r#"{"FAM1": {"repeat_type_name": 7, "repeat_subtype_name": "Gypsy"}, "FAM2": {"repeat_type_name": "LTR"}}"#,
        );

        let families = load_families(&path).unwrap();
        assert_eq!(families.len(), 2);
        assert_eq!(families.get("FAM1").unwrap().repeat_type_name, None);
        assert_eq!(
            families.get("FAM2").unwrap().repeat_type_name.as_deref(),
            Some("LTR")
        );
    }

    #[rstest]
    fn test_empty_object_is_valid() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_temp(&tempdir, "{}");

        assert!(load_families(&path).unwrap().is_empty());
    }

    #[rstest]
    fn test_missing_file() {
        let err = load_families(get_test_path("missing.json")).unwrap_err();
        assert!(err.is_file_not_found());
    }
}
