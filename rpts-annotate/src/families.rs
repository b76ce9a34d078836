use serde::Serialize;

use rpts_core::models::FamilyMap;

///
/// One family as a flat row. `clades` and any other nested metadata are left out.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyRow {
    pub accession: String,
    pub repeat_type_name: Option<String>,
    pub repeat_subtype_name: Option<String>,
    pub classification: Option<String>,
}

///
/// The family metadata as a table, one row per accession in file order.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FamilyTable {
    pub rows: Vec<FamilyRow>,
}

impl From<&FamilyMap> for FamilyTable {
    fn from(families: &FamilyMap) -> Self {
        let rows = families
            .iter()
            .map(|(accession, family)| FamilyRow {
                accession: accession.to_string(),
                repeat_type_name: family.repeat_type_name.clone(),
                repeat_subtype_name: family.repeat_subtype_name.clone(),
                classification: family.classification.clone(),
            })
            .collect();

        FamilyTable { rows }
    }
}

impl<'a> IntoIterator for &'a FamilyTable {
    type Item = &'a FamilyRow;
    type IntoIter = std::slice::Iter<'a, FamilyRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FamilyTable {
    pub fn iter(&self) -> std::slice::Iter<'_, FamilyRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    ///
    /// Keep the families whose `repeat_type_name` equals the label, in their original
    /// order. No match gives an empty table.
    ///
    pub fn filter_by_repeat_type(&self, repeat_type_name: &str) -> FamilyTable {
        FamilyTable {
            rows: filter_families_by_repeat_type(&self.rows, repeat_type_name),
        }
    }
}

/// Flatten the family map into rows, one per accession in file order.
pub fn family_table(families: &FamilyMap) -> Vec<FamilyRow> {
    FamilyTable::from(families).rows
}

/// Rows whose `repeat_type_name` equals the label, order preserved.
pub fn filter_families_by_repeat_type(rows: &[FamilyRow], repeat_type_name: &str) -> Vec<FamilyRow> {
    rows.iter()
        .filter(|row| row.repeat_type_name.as_deref() == Some(repeat_type_name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    use rpts_core::models::Family;

    #[fixture]
    fn families() -> FamilyMap {
        let mut with_clades = Family::new("LTR", "ERV1", "root;LTR;ERV1");
        with_clades.clades = Some(json!([9606]));

        FamilyMap::from_iter([
            ("F3".to_string(), with_clades),
            ("F1".to_string(), Family::new("SINE", "Alu", "root;SINE;Alu")),
            ("F2".to_string(), Family::new("LTR", "Gypsy", "root;LTR;Gypsy")),
        ])
    }

    #[rstest]
    fn test_table_follows_map_order(families: FamilyMap) {
        let table = FamilyTable::from(&families);
        let accessions: Vec<&str> = table.iter().map(|r| r.accession.as_str()).collect();
        assert_eq!(accessions, vec!["F3", "F1", "F2"]);
        assert_eq!(
            table.rows[0].classification.as_deref(),
            Some("root;LTR;ERV1")
        );
    }

    #[rstest]
    fn test_filter_families_by_repeat_type(families: FamilyMap) {
        let table = FamilyTable::from(&families);

        let ltr = table.filter_by_repeat_type("LTR");
        let accessions: Vec<&str> = ltr.iter().map(|r| r.accession.as_str()).collect();
        assert_eq!(accessions, vec!["F3", "F2"]);

        assert!(table.filter_by_repeat_type("DNA").is_empty());
    }

    #[rstest]
    fn test_family_row_helpers(families: FamilyMap) {
        let rows = family_table(&families);
        assert_eq!(rows.len(), 3);

        let sine = filter_families_by_repeat_type(&rows, "SINE");
        assert_eq!(sine.len(), 1);
        assert_eq!(sine[0].accession, "F1");
        assert_eq!(
            filter_families_by_repeat_type(&rows, "LTR"),
            FamilyTable::from(&families).filter_by_repeat_type("LTR").rows
        );
        assert!(filter_families_by_repeat_type(&rows, "LINE").is_empty());
    }
}
