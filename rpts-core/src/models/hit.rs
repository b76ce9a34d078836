use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strand::Forward => "+",
            Strand::Reverse => "-",
        }
    }
}

impl FromStr for Strand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Err(format!("Invalid strand: {:?}, expected `+` or `-`", s)),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// Hit struct, one repeat annotation: a region of `seq_name` aligned to the
/// repeat family `family_acc`.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hit {
    pub seq_name: String,
    pub family_acc: String,
    pub family_name: String,
    pub strand: Strand,
    /// Alignment start. Reverse strand hits have `ali_st > ali_en`.
    #[serde(rename = "ali-st")]
    pub ali_st: i64,
    #[serde(rename = "ali-en")]
    pub ali_en: i64,

    /// Remaining columns of the row, unparsed, in schema order.
    pub extra: Vec<String>,
}

impl Hit {
    ///
    /// Length of the aligned region, both ends included: `|ali-en - ali-st| + 1`.
    ///
    pub fn ali_length(&self) -> u64 {
        self.ali_en.abs_diff(self.ali_st).saturating_add(1)
    }

    ///
    /// Get the typed fields of the hit as a tab separated string
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.seq_name, self.family_acc, self.family_name, self.strand, self.ali_st, self.ali_en
        )
    }
}

impl Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn hit() -> Hit {
        Hit {
            seq_name: "chr1".to_string(),
            family_acc: "DF0000001".to_string(),
            family_name: "MIR".to_string(),
            strand: Strand::Forward,
            ali_st: 100,
            ali_en: 200,
            extra: vec![],
        }
    }

    #[rstest]
    #[case(100, 200, 101)]
    #[case(300, 250, 51)]
    #[case(42, 42, 1)]
    #[case(-5, 5, 11)]
    fn test_ali_length(mut hit: Hit, #[case] st: i64, #[case] en: i64, #[case] expected: u64) {
        hit.ali_st = st;
        hit.ali_en = en;
        assert_eq!(hit.ali_length(), expected);
    }

    #[rstest]
    fn test_ali_length_does_not_overflow(mut hit: Hit) {
        hit.ali_st = i64::MIN;
        hit.ali_en = i64::MAX;
        assert_eq!(hit.ali_length(), u64::MAX);
    }

    #[rstest]
    fn test_as_string(hit: Hit) {
        assert_eq!(hit.as_string(), "chr1\tDF0000001\tMIR\t+\t100\t200");
    }

    #[rstest]
    #[case("+", Some(Strand::Forward))]
    #[case("-", Some(Strand::Reverse))]
    #[case(".", None)]
    #[case("forward", None)]
    fn test_parse_strand(#[case] raw: &str, #[case] expected: Option<Strand>) {
        assert_eq!(raw.parse::<Strand>().ok(), expected);
    }
}
