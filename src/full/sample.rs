//! Samples, subjects, and per-sample expression.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A biological sample (e.g. one TCGA aliquot).
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biosample {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub source: String,
    #[prost(string, tag = "5")]
    pub barcode: String,
    /// "tumor", "normal", ...
    #[prost(string, tag = "6")]
    pub sample_type: String,
    /// Target: `Individual`.
    #[prost(string, repeated, tag = "7")]
    pub sample_of_edges: Vec<String>,
    /// Unpromoted clinical columns.
    #[prost(map = "string, string", tag = "8")]
    pub observations_properties: HashMap<String, String>,
}

impl Biosample {
    pub const TYPE: &'static str = "Biosample";

    pub fn new(id: impl Into<String>, barcode: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            barcode: barcode.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// A study subject; clinical attributes live in the observations bag.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub source: String,
    #[prost(string, tag = "5")]
    pub name: String,
    #[prost(map = "string, string", tag = "6")]
    pub observations_properties: HashMap<String, String>,
}

impl Individual {
    pub const TYPE: &'static str = "Individual";

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// Per-sample expression values keyed by gene/feature identifier.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneExpression {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub source: String,
    #[prost(string, tag = "5")]
    pub barcode: String,
    /// Target: `Biosample`.
    #[prost(string, repeated, tag = "6")]
    pub expression_for_edges: Vec<String>,
    #[prost(map = "string, double", tag = "7")]
    pub expressions: HashMap<String, f64>,
}

impl GeneExpression {
    pub const TYPE: &'static str = "GeneExpression";

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_empty_maps_roundtrip() {
        let sample = Biosample::new("biosample:TCGA-02-0001-01", "TCGA-02-0001-01");
        let decoded = Biosample::decode(sample.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, sample);
        assert!(decoded.observations_properties.is_empty());
    }

    #[test]
    fn test_expression_map_roundtrip() {
        let mut expr = GeneExpression::new("geneExpression:TCGA-02-0001-01");
        expr.expressions.insert("gene:EGFR".into(), 11.53);
        expr.expressions.insert("gene:TP53".into(), 0.0);
        let decoded = GeneExpression::decode(expr.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.expressions.get("gene:EGFR"), Some(&11.53));
        assert_eq!(decoded.expressions.get("gene:TP53"), Some(&0.0));
    }
}
