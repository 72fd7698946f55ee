//! Cohort and matrix analytics: sample sets, named vectors, and the
//! payload-bearing edges that tie matrix rows to vectors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named set of biosamples.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub name: String,
    /// Target: `Biosample`.
    #[prost(string, repeated, tag = "5")]
    pub has_sample_edges: Vec<String>,
}

impl Cohort {
    pub const TYPE: &'static str = "Cohort";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// A sparse vector of doubles keyed by the names of a keyspace.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubleVector {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    /// Target: `Keyspace`.
    #[prost(string, repeated, tag = "4")]
    pub in_keyspace_edges: Vec<String>,
    #[prost(map = "string, double", tag = "5")]
    pub values: HashMap<String, f64>,
}

impl DoubleVector {
    pub const TYPE: &'static str = "DoubleVector";

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// The column namespace shared by the vectors of a matrix.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyspace {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(string, repeated, tag = "5")]
    pub keys: Vec<String>,
}

impl Keyspace {
    pub const TYPE: &'static str = "Keyspace";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// A matrix over a cohort: rows are vectors, columns come from a keyspace.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortMatrix {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub name: String,
    /// Target: `Cohort`.
    #[prost(string, repeated, tag = "5")]
    pub for_cohort_edges: Vec<String>,
    /// Target: `Keyspace`.
    #[prost(string, repeated, tag = "6")]
    pub in_keyspace_edges: Vec<String>,
}

impl CohortMatrix {
    pub const TYPE: &'static str = "CohortMatrix";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// Payload-bearing edge from a `CohortMatrix` to a `DoubleVector`.
///
/// Unlike the bare-string edge fields, the connection itself carries data
/// (the row label), so it is a standalone record with explicit endpoints.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixVectorEdge {
    /// `CohortMatrix.id` this edge leaves from.
    #[prost(string, tag = "1")]
    pub r#in: String,
    /// `DoubleVector.id` this edge points to.
    #[prost(string, tag = "2")]
    pub out: String,
    #[prost(string, tag = "3")]
    pub row_name: String,
}

impl MatrixVectorEdge {
    pub fn new(
        matrix: impl Into<String>,
        vector: impl Into<String>,
        row_name: impl Into<String>,
    ) -> Self {
        Self {
            r#in: matrix.into(),
            out: vector.into(),
            row_name: row_name.into(),
        }
    }
}

/// An analysis derived from a cohort matrix.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixAnalysis {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub name: String,
    /// Target: `CohortMatrix`.
    #[prost(string, repeated, tag = "5")]
    pub analysis_of_edges: Vec<String>,
    #[prost(map = "string, string", tag = "6")]
    pub info_properties: HashMap<String, String>,
}

impl MatrixAnalysis {
    pub const TYPE: &'static str = "MatrixAnalysis";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
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
    fn test_matrix_vector_edge_roundtrip() {
        let edge = MatrixVectorEdge::new(
            "cohortMatrix:GBM:expression",
            "doubleVector:GBM:TCGA-02-0001-01",
            "TCGA-02-0001-01",
        );
        let decoded = MatrixVectorEdge::decode(edge.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, edge);
        assert_eq!(decoded.row_name, "TCGA-02-0001-01");
    }

    #[test]
    fn test_keyspace_keys_preserve_order() {
        let mut ks = Keyspace::new("keyspace:hugo", "hugo");
        ks.keys = vec!["EGFR".into(), "TP53".into(), "KRAS".into()];
        let decoded = Keyspace::decode(ks.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.keys, ks.keys);
    }
}
