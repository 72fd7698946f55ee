//! Predictive signatures over expression data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A linear model predicting a phenotype (typically drug response) from
/// expression levels. Coefficients are keyed by gene/feature identifier.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearSignature {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    /// What the model predicts (e.g. a drug-response label).
    #[prost(string, tag = "4")]
    pub predicts: String,
    #[prost(double, tag = "5")]
    pub intercept: f64,
    /// Reference quantiles applied to inputs before scoring.
    #[prost(double, repeated, tag = "6")]
    pub quantile_normalization: Vec<f64>,
    /// Score distribution over the training background.
    #[prost(double, repeated, tag = "7")]
    pub background: Vec<f64>,
    #[prost(map = "string, double", tag = "8")]
    pub coefficients: HashMap<String, f64>,
    /// Target: `Drug`.
    #[prost(string, repeated, tag = "9")]
    pub predicts_response_to_edges: Vec<String>,
}

impl LinearSignature {
    pub const TYPE: &'static str = "LinearSignature";

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// Payload-bearing edge from a `LinearSignature` to a `GeneExpression`,
/// carrying the signature's level for that sample.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureExpressionEdge {
    /// `LinearSignature.id` this edge leaves from.
    #[prost(string, tag = "1")]
    pub r#in: String,
    /// `GeneExpression.id` this edge points to.
    #[prost(string, tag = "2")]
    pub out: String,
    #[prost(double, tag = "3")]
    pub level: f64,
}

impl SignatureExpressionEdge {
    pub fn new(signature: impl Into<String>, expression: impl Into<String>, level: f64) -> Self {
        Self {
            r#in: signature.into(),
            out: expression.into(),
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_signature_roundtrip() {
        let mut sig = LinearSignature::new("linearSignature:gefitinib");
        sig.predicts = "gefitinib-response".into();
        sig.intercept = -0.25;
        sig.quantile_normalization = vec![0.1, 0.5, 0.9];
        sig.background = vec![-1.0, 0.0, 1.0];
        sig.coefficients.insert("gene:EGFR".into(), 0.8);
        sig.predicts_response_to_edges.push("drug:gefitinib".into());

        let decoded = LinearSignature::decode(sig.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, sig);
    }

    #[test]
    fn test_expression_edge_level() {
        let edge = SignatureExpressionEdge::new(
            "linearSignature:gefitinib",
            "geneExpression:TCGA-02-0001-01",
            0.73,
        );
        let decoded =
            SignatureExpressionEdge::decode(edge.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.level, 0.73);
    }
}
