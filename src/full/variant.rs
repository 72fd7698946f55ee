//! Variant calls and their functional effects.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A somatic variant call from a MAF-style source, with tumor/normal alleles.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantCall {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    /// Ingestion source (e.g. the MAF file or center the call came from).
    #[prost(string, tag = "4")]
    pub source: String,
    /// SNP, INS, DEL, ...
    #[prost(string, tag = "5")]
    pub variant_type: String,
    #[prost(string, tag = "6")]
    pub reference_allele: String,
    #[prost(string, tag = "7")]
    pub normal_allele1: String,
    #[prost(string, tag = "8")]
    pub normal_allele2: String,
    #[prost(string, tag = "9")]
    pub tumor_allele1: String,
    #[prost(string, tag = "10")]
    pub tumor_allele2: String,
    #[prost(string, tag = "11")]
    pub sequencer: String,
    /// Target: `Position`.
    #[prost(string, repeated, tag = "12")]
    pub at_position_edges: Vec<String>,
    /// Target: `Biosample`.
    #[prost(string, repeated, tag = "13")]
    pub tumor_sample_edges: Vec<String>,
    /// Target: `Biosample`.
    #[prost(string, repeated, tag = "14")]
    pub normal_sample_edges: Vec<String>,
    /// Unpromoted MAF columns.
    #[prost(map = "string, string", tag = "15")]
    pub info_properties: HashMap<String, String>,
}

impl VariantCall {
    pub const TYPE: &'static str = "VariantCall";

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// The functional consequence of a variant call on a gene or domain.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantCallEffect {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub source: String,
    /// Missense_Mutation, Silent, Nonsense_Mutation, ...
    #[prost(string, tag = "5")]
    pub variant_classification: String,
    #[prost(string, tag = "6")]
    pub dbsnp_rs: String,
    #[prost(string, tag = "7")]
    pub dbsnp_val_status: String,
    /// Target: `Domain`.
    #[prost(string, repeated, tag = "8")]
    pub in_domain_edges: Vec<String>,
    /// Target: `Gene`.
    #[prost(string, repeated, tag = "9")]
    pub in_gene_edges: Vec<String>,
    /// Target: `VariantCall`.
    #[prost(string, repeated, tag = "10")]
    pub effect_of_edges: Vec<String>,
    #[prost(map = "string, string", tag = "11")]
    pub info_properties: HashMap<String, String>,
}

impl VariantCallEffect {
    pub const TYPE: &'static str = "VariantCallEffect";

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
    fn test_roundtrip_with_info_map() {
        let mut call = VariantCall::new("variantCall:broad:TCGA-02-0001:7:55249071");
        call.source = "broad.mit.edu".into();
        call.variant_type = "SNP".into();
        call.reference_allele = "C".into();
        call.tumor_allele1 = "T".into();
        call.at_position_edges.push("position:7:55249071:55249072".into());
        call.info_properties.insert("center".into(), "broad".into());
        call.info_properties.insert("ncbiBuild".into(), "37".into());

        let bytes = call.encode_to_vec();
        let decoded = VariantCall::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, call);
        assert_eq!(decoded.info_properties.len(), 2);
    }

    #[test]
    fn test_effect_edges_preserve_order() {
        let mut effect = VariantCallEffect::new("variantCallEffect:1");
        effect.in_gene_edges = vec!["gene:EGFR".into(), "gene:TP53".into()];
        let decoded =
            VariantCallEffect::decode(effect.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.in_gene_edges, vec!["gene:EGFR", "gene:TP53"]);
    }
}
