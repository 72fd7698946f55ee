//! Phenotypes, ontology terms, evidence, and drugs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Links a genotype (variant call or gene) to a phenotype, with evidence.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhenotypeAssociation {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    /// Target: `VariantCall` or `Gene`.
    #[prost(string, repeated, tag = "4")]
    pub has_genotype_edges: Vec<String>,
    /// Target: `Phenotype`.
    #[prost(string, repeated, tag = "5")]
    pub has_phenotype_edges: Vec<String>,
    /// Target: `Evidence`.
    #[prost(string, repeated, tag = "6")]
    pub has_evidence_edges: Vec<String>,
    #[prost(map = "string, string", tag = "7")]
    pub info_properties: HashMap<String, String>,
}

impl PhenotypeAssociation {
    pub const TYPE: &'static str = "PhenotypeAssociation";

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// An observable trait or condition.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phenotype {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(string, tag = "5")]
    pub description: String,
    /// Target: `OntologyTerm`.
    #[prost(string, repeated, tag = "6")]
    pub is_type_edges: Vec<String>,
}

impl Phenotype {
    pub const TYPE: &'static str = "Phenotype";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// A term in a controlled vocabulary (e.g. a Disease Ontology entry).
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyTerm {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub term: String,
    #[prost(string, tag = "5")]
    pub source: String,
}

impl OntologyTerm {
    pub const TYPE: &'static str = "OntologyTerm";

    pub fn new(id: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// Support for a phenotype association, usually a literature reference.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub description: String,
    /// Target: `Pubmed`.
    #[prost(string, repeated, tag = "5")]
    pub has_source_edges: Vec<String>,
    #[prost(map = "string, string", tag = "6")]
    pub info_properties: HashMap<String, String>,
}

impl Evidence {
    pub const TYPE: &'static str = "Evidence";

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// A therapeutic compound.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(string, repeated, tag = "5")]
    pub synonyms: Vec<String>,
    #[prost(map = "string, string", tag = "6")]
    pub info_properties: HashMap<String, String>,
}

impl Drug {
    pub const TYPE: &'static str = "Drug";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}
