//! # Lite schema variant
//!
//! The collapsed variant: a single `name` field is the identifier, edges are
//! generic, and unpromoted columns live in plain `info`/`observations` maps.
//! `Feature` stands in for the full variant's `Gene` + `Position` pair.
//!
//! Lite and full are two distinct schema versions with different field
//! numbering; they are never wire-compatible and never mixed within one
//! dataset. No conversions between the variants exist, by design.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A generic annotated genomic region (GFF3-style).
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub chromosome: String,
    /// Half-open `[start, end)`.
    #[prost(int64, tag = "3")]
    pub start: i64,
    #[prost(int64, tag = "4")]
    pub end: i64,
    #[prost(string, tag = "5")]
    pub strand: String,
    /// "gene", "exon", "CDS", ...
    #[prost(string, tag = "6")]
    pub feature_type: String,
    /// Target: `Feature` (GFF3 Parent relation).
    #[prost(string, repeated, tag = "7")]
    pub member_of_edges: Vec<String>,
    #[prost(map = "string, string", tag = "8")]
    pub info: HashMap<String, String>,
}

impl Feature {
    pub fn new(name: impl Into<String>, chromosome: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            name: name.into(),
            chromosome: chromosome.into(),
            start,
            end,
            ..Default::default()
        }
    }

    pub fn len(&self) -> i64 {
        (self.end - self.start).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A biological sample.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biosample {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub source: String,
    #[prost(string, tag = "3")]
    pub barcode: String,
    #[prost(string, tag = "4")]
    pub sample_type: String,
    /// Target: `GeneExpression`.
    #[prost(string, repeated, tag = "5")]
    pub has_expression_edges: Vec<String>,
}

impl Biosample {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A study subject.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub source: String,
    /// Target: `Biosample`.
    #[prost(string, repeated, tag = "3")]
    pub has_sample_edges: Vec<String>,
    #[prost(map = "string, string", tag = "4")]
    pub observations: HashMap<String, String>,
}

impl Individual {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A variant call, collapsed to reference/alternate alleles.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantCall {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub source: String,
    #[prost(string, tag = "3")]
    pub reference_allele: String,
    #[prost(string, tag = "4")]
    pub alternate_allele: String,
    /// Target: `Feature`.
    #[prost(string, repeated, tag = "5")]
    pub at_feature_edges: Vec<String>,
    /// Target: `Biosample`.
    #[prost(string, repeated, tag = "6")]
    pub called_in_edges: Vec<String>,
    #[prost(map = "string, string", tag = "7")]
    pub info: HashMap<String, String>,
}

impl VariantCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Per-sample expression values keyed by feature name.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneExpression {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub barcode: String,
    /// Target: `Biosample`. Reverse of `Biosample.hasExpressionEdges`.
    #[prost(string, repeated, tag = "3")]
    pub expression_of_edges: Vec<String>,
    #[prost(map = "string, double", tag = "4")]
    pub expressions: HashMap<String, f64>,
}

impl GeneExpression {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Any record of the lite schema variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Entity {
    Feature(Feature),
    Biosample(Biosample),
    Individual(Individual),
    VariantCall(VariantCall),
    GeneExpression(GeneExpression),
}

impl Entity {
    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Feature(_) => "Feature",
            Entity::Biosample(_) => "Biosample",
            Entity::Individual(_) => "Individual",
            Entity::VariantCall(_) => "VariantCall",
            Entity::GeneExpression(_) => "GeneExpression",
        }
    }

    /// The record's `name`, the lite variant's identifier.
    pub fn name(&self) -> &str {
        match self {
            Entity::Feature(e) => &e.name,
            Entity::Biosample(e) => &e.name,
            Entity::Individual(e) => &e.name,
            Entity::VariantCall(e) => &e.name,
            Entity::GeneExpression(e) => &e.name,
        }
    }
}

macro_rules! entity_from {
    ($($ty:ident),+ $(,)?) => {
        $(impl From<$ty> for Entity {
            fn from(e: $ty) -> Self { Entity::$ty(e) }
        })+
    };
}

entity_from!(Feature, Biosample, Individual, VariantCall, GeneExpression);
