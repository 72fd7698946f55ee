//! Genomic annotation vertices: positions, genes, families, domains, citations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A genomic interval on a chromosome.
///
/// The interval is half-open: `[start, end)`. `end == start` is a valid
/// zero-length position.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[prost(string, tag = "1")]
    pub id: String,
    /// Backend-assigned global identifier. Empty until the storage layer fills it.
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub chromosome: String,
    /// `"+"`, `"-"`, or empty when strandless.
    #[prost(string, tag = "5")]
    pub strand: String,
    #[prost(int64, tag = "6")]
    pub start: i64,
    #[prost(int64, tag = "7")]
    pub end: i64,
}

impl Position {
    pub const TYPE: &'static str = "Position";

    pub fn new(id: impl Into<String>, chromosome: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            gid: String::new(),
            r#type: Self::TYPE.to_owned(),
            chromosome: chromosome.into(),
            strand: String::new(),
            start,
            end,
        }
    }

    /// Number of bases covered. Zero when `end <= start`.
    pub fn len(&self) -> i64 {
        (self.end - self.start).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A gene, keyed by HUGO symbol in most ingested sources.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub symbol: String,
    #[prost(string, tag = "5")]
    pub description: String,
    #[prost(string, tag = "6")]
    pub chromosome: String,
    #[prost(string, tag = "7")]
    pub accession: String,
    /// Target: `Position`.
    #[prost(string, repeated, tag = "8")]
    pub at_position_edges: Vec<String>,
    /// Target: `GeneFamily`.
    #[prost(string, repeated, tag = "9")]
    pub in_family_edges: Vec<String>,
    /// Target: `GeneDatabase`.
    #[prost(string, repeated, tag = "10")]
    pub in_database_edges: Vec<String>,
    /// Target: `Pubmed`. Reverse of `Pubmed.citationEdges`.
    #[prost(string, repeated, tag = "11")]
    pub cited_from_edges: Vec<String>,
    /// Source columns not promoted to first-class fields.
    #[prost(map = "string, string", tag = "12")]
    pub info_properties: HashMap<String, String>,
}

impl Gene {
    pub const TYPE: &'static str = "Gene";

    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// An alternate symbol for a gene.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneSynonym {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub symbol: String,
    /// Target: `Gene`.
    #[prost(string, repeated, tag = "5")]
    pub synonym_for_edges: Vec<String>,
    /// Target: `GeneDatabase`.
    #[prost(string, repeated, tag = "6")]
    pub in_database_edges: Vec<String>,
}

impl GeneSynonym {
    pub const TYPE: &'static str = "GeneSynonym";

    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// A source database a gene or synonym was imported from (e.g. HGNC, Entrez).
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneDatabase {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub name: String,
}

impl GeneDatabase {
    pub const TYPE: &'static str = "GeneDatabase";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// A gene family grouping (e.g. an HGNC family tag).
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneFamily {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub tag: String,
    #[prost(string, tag = "5")]
    pub description: String,
}

impl GeneFamily {
    pub const TYPE: &'static str = "GeneFamily";

    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// A protein domain referenced by variant effects.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub name: String,
}

impl Domain {
    pub const TYPE: &'static str = "Domain";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}

/// A literature citation.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pubmed {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub gid: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(string, tag = "4")]
    pub title: String,
    #[prost(string, tag = "5")]
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[prost(string, tag = "6")]
    pub date: String,
    /// Target: `Gene`. Reverse of `Gene.citedFromEdges`.
    #[prost(string, repeated, tag = "7")]
    pub citation_edges: Vec<String>,
}

impl Pubmed {
    pub const TYPE: &'static str = "Pubmed";

    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            r#type: Self::TYPE.to_owned(),
            ..Default::default()
        }
    }
}
