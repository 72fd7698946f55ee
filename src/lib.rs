//! # oncograph — Property Graph Schema for Cancer Genomics
//!
//! A schema catalog for a cancer-genomics property graph: variants, genes,
//! biosamples, individuals, phenotypes, drugs, expression matrices, and the
//! edges between them. The crate is the contract between ingestion pipelines
//! (MAF, GFF3, clinical tables) and whatever graph-storage backend resolves
//! the edges — it carries no query engine and no storage of its own.
//!
//! ## Design Principles
//!
//! 1. **Records are flat**: scalar fields, string-keyed maps, and string
//!    edge fields. No back-references, no in-memory pointer graph.
//! 2. **Edges are identifiers**: a `repeated string` field named
//!    `<verb><Target>Edges` holds ids of target entities; resolution is the
//!    consumer's job (see [`EntityIndex`]).
//! 3. **Field numbers are forever**: the wire contract is protobuf field
//!    tags, written explicitly on every field and never reused.
//! 4. **Nothing is validated**: dangling edges, duplicate ids, and
//!    out-of-order intervals pass through encode/decode untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use oncograph::full::{Entity, Gene, GeneFamily};
//! use oncograph::EntityIndex;
//!
//! let mut egfr = Gene::new("gene:EGFR", "EGFR");
//! egfr.in_family_edges.push("geneFamily:ERBB".into());
//!
//! let index: EntityIndex = [
//!     Entity::from(egfr),
//!     Entity::from(GeneFamily::new("geneFamily:ERBB", "ERBB")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let gene = index.get("gene:EGFR").unwrap();
//! let family = index.resolve(&gene.edge_refs()[0]).unwrap();
//! assert_eq!(family.kind(), "GeneFamily");
//! ```
//!
//! ## Schema Variants
//!
//! | Variant | Module | Identifier | Edges | Property bags |
//! |---------|--------|------------|-------|---------------|
//! | Full | [`full`] | `id` + backend `gid` + explicit `type` | typed per target | `*Properties` maps |
//! | Lite | [`lite`] | single `name` | generic | plain `info`/`observations` |
//!
//! The variants are two distinct schema versions with different field
//! numbering. They are never wire-compatible, never mixed within one
//! dataset, and nothing in this crate converts between them.

// ============================================================================
// Modules
// ============================================================================

pub mod full;
pub mod lite;
pub mod index;
pub mod wire;
pub mod export;

// ============================================================================
// Re-exports
// ============================================================================

pub use full::{EdgeRef, Entity};
pub use index::EntityIndex;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("encode error: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("export line {line}: {source}")]
    ExportLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
