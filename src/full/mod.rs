//! # Full schema variant
//!
//! The richer of the two schema variants: every vertex carries the
//! `id`/`gid`/`type` triad, edges are typed per target
//! (`atPositionEdges`, `inFamilyEdges`, ...), and unpromoted source columns
//! live in `*Properties` maps.
//!
//! Field numbers are the wire contract and are permanent; see each message's
//! `#[prost(tag)]` attributes. Names are documentation only.
//!
//! This module is pure data — no I/O, no state, no async.

pub mod genomic;
pub mod variant;
pub mod sample;
pub mod matrix;
pub mod phenotype;
pub mod signature;
pub mod entity;

pub use genomic::{Domain, Gene, GeneDatabase, GeneFamily, GeneSynonym, Position, Pubmed};
pub use variant::{VariantCall, VariantCallEffect};
pub use sample::{Biosample, GeneExpression, Individual};
pub use matrix::{Cohort, CohortMatrix, DoubleVector, Keyspace, MatrixAnalysis, MatrixVectorEdge};
pub use phenotype::{Drug, Evidence, OntologyTerm, Phenotype, PhenotypeAssociation};
pub use signature::{LinearSignature, SignatureExpressionEdge};
pub use entity::{EdgeRef, Entity};
