//! Heterogeneous entity wrapper for the full schema.
//!
//! Once serialized, records lose static type identity; `Entity` carries it
//! back as a serde tag so mixed streams (JSONL exports, generic graph loads)
//! stay self-describing.

use serde::{Deserialize, Serialize};

use super::{
    Biosample, Cohort, CohortMatrix, Domain, DoubleVector, Drug, Evidence, Gene,
    GeneDatabase, GeneExpression, GeneFamily, GeneSynonym, Individual, Keyspace,
    LinearSignature, MatrixAnalysis, MatrixVectorEdge, OntologyTerm, Phenotype,
    PhenotypeAssociation, Position, Pubmed, SignatureExpressionEdge, VariantCall,
    VariantCallEffect,
};

/// One outgoing edge reference as stated by a record.
///
/// Pure accessor output: `target` is the documented target type, `id` is
/// whatever string the record holds. Nothing here checks that the target
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRef {
    /// Name of the field the reference came from (camelCase, as documented).
    pub field: &'static str,
    /// Documented target entity type.
    pub target: &'static str,
    /// Identifier of the target entity.
    pub id: String,
}

/// Any record of the full schema variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Entity {
    Position(Position),
    Gene(Gene),
    GeneSynonym(GeneSynonym),
    GeneDatabase(GeneDatabase),
    GeneFamily(GeneFamily),
    Domain(Domain),
    Pubmed(Pubmed),
    VariantCall(VariantCall),
    VariantCallEffect(VariantCallEffect),
    Biosample(Biosample),
    Individual(Individual),
    GeneExpression(GeneExpression),
    Cohort(Cohort),
    DoubleVector(DoubleVector),
    Keyspace(Keyspace),
    CohortMatrix(CohortMatrix),
    MatrixVectorEdge(MatrixVectorEdge),
    MatrixAnalysis(MatrixAnalysis),
    PhenotypeAssociation(PhenotypeAssociation),
    Phenotype(Phenotype),
    OntologyTerm(OntologyTerm),
    Evidence(Evidence),
    Drug(Drug),
    LinearSignature(LinearSignature),
    SignatureExpressionEdge(SignatureExpressionEdge),
}

fn collect(refs: &mut Vec<EdgeRef>, field: &'static str, target: &'static str, ids: &[String]) {
    for id in ids {
        refs.push(EdgeRef { field, target, id: id.clone() });
    }
}

impl Entity {
    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Position(_) => "Position",
            Entity::Gene(_) => "Gene",
            Entity::GeneSynonym(_) => "GeneSynonym",
            Entity::GeneDatabase(_) => "GeneDatabase",
            Entity::GeneFamily(_) => "GeneFamily",
            Entity::Domain(_) => "Domain",
            Entity::Pubmed(_) => "Pubmed",
            Entity::VariantCall(_) => "VariantCall",
            Entity::VariantCallEffect(_) => "VariantCallEffect",
            Entity::Biosample(_) => "Biosample",
            Entity::Individual(_) => "Individual",
            Entity::GeneExpression(_) => "GeneExpression",
            Entity::Cohort(_) => "Cohort",
            Entity::DoubleVector(_) => "DoubleVector",
            Entity::Keyspace(_) => "Keyspace",
            Entity::CohortMatrix(_) => "CohortMatrix",
            Entity::MatrixVectorEdge(_) => "MatrixVectorEdge",
            Entity::MatrixAnalysis(_) => "MatrixAnalysis",
            Entity::PhenotypeAssociation(_) => "PhenotypeAssociation",
            Entity::Phenotype(_) => "Phenotype",
            Entity::OntologyTerm(_) => "OntologyTerm",
            Entity::Evidence(_) => "Evidence",
            Entity::Drug(_) => "Drug",
            Entity::LinearSignature(_) => "LinearSignature",
            Entity::SignatureExpressionEdge(_) => "SignatureExpressionEdge",
        }
    }

    /// The record's `id`. `None` for the two payload-bearing edge records,
    /// which are identified by their endpoints instead.
    pub fn id(&self) -> Option<&str> {
        match self {
            Entity::Position(e) => Some(&e.id),
            Entity::Gene(e) => Some(&e.id),
            Entity::GeneSynonym(e) => Some(&e.id),
            Entity::GeneDatabase(e) => Some(&e.id),
            Entity::GeneFamily(e) => Some(&e.id),
            Entity::Domain(e) => Some(&e.id),
            Entity::Pubmed(e) => Some(&e.id),
            Entity::VariantCall(e) => Some(&e.id),
            Entity::VariantCallEffect(e) => Some(&e.id),
            Entity::Biosample(e) => Some(&e.id),
            Entity::Individual(e) => Some(&e.id),
            Entity::GeneExpression(e) => Some(&e.id),
            Entity::Cohort(e) => Some(&e.id),
            Entity::DoubleVector(e) => Some(&e.id),
            Entity::Keyspace(e) => Some(&e.id),
            Entity::CohortMatrix(e) => Some(&e.id),
            Entity::MatrixVectorEdge(_) => None,
            Entity::MatrixAnalysis(e) => Some(&e.id),
            Entity::PhenotypeAssociation(e) => Some(&e.id),
            Entity::Phenotype(e) => Some(&e.id),
            Entity::OntologyTerm(e) => Some(&e.id),
            Entity::Evidence(e) => Some(&e.id),
            Entity::Drug(e) => Some(&e.id),
            Entity::LinearSignature(e) => Some(&e.id),
            Entity::SignatureExpressionEdge(_) => None,
        }
    }

    /// All outgoing edge references this record states.
    pub fn edge_refs(&self) -> Vec<EdgeRef> {
        let mut refs = Vec::new();
        match self {
            Entity::Position(_)
            | Entity::GeneDatabase(_)
            | Entity::GeneFamily(_)
            | Entity::Domain(_)
            | Entity::Individual(_)
            | Entity::Keyspace(_)
            | Entity::OntologyTerm(_)
            | Entity::Drug(_) => {}
            Entity::Gene(e) => {
                collect(&mut refs, "atPositionEdges", "Position", &e.at_position_edges);
                collect(&mut refs, "inFamilyEdges", "GeneFamily", &e.in_family_edges);
                collect(&mut refs, "inDatabaseEdges", "GeneDatabase", &e.in_database_edges);
                collect(&mut refs, "citedFromEdges", "Pubmed", &e.cited_from_edges);
            }
            Entity::GeneSynonym(e) => {
                collect(&mut refs, "synonymForEdges", "Gene", &e.synonym_for_edges);
                collect(&mut refs, "inDatabaseEdges", "GeneDatabase", &e.in_database_edges);
            }
            Entity::Pubmed(e) => {
                collect(&mut refs, "citationEdges", "Gene", &e.citation_edges);
            }
            Entity::VariantCall(e) => {
                collect(&mut refs, "atPositionEdges", "Position", &e.at_position_edges);
                collect(&mut refs, "tumorSampleEdges", "Biosample", &e.tumor_sample_edges);
                collect(&mut refs, "normalSampleEdges", "Biosample", &e.normal_sample_edges);
            }
            Entity::VariantCallEffect(e) => {
                collect(&mut refs, "inDomainEdges", "Domain", &e.in_domain_edges);
                collect(&mut refs, "inGeneEdges", "Gene", &e.in_gene_edges);
                collect(&mut refs, "effectOfEdges", "VariantCall", &e.effect_of_edges);
            }
            Entity::Biosample(e) => {
                collect(&mut refs, "sampleOfEdges", "Individual", &e.sample_of_edges);
            }
            Entity::GeneExpression(e) => {
                collect(&mut refs, "expressionForEdges", "Biosample", &e.expression_for_edges);
            }
            Entity::Cohort(e) => {
                collect(&mut refs, "hasSampleEdges", "Biosample", &e.has_sample_edges);
            }
            Entity::DoubleVector(e) => {
                collect(&mut refs, "inKeyspaceEdges", "Keyspace", &e.in_keyspace_edges);
            }
            Entity::CohortMatrix(e) => {
                collect(&mut refs, "forCohortEdges", "Cohort", &e.for_cohort_edges);
                collect(&mut refs, "inKeyspaceEdges", "Keyspace", &e.in_keyspace_edges);
            }
            Entity::MatrixVectorEdge(e) => {
                refs.push(EdgeRef { field: "in", target: "CohortMatrix", id: e.r#in.clone() });
                refs.push(EdgeRef { field: "out", target: "DoubleVector", id: e.out.clone() });
            }
            Entity::MatrixAnalysis(e) => {
                collect(&mut refs, "analysisOfEdges", "CohortMatrix", &e.analysis_of_edges);
            }
            Entity::PhenotypeAssociation(e) => {
                // hasGenotypeEdges may point at a VariantCall or a Gene; the
                // schema documents the union, not a single type.
                collect(&mut refs, "hasGenotypeEdges", "VariantCall|Gene", &e.has_genotype_edges);
                collect(&mut refs, "hasPhenotypeEdges", "Phenotype", &e.has_phenotype_edges);
                collect(&mut refs, "hasEvidenceEdges", "Evidence", &e.has_evidence_edges);
            }
            Entity::Phenotype(e) => {
                collect(&mut refs, "isTypeEdges", "OntologyTerm", &e.is_type_edges);
            }
            Entity::Evidence(e) => {
                collect(&mut refs, "hasSourceEdges", "Pubmed", &e.has_source_edges);
            }
            Entity::LinearSignature(e) => {
                collect(&mut refs, "predictsResponseToEdges", "Drug", &e.predicts_response_to_edges);
            }
            Entity::SignatureExpressionEdge(e) => {
                refs.push(EdgeRef { field: "in", target: "LinearSignature", id: e.r#in.clone() });
                refs.push(EdgeRef { field: "out", target: "GeneExpression", id: e.out.clone() });
            }
        }
        refs
    }
}

macro_rules! entity_from {
    ($($ty:ident),+ $(,)?) => {
        $(impl From<$ty> for Entity {
            fn from(e: $ty) -> Self { Entity::$ty(e) }
        })+
    };
}

entity_from!(
    Position, Gene, GeneSynonym, GeneDatabase, GeneFamily, Domain, Pubmed,
    VariantCall, VariantCallEffect, Biosample, Individual, GeneExpression,
    Cohort, DoubleVector, Keyspace, CohortMatrix, MatrixVectorEdge,
    MatrixAnalysis, PhenotypeAssociation, Phenotype, OntologyTerm, Evidence,
    Drug, LinearSignature, SignatureExpressionEdge,
);
