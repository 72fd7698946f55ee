//! Encode/decode round-trips for every entity type in both schema variants.
//!
//! The schema has no behavior beyond representation, so the contract to pin
//! down is `decode(encode(x)) == x` — including empty maps, empty edge
//! lists, and zero-valued scalars.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use prost::Message;

use oncograph::{full, lite};

fn roundtrip<M: Message + Default + PartialEq + Clone>(msg: &M) -> M {
    M::decode(msg.encode_to_vec().as_slice()).unwrap()
}

// ============================================================================
// 1. Every full-variant type survives a round-trip when fully populated
// ============================================================================

#[test]
fn test_full_genomic_roundtrips() {
    let mut position = full::Position::new("position:7:55249071:55249072", "7", 55_249_071, 55_249_072);
    position.strand = "+".into();
    assert_eq!(roundtrip(&position), position);

    let mut gene = full::Gene::new("gene:EGFR", "EGFR");
    gene.description = "epidermal growth factor receptor".into();
    gene.chromosome = "7".into();
    gene.accession = "NM_005228".into();
    gene.at_position_edges.push(position.id.clone());
    gene.in_family_edges.push("geneFamily:ERBB".into());
    gene.in_database_edges.push("geneDatabase:hgnc".into());
    gene.cited_from_edges.push("pubmed:23000897".into());
    gene.info_properties.insert("locusGroup".into(), "protein-coding gene".into());
    assert_eq!(roundtrip(&gene), gene);

    let mut synonym = full::GeneSynonym::new("geneSynonym:ERBB1", "ERBB1");
    synonym.synonym_for_edges.push(gene.id.clone());
    synonym.in_database_edges.push("geneDatabase:hgnc".into());
    assert_eq!(roundtrip(&synonym), synonym);

    assert_eq!(
        roundtrip(&full::GeneDatabase::new("geneDatabase:hgnc", "HGNC")),
        full::GeneDatabase::new("geneDatabase:hgnc", "HGNC")
    );

    let mut family = full::GeneFamily::new("geneFamily:ERBB", "ERBB");
    family.description = "Erb-b2 receptor tyrosine kinases".into();
    assert_eq!(roundtrip(&family), family);

    assert_eq!(
        roundtrip(&full::Domain::new("domain:PF07714", "PK_Tyr_Ser-Thr")),
        full::Domain::new("domain:PF07714", "PK_Tyr_Ser-Thr")
    );

    let mut pubmed = full::Pubmed::new("pubmed:23000897", "Comprehensive genomic characterization");
    pubmed.abstract_text = "...".into();
    pubmed.date = "2012-09-27".into();
    pubmed.citation_edges.push(gene.id.clone());
    assert_eq!(roundtrip(&pubmed), pubmed);
}

// ============================================================================
// 2. Variant calls and effects
// ============================================================================

#[test]
fn test_full_variant_roundtrips() {
    let mut call = full::VariantCall::new("variantCall:broad:TCGA-02-0001:7:55249071");
    call.source = "broad.mit.edu".into();
    call.variant_type = "SNP".into();
    call.reference_allele = "C".into();
    call.normal_allele1 = "C".into();
    call.normal_allele2 = "C".into();
    call.tumor_allele1 = "T".into();
    call.tumor_allele2 = "T".into();
    call.sequencer = "Illumina GAIIx".into();
    call.at_position_edges.push("position:7:55249071:55249072".into());
    call.tumor_sample_edges.push("biosample:TCGA-02-0001-01".into());
    call.normal_sample_edges.push("biosample:TCGA-02-0001-10".into());
    call.info_properties.insert("ncbiBuild".into(), "37".into());
    assert_eq!(roundtrip(&call), call);

    let mut effect = full::VariantCallEffect::new("variantCallEffect:EGFR:T790M");
    effect.source = "broad.mit.edu".into();
    effect.variant_classification = "Missense_Mutation".into();
    effect.dbsnp_rs = "rs121434569".into();
    effect.dbsnp_val_status = "byCluster".into();
    effect.in_domain_edges.push("domain:PF07714".into());
    effect.in_gene_edges.push("gene:EGFR".into());
    effect.effect_of_edges.push(call.id.clone());
    assert_eq!(roundtrip(&effect), effect);
}

// ============================================================================
// 3. Samples, subjects, expression
// ============================================================================

#[test]
fn test_full_sample_roundtrips() {
    let mut sample = full::Biosample::new("biosample:TCGA-02-0001-01", "TCGA-02-0001-01");
    sample.source = "tcga".into();
    sample.sample_type = "tumor".into();
    sample.sample_of_edges.push("individual:TCGA-02-0001".into());
    sample.observations_properties.insert("tissueSourceSite".into(), "02".into());
    assert_eq!(roundtrip(&sample), sample);

    let mut individual = full::Individual::new("individual:TCGA-02-0001");
    individual.source = "tcga".into();
    individual.name = "TCGA-02-0001".into();
    individual.observations_properties.insert("vitalStatus".into(), "DECEASED".into());
    individual.observations_properties.insert("daysToDeath".into(), "358".into());
    assert_eq!(roundtrip(&individual), individual);

    let mut expr = full::GeneExpression::new("geneExpression:TCGA-02-0001-01");
    expr.source = "tcga".into();
    expr.barcode = "TCGA-02-0001-01".into();
    expr.expression_for_edges.push(sample.id.clone());
    expr.expressions.insert("gene:EGFR".into(), 11.53);
    expr.expressions.insert("gene:TP53".into(), 0.0);
    assert_eq!(roundtrip(&expr), expr);
}

// ============================================================================
// 4. Cohort/matrix records, including the payload-bearing edge
// ============================================================================

#[test]
fn test_full_matrix_roundtrips() {
    let mut cohort = full::Cohort::new("cohort:GBM", "GBM");
    cohort.has_sample_edges.push("biosample:TCGA-02-0001-01".into());
    assert_eq!(roundtrip(&cohort), cohort);

    let mut keyspace = full::Keyspace::new("keyspace:hugo", "hugo");
    keyspace.keys = vec!["EGFR".into(), "TP53".into()];
    assert_eq!(roundtrip(&keyspace), keyspace);

    let mut vector = full::DoubleVector::new("doubleVector:GBM:TCGA-02-0001-01");
    vector.in_keyspace_edges.push(keyspace.id.clone());
    vector.values.insert("EGFR".into(), 11.53);
    assert_eq!(roundtrip(&vector), vector);

    let mut matrix = full::CohortMatrix::new("cohortMatrix:GBM:expression", "GBM expression");
    matrix.for_cohort_edges.push(cohort.id.clone());
    matrix.in_keyspace_edges.push(keyspace.id.clone());
    assert_eq!(roundtrip(&matrix), matrix);

    let edge = full::MatrixVectorEdge::new(matrix.id.clone(), vector.id.clone(), "TCGA-02-0001-01");
    assert_eq!(roundtrip(&edge), edge);

    let mut analysis = full::MatrixAnalysis::new("matrixAnalysis:GBM:pca", "GBM PCA");
    analysis.analysis_of_edges.push(matrix.id.clone());
    analysis.info_properties.insert("components".into(), "10".into());
    assert_eq!(roundtrip(&analysis), analysis);
}

// ============================================================================
// 5. Phenotype/evidence records
// ============================================================================

#[test]
fn test_full_phenotype_roundtrips() {
    let mut term = full::OntologyTerm::new("ontologyTerm:DOID:3068", "glioblastoma");
    term.source = "disease-ontology".into();
    assert_eq!(roundtrip(&term), term);

    let mut phenotype = full::Phenotype::new("phenotype:glioblastoma", "glioblastoma");
    phenotype.description = "grade IV astrocytoma".into();
    phenotype.is_type_edges.push(term.id.clone());
    assert_eq!(roundtrip(&phenotype), phenotype);

    let mut evidence = full::Evidence::new("evidence:cgi:1");
    evidence.description = "clinical trial response".into();
    evidence.has_source_edges.push("pubmed:23000897".into());
    assert_eq!(roundtrip(&evidence), evidence);

    let mut drug = full::Drug::new("drug:gefitinib", "GEFITINIB");
    drug.synonyms = vec!["Iressa".into(), "ZD1839".into()];
    drug.info_properties.insert("atcCode".into(), "L01EB01".into());
    assert_eq!(roundtrip(&drug), drug);

    let mut assoc = full::PhenotypeAssociation::new("phenotypeAssociation:cgi:1");
    assoc.has_genotype_edges.push("gene:EGFR".into());
    assoc.has_phenotype_edges.push(phenotype.id.clone());
    assoc.has_evidence_edges.push(evidence.id.clone());
    assoc.info_properties.insert("responseType".into(), "sensitive".into());
    assert_eq!(roundtrip(&assoc), assoc);
}

// ============================================================================
// 6. Signatures
// ============================================================================

#[test]
fn test_full_signature_roundtrips() {
    let mut sig = full::LinearSignature::new("linearSignature:gefitinib");
    sig.predicts = "gefitinib-response".into();
    sig.intercept = -0.25;
    sig.quantile_normalization = vec![0.1, 0.5, 0.9];
    sig.background = vec![-1.2, 0.0, 1.2];
    sig.coefficients.insert("gene:EGFR".into(), 0.8);
    sig.coefficients.insert("gene:KRAS".into(), -0.3);
    sig.predicts_response_to_edges.push("drug:gefitinib".into());
    assert_eq!(roundtrip(&sig), sig);

    let edge = full::SignatureExpressionEdge::new(
        sig.id.clone(),
        "geneExpression:TCGA-02-0001-01",
        0.73,
    );
    assert_eq!(roundtrip(&edge), edge);
}

// ============================================================================
// 7. Default (all-zero) records round-trip to themselves
// ============================================================================

#[test]
fn test_full_defaults_roundtrip() {
    assert_eq!(roundtrip(&full::Position::default()), full::Position::default());
    assert_eq!(roundtrip(&full::Gene::default()), full::Gene::default());
    assert_eq!(roundtrip(&full::VariantCall::default()), full::VariantCall::default());
    assert_eq!(roundtrip(&full::Biosample::default()), full::Biosample::default());
    assert_eq!(roundtrip(&full::DoubleVector::default()), full::DoubleVector::default());
    assert_eq!(roundtrip(&full::LinearSignature::default()), full::LinearSignature::default());

    // A default record encodes to nothing at all: every field is at its zero value.
    assert!(full::Gene::default().encode_to_vec().is_empty());
}

// ============================================================================
// 8. Lite-variant round-trips
// ============================================================================

#[test]
fn test_lite_roundtrips() {
    let mut feature = lite::Feature::new("EGFR", "7", 55_086_714, 55_324_313);
    feature.strand = "+".into();
    feature.feature_type = "gene".into();
    feature.member_of_edges.push("chr7".into());
    feature.info.insert("biotype".into(), "protein_coding".into());
    assert_eq!(roundtrip(&feature), feature);

    let mut sample = lite::Biosample::new("TCGA-02-0001-01");
    sample.source = "tcga".into();
    sample.barcode = "TCGA-02-0001-01".into();
    sample.sample_type = "tumor".into();
    sample.has_expression_edges.push("expr:TCGA-02-0001-01".into());
    assert_eq!(roundtrip(&sample), sample);

    let mut individual = lite::Individual::new("TCGA-02-0001");
    individual.source = "tcga".into();
    individual.has_sample_edges.push(sample.name.clone());
    individual.observations.insert("gender".into(), "FEMALE".into());
    assert_eq!(roundtrip(&individual), individual);

    let mut call = lite::VariantCall::new("variant:7:55249071:C:T");
    call.source = "maf".into();
    call.reference_allele = "C".into();
    call.alternate_allele = "T".into();
    call.at_feature_edges.push(feature.name.clone());
    call.called_in_edges.push(sample.name.clone());
    call.info.insert("center".into(), "broad".into());
    assert_eq!(roundtrip(&call), call);

    let mut expr = lite::GeneExpression::new("expr:TCGA-02-0001-01");
    expr.barcode = "TCGA-02-0001-01".into();
    expr.expression_of_edges.push(sample.name.clone());
    expr.expressions.insert("EGFR".into(), 11.53);
    assert_eq!(roundtrip(&expr), expr);
}

// ============================================================================
// 9. Property-based round-trips
// ============================================================================

proptest! {
    #[test]
    fn prop_position_roundtrip(
        id in "[a-z0-9:.-]{0,24}",
        chromosome in "[0-9XYM]{1,2}",
        strand in "[+-]?",
        start in 0i64..3_000_000_000,
        span in 0i64..100_000,
    ) {
        let mut p = full::Position::new(id, chromosome, start, start + span);
        p.strand = strand;
        prop_assert_eq!(roundtrip(&p), p);
    }

    #[test]
    fn prop_gene_roundtrip(
        id in "[a-z0-9:.-]{0,24}",
        symbol in "[A-Z0-9]{1,8}",
        edges in proptest::collection::vec("[a-z0-9:]{1,16}", 0..8),
        info in proptest::collection::hash_map("[a-zA-Z]{1,12}", "[ -~]{0,20}", 0..6),
    ) {
        let mut g = full::Gene::new(id, symbol);
        g.in_family_edges = edges.clone();
        g.info_properties = info;
        let decoded = roundtrip(&g);
        prop_assert_eq!(&decoded.in_family_edges, &edges);
        prop_assert_eq!(decoded, g);
    }

    #[test]
    fn prop_expression_roundtrip(
        id in "[a-z0-9:.-]{0,24}",
        values in proptest::collection::hash_map("[A-Z0-9]{1,8}", -1e12f64..1e12, 0..10),
    ) {
        let mut e = full::GeneExpression::new(id);
        e.expressions = values;
        prop_assert_eq!(roundtrip(&e), e);
    }
}
