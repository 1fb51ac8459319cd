use proptest::prelude::*;
use vl_bio::{CODON_TABLE, DEFAULT_DNA, STOP, express, transcribe, translate};

#[test]
fn default_strand_walkthrough() {
    let expression = express(DEFAULT_DNA).unwrap();
    let json = serde_json::to_value(&expression).unwrap();
    assert_eq!(json["rna"], "UACGCUAGCAUCG");
    assert_eq!(json["residues"].as_array().map(Vec::len), Some(4));
    assert!(json["stopCodon"].is_null());
}

#[test]
fn every_sense_codon_translates_to_its_residue() {
    for (codon, residue) in CODON_TABLE.iter().filter(|(_, r)| *r != STOP) {
        assert_eq!(translate(codon), vec![*residue], "{codon}");
    }
}

fn dna() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['A', 'T', 'G', 'C']), 0..60)
        .prop_map(|bases| bases.into_iter().collect())
}

proptest! {
    #[test]
    fn transcription_keeps_length_and_drops_thymine(strand in dna()) {
        let rna = transcribe(&strand).unwrap();
        prop_assert_eq!(rna.len(), strand.len());
        prop_assert!(!rna.contains('T'));
    }

    #[test]
    fn protein_never_outgrows_the_codon_count(strand in dna()) {
        let expression = express(&strand).unwrap();
        prop_assert!(expression.residues.len() <= strand.len() / 3);
        prop_assert!(expression.residues.iter().all(|r| r != STOP));
    }
}
