//! Transcription and translation.
//!
//! [`transcribe`] reads a DNA template strand and pairs each base with its
//! mRNA complement. [`translate`] walks the mRNA three bases at a time from
//! the first base and stops at the first stop codon. A trailing partial
//! codon is ignored.

use serde::Serialize;
use tracing::debug;

use crate::codon::{STOP, residue};

/// Template strand loaded on the bench at start.
pub const DEFAULT_DNA: &str = "ATGCGATCGTAGC";
/// Joins residues in a protein string, e.g. `Tyr-Ala-Ser`.
pub const RESIDUE_SEPARATOR: &str = "-";

pub type GeneticsResult<T> = Result<T, GeneticsError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticsError {
    #[error("'{base}' at position {position} is not a DNA base (A, T, G or C)")]
    InvalidBase { position: usize, base: char },
}

fn complement(base: char) -> Option<char> {
    match base {
        'A' => Some('U'),
        'T' => Some('A'),
        'G' => Some('C'),
        'C' => Some('G'),
        _ => None,
    }
}

/// mRNA complementary to a DNA template strand.
///
/// Case is ignored and whitespace is skipped. `position` in the error is the
/// zero-based character index in `dna`.
pub fn transcribe(dna: &str) -> GeneticsResult<String> {
    dna.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, base)| {
            complement(base.to_ascii_uppercase())
                .ok_or(GeneticsError::InvalidBase { position, base })
        })
        .collect()
}

/// Residues up to the first stop codon, and that stop codon if one was read.
fn read_frame(rna: &str) -> (Vec<&'static str>, Option<String>) {
    let bases: Vec<char> = rna.chars().collect();
    let mut residues = Vec::with_capacity(bases.len() / 3);
    for codon in bases.chunks_exact(3) {
        let codon: String = codon.iter().collect();
        match residue(&codon) {
            STOP => return (residues, Some(codon)),
            r => residues.push(r),
        }
    }
    (residues, None)
}

/// Three-letter residues encoded by `rna`, ending before the first stop codon.
pub fn translate(rna: &str) -> Vec<&'static str> {
    read_frame(rna).0
}

/// Result of running a DNA strand through transcription and translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expression {
    /// Template strand as read, upper case without whitespace.
    pub dna: String,
    pub rna: String,
    pub residues: Vec<String>,
    pub stop_codon: Option<String>,
}

impl Expression {
    /// Residues joined with [`RESIDUE_SEPARATOR`]; empty when nothing was translated.
    pub fn protein(&self) -> String {
        self.residues.join(RESIDUE_SEPARATOR)
    }
}

pub fn express(dna: &str) -> GeneticsResult<Expression> {
    let rna = transcribe(dna)?;
    let (residues, stop_codon) = read_frame(&rna);
    debug!(bases = rna.len(), residues = residues.len(), stopped = stop_codon.is_some(), "expressed");
    Ok(Expression {
        dna: dna
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect(),
        residues: residues.into_iter().map(String::from).collect(),
        rna,
        stop_codon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::UNKNOWN_RESIDUE;

    #[test]
    fn default_strand() {
        assert_eq!(transcribe(DEFAULT_DNA).unwrap(), "UACGCUAGCAUCG");
        assert_eq!(translate("UACGCUAGCAUCG"), vec!["Tyr", "Ala", "Ser", "Ile"]);
    }

    #[test]
    fn every_base_pairs_with_its_complement() {
        assert_eq!(transcribe("ATGC").unwrap(), "UACG");
        assert_eq!(transcribe("gg cc").unwrap(), "CCGG");
    }

    #[test]
    fn invalid_base_reports_position() {
        assert_eq!(
            transcribe("ATXG"),
            Err(GeneticsError::InvalidBase { position: 2, base: 'X' })
        );
        // U belongs to RNA, not the template strand
        assert!(transcribe("AUG").is_err());
    }

    #[test]
    fn translation_stops_at_first_stop_codon() {
        assert_eq!(translate("AUGUUUUAAGGG"), vec!["Met", "Phe"]);
        assert!(translate("UGAAUG").is_empty());
    }

    #[test]
    fn partial_codon_is_ignored() {
        assert_eq!(translate("AUGUU"), vec!["Met"]);
        assert!(translate("AU").is_empty());
    }

    #[test]
    fn unknown_codons_are_marked() {
        assert_eq!(translate("AUGXYZ"), vec!["Met", UNKNOWN_RESIDUE]);
    }

    #[test]
    fn express_records_stop_codon() {
        // TAC ATT -> AUG UAA
        let expression = express("tac att ccc").unwrap();
        assert_eq!(expression.dna, "TACATTCCC");
        assert_eq!(expression.rna, "AUGUAAGGG");
        assert_eq!(expression.protein(), "Met");
        assert_eq!(expression.stop_codon.as_deref(), Some("UAA"));

        let open = express(DEFAULT_DNA).unwrap();
        assert_eq!(open.protein(), "Tyr-Ala-Ser-Ile");
        assert!(open.stop_codon.is_none());
    }
}
